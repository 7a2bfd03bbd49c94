//! Property-based tests for the sequence generator and spiral layout.

use proptest::prelude::*;

use fibspiral_core::layout::{layout, Direction};
use fibspiral_core::sequence::generate;
use fibspiral_core::viewport::Viewport;
use fibspiral_core::{TermCount, DEFAULT_MARGIN};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every valid term count yields that many terms obeying the recurrence.
    #[test]
    fn generated_length_and_recurrence(n in 1i64..=25) {
        let seq = generate(n);
        prop_assert_eq!(seq.len() as i64, n);
        if n >= 2 {
            prop_assert_eq!(seq[0], 1);
            prop_assert_eq!(seq[1], 1);
        }
        for i in 2..seq.len() {
            prop_assert_eq!(seq[i], seq[i - 1] + seq[i - 2], "recurrence broken at {}", i);
        }
    }

    /// Non-positive counts always produce nothing.
    #[test]
    fn non_positive_is_empty(n in i64::MIN..=0) {
        prop_assert!(generate(n).is_empty());
        prop_assert!(layout(&generate(n)).is_empty());
    }

    /// The layout has one square per term, sized by the term.
    #[test]
    fn one_square_per_term(n in 1i64..=25) {
        let seq = generate(n);
        let layout = layout(&seq);
        prop_assert_eq!(layout.len(), seq.len());
        for (i, square) in layout.squares().iter().enumerate() {
            prop_assert_eq!(square.index, i);
            prop_assert_eq!(square.size, seq[i]);
        }
    }

    /// The bounding box is the tightest box around every square.
    #[test]
    fn bounds_are_tight(n in 1i64..=90) {
        let layout = layout(&generate(n));
        let b = layout.bounds();
        let squares = layout.squares();
        prop_assert_eq!(b.min_x, squares.iter().map(|s| s.x).min().unwrap());
        prop_assert_eq!(b.max_x, squares.iter().map(|s| s.right()).max().unwrap());
        prop_assert_eq!(b.min_y, squares.iter().map(|s| s.y).min().unwrap());
        prop_assert_eq!(b.max_y, squares.iter().map(|s| s.bottom()).max().unwrap());
    }

    /// Each square after the first two touches its predecessor on the side
    /// named by its placement direction.
    #[test]
    fn squares_attach_to_predecessor(n in 3i64..=25) {
        let layout = layout(&generate(n));
        for pair in layout.squares().windows(2).skip(1) {
            let (prev, cur) = (pair[0], pair[1]);
            match Direction::for_index(cur.index) {
                Direction::Right => {
                    prop_assert_eq!(cur.x, prev.right());
                    prop_assert_eq!(cur.bottom(), prev.bottom());
                }
                Direction::Up => {
                    prop_assert_eq!(cur.bottom(), prev.y);
                    prop_assert_eq!(cur.right(), prev.right());
                }
                Direction::Left => {
                    prop_assert_eq!(cur.right(), prev.x);
                    prop_assert_eq!(cur.y, prev.y);
                }
                Direction::Down => {
                    prop_assert_eq!(cur.y, prev.bottom());
                    prop_assert_eq!(cur.x, prev.x);
                }
            }
        }
    }

    /// The fitted scale is finite and positive for any non-empty surface.
    #[test]
    fn scale_is_finite(n in 0i64..=25, w in 1u32..2000, h in 1u32..2000) {
        let layout = layout(&generate(n));
        let vp = Viewport::fit(layout.bounds(), f64::from(w), f64::from(h), DEFAULT_MARGIN);
        prop_assert!(vp.scale().is_finite());
        prop_assert!(vp.scale() > 0.0);
    }

    /// Every square lands inside the surface, however small the surface.
    #[test]
    fn squares_stay_on_surface(n in 1i64..=25, w in 1u32..400, h in 1u32..400) {
        let (w, h) = (f64::from(w), f64::from(h));
        let layout = layout(&generate(n));
        let vp = Viewport::fit(layout.bounds(), w, h, DEFAULT_MARGIN);
        for square in layout.squares() {
            let r = vp.square_rect(square);
            prop_assert!(r.width > 0.0);
            prop_assert!(r.x >= vp.margin() - 1e-6 && r.y >= vp.margin() - 1e-6);
            prop_assert!(r.x + r.width <= w - vp.margin() + 1e-6);
            prop_assert!(r.y + r.height <= h - vp.margin() + 1e-6);
        }
    }

    /// Parsing accepts exactly the integers in [1, 25].
    #[test]
    fn term_count_boundary(n in -100i64..100) {
        let parsed = TermCount::parse(&n.to_string());
        prop_assert_eq!(parsed.is_ok(), (1..=25).contains(&n));
    }
}
