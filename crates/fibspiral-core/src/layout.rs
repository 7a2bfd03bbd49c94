//! Spiral layout engine.
//!
//! Places one square per term on an abstract unit grid (y grows downward).
//! Squares 0 and 1 are unit squares side by side; every later square is
//! attached to its predecessor in a direction that cycles right, up, left,
//! down.

use serde::Serialize;

use crate::sequence::Sequence;

/// Direction in which a square is attached to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// Placement direction for the square at `index`.
    ///
    /// Only meaningful for `index >= 2`; the first two squares are fixed.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        match index.saturating_sub(2) % 4 {
            0 => Self::Right,
            1 => Self::Up,
            2 => Self::Left,
            _ => Self::Down,
        }
    }
}

/// A square positioned on the grid. `x`, `y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedSquare {
    pub x: i64,
    pub y: i64,
    pub size: u64,
    pub index: usize,
}

impl PlacedSquare {
    /// Side length as a signed grid distance.
    #[must_use]
    pub fn side(&self) -> i64 {
        grid_len(self.size)
    }

    /// Right edge (`x + size`).
    #[must_use]
    pub fn right(&self) -> i64 {
        self.x + self.side()
    }

    /// Bottom edge (`y + size`).
    #[must_use]
    pub fn bottom(&self) -> i64 {
        self.y + self.side()
    }

    /// Center point in grid units.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        let half = self.size as f64 / 2.0;
        (self.x as f64 + half, self.y as f64 + half)
    }
}

/// Tightest axis-aligned box around every square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Bounds {
    #[must_use]
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    /// Whether the box has zero area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Positioned squares in sequence order plus their bounding box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layout {
    squares: Vec<PlacedSquare>,
    bounds: Bounds,
}

impl Layout {
    #[must_use]
    pub fn squares(&self) -> &[PlacedSquare] {
        &self.squares
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

/// Lay out a sequence as a spiral of squares.
///
/// An empty sequence produces an empty layout with all-zero bounds.
#[must_use]
pub fn layout(sequence: &Sequence) -> Layout {
    let mut squares: Vec<PlacedSquare> = Vec::with_capacity(sequence.len());

    for (index, &size) in sequence.iter().enumerate() {
        let square = match index {
            0 => PlacedSquare {
                x: 0,
                y: 0,
                size: 1,
                index,
            },
            1 => PlacedSquare {
                x: 1,
                y: 0,
                size: 1,
                index,
            },
            _ => place_next(&squares[index - 1], size, index),
        };
        squares.push(square);
    }

    let bounds = bounds_of(&squares);
    tracing::debug!(
        squares = squares.len(),
        width = bounds.width(),
        height = bounds.height(),
        "spiral layout computed"
    );
    Layout { squares, bounds }
}

/// Attach a square of `size` to `prev` following the direction for `index`.
fn place_next(prev: &PlacedSquare, size: u64, index: usize) -> PlacedSquare {
    let side = grid_len(size);
    let (x, y) = match Direction::for_index(index) {
        Direction::Right => (prev.right(), prev.y - side + prev.side()),
        Direction::Up => (prev.right() - side, prev.y - side),
        Direction::Left => (prev.x - side, prev.y),
        Direction::Down => (prev.x, prev.bottom()),
    };
    PlacedSquare { x, y, size, index }
}

fn bounds_of(squares: &[PlacedSquare]) -> Bounds {
    let Some(first) = squares.first() else {
        return Bounds::default();
    };
    squares.iter().skip(1).fold(
        Bounds {
            min_x: first.x,
            max_x: first.right(),
            min_y: first.y,
            max_y: first.bottom(),
        },
        |b, s| Bounds {
            min_x: b.min_x.min(s.x),
            max_x: b.max_x.max(s.right()),
            min_y: b.min_y.min(s.y),
            max_y: b.max_y.max(s.bottom()),
        },
    )
}

/// Terms are capped well below `i64::MAX`, so this only saturates on
/// hand-built inputs.
fn grid_len(size: u64) -> i64 {
    i64::try_from(size).unwrap_or(i64::MAX)
}
