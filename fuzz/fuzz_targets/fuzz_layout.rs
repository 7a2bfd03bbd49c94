#![no_main]

use libfuzzer_sys::fuzz_target;

use fibspiral_core::layout::layout;
use fibspiral_core::sequence::generate;
use fibspiral_render::display_list::{DisplayList, DrawOp};
use fibspiral_render::renderer::render;

fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }
    // Any i64 term count; the generator clamps it
    let n = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let width = f64::from(u16::from_le_bytes([data[8], data[9]]).max(1));
    let height = f64::from(u16::from_le_bytes([data[10], data[11]]).max(1));

    let seq = generate(n);
    let result = layout(&seq);
    assert_eq!(result.len(), seq.len());

    let b = result.bounds();
    for s in result.squares() {
        assert!(s.x >= b.min_x && s.right() <= b.max_x);
        assert!(s.y >= b.min_y && s.bottom() <= b.max_y);
    }

    let mut list = DisplayList::new(width, height);
    render(&mut list, &result, seq.len());
    for op in list.ops() {
        if let DrawOp::FillRect { rect, .. } = op {
            assert!(rect.width > 0.0 && rect.height > 0.0);
            assert!(rect.x >= 0.0 && rect.x + rect.width <= width + 1e-6);
            assert!(rect.y >= 0.0 && rect.y + rect.height <= height + 1e-6);
        }
    }
});
