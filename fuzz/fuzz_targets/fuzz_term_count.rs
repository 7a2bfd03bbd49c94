#![no_main]

use libfuzzer_sys::fuzz_target;

use fibspiral_core::term_count::TermCount;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    // Accepted counts always stay in range
    if let Ok(count) = TermCount::parse(input) {
        assert!((1..=25).contains(&count.get()));
    }
});
