#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(stem) = std::str::from_utf8(data) {
        if let Some(period) = legajo::extract_period(stem) {
            assert!((1..=12).contains(&period.month()));
        }
    }
});
