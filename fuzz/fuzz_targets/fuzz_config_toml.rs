#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and catalog validation must reject, never panic
        if let Ok(config) = toml::from_str::<legajo::Config>(content) {
            let _ = config.requirement_catalog();
        }
    }
});
