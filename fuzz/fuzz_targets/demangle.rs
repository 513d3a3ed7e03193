#![no_main]

use libfuzzer_sys::fuzz_target;
use symscope::demangle;

fuzz_target!(|data: &[u8]| {
    if let Ok(symbol) = std::str::from_utf8(data) {
        let _ = demangle(symbol);
    }
});
