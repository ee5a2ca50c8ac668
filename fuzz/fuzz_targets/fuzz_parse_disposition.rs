#![no_main]

use http_disposition::parse_disposition;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string
    if let Ok(s) = std::str::from_utf8(data) {
        // Try to parse the header value
        let _ = parse_disposition(s);
    }
});
