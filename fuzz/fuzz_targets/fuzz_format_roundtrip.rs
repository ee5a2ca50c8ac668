#![no_main]

use http_disposition::{attachment, parse_disposition};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Any Unicode filename must encode, and the extended value must
        // decode back to the exact input
        let value = attachment(Some(name)).expect("formatting a filename cannot fail");
        let parsed = parse_disposition(&value).expect("formatter output must parse");
        assert_eq!(parsed.filename(), Some(name));
    }
});
