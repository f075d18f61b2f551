#![no_main]
use datastore_core::codec::iso8601;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(dt) = iso8601::parse(s) {
            let text = iso8601::format(&dt);
            assert_eq!(iso8601::parse(&text).ok(), Some(dt));
        }
    }
});
