#![no_main]
use datastore_core::codec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = codec::decode_from_bytes::<serde_json::Value>(data) {
        let encoded = codec::encode_to_vec(&value).expect("a decoded value re-encodes");
        let again: serde_json::Value =
            codec::decode_from_bytes(&encoded).expect("re-encoded JSON decodes");
        assert_eq!(value, again);
    }
});
