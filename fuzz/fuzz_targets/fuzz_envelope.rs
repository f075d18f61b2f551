#![no_main]
use datastore_core::{codec, Envelope, Status};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let outcome = codec::decode_from_bytes::<serde_json::Value>(data);
    let ok = outcome.is_ok();
    let envelope = Envelope::from(outcome);

    assert_eq!(envelope.status() == Status::Ok, ok);
    assert_eq!(envelope.value().is_some(), ok);
    assert_eq!(envelope.error().is_some(), !ok);

    let wire = serde_json::to_value(&envelope).expect("an envelope always encodes");
    assert_eq!(wire["status"], if ok { "OK" } else { "ERROR" });
    assert_eq!(wire.get("value").is_some(), ok);
    assert_eq!(wire.get("error").is_some(), !ok);
});
