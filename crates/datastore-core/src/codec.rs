//! In-memory JSON transcoding.
//!
//! The compact encoding produced here is exactly what the store writes to
//! disk. Dates are ISO-8601 strings; see [`iso8601`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::DatastoreError;
use crate::outcome::Outcome;

const VALUE: &str = "value";
const INPUT: &str = "JSON input";

/// Encode to compact JSON bytes.
pub fn encode_to_vec<T: Serialize + ?Sized>(value: &T) -> Outcome<Vec<u8>> {
    encode_for(VALUE, value)
}

/// Like [`encode_to_vec`], naming `target` (usually a file) in errors.
pub fn encode_for<T: Serialize + ?Sized>(target: &str, value: &T) -> Outcome<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| DatastoreError::encoding(target, e))
}

/// Like [`decode_from_bytes`], naming `target` in errors.
pub fn decode_for<T: DeserializeOwned>(target: &str, bytes: &[u8]) -> Outcome<T> {
    serde_json::from_slice(bytes).map_err(|e| DatastoreError::decoding(target, e))
}

/// Encode to a compact JSON string.
pub fn encode_to_string<T: Serialize + ?Sized>(value: &T) -> Outcome<String> {
    serde_json::to_string(value).map_err(|e| DatastoreError::encoding(VALUE, e))
}

/// Encode to an indented JSON string.
pub fn encode_to_string_pretty<T: Serialize + ?Sized>(value: &T) -> Outcome<String> {
    serde_json::to_string_pretty(value).map_err(|e| DatastoreError::encoding(VALUE, e))
}

/// Decode JSON bytes into `T`.
pub fn decode_from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Outcome<T> {
    decode_for(INPUT, bytes)
}

pub fn decode_from_str<T: DeserializeOwned>(s: &str) -> Outcome<T> {
    decode_from_bytes(s.as_bytes())
}

/// Second-precision ISO-8601 dates for `#[serde(with = "...")]`.
///
/// Writes `YYYY-MM-DDTHH:MM:SSZ`. Reads any RFC 3339 timestamp, converts it
/// to UTC and drops the sub-second part, so encode and decode agree.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn format(dt: &DateTime<Utc>) -> String {
        dt.trunc_subsecs(0).to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc).trunc_subsecs(0))
    }

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw)
            .map_err(|e| de::Error::custom(format_args!("invalid ISO-8601 date {raw:?}: {e}")))
    }

    /// Same format for `Option<DateTime<Utc>>`; `null` maps to `None`.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            dt: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match dt {
                Some(dt) => s.serialize_some(&super::format(dt)),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(d)? {
                Some(raw) => super::parse(&raw).map(Some).map_err(|e| {
                    de::Error::custom(format_args!("invalid ISO-8601 date {raw:?}: {e}"))
                }),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::errors::ErrorKind;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Member {
        name: String,
        #[serde(with = "iso8601")]
        joined: DateTime<Utc>,
        #[serde(default, with = "iso8601::option")]
        left: Option<DateTime<Utc>>,
    }

    fn ana() -> Member {
        Member {
            name: "Ana".into(),
            joined: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            left: None,
        }
    }

    #[test]
    fn encodes_dates_as_iso8601() {
        let json = encode_to_string(&ana()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ana","joined":"2024-01-01T00:00:00Z","left":null}"#
        );
    }

    #[test]
    fn string_and_bytes_agree() {
        let s = encode_to_string(&ana()).unwrap();
        let v = encode_to_vec(&ana()).unwrap();
        assert_eq!(s.as_bytes(), v.as_slice());
    }

    #[test]
    fn round_trip_truncates_to_seconds() {
        let precise = Utc.timestamp_opt(1_704_067_200, 987_654_321).unwrap();
        let m = Member {
            name: "Ana".into(),
            joined: precise,
            left: Some(precise),
        };
        let json = encode_to_string(&m).unwrap();
        let back: Member = decode_from_str(&json).unwrap();
        let expected = Utc.timestamp_opt(1_704_067_200, 0).unwrap();
        assert_eq!(back.joined, expected);
        assert_eq!(back.left, Some(expected));
    }

    #[test]
    fn decode_normalizes_offsets_to_utc() {
        let back: Member =
            decode_from_str(r#"{"name":"Ana","joined":"2024-01-01T02:00:00+02:00"}"#).unwrap();
        assert_eq!(back, ana());
    }

    #[test]
    fn malformed_json_is_decoding_error() {
        let err = decode_from_bytes::<Member>(b"not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
        assert!(err.to_string().contains("failed to decode"));
    }

    #[test]
    fn shape_mismatch_is_decoding_error() {
        let err = decode_from_str::<Member>(r#"{"name":1}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[test]
    fn bad_date_is_decoding_error() {
        let err =
            decode_from_str::<Member>(r#"{"name":"Ana","joined":"yesterday"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid ISO-8601 date"));
    }

    #[test]
    fn non_string_map_keys_fail_to_encode() {
        let mut m = HashMap::new();
        m.insert((1u8, 2u8), "pair");
        let err = encode_to_string(&m).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
    }

    #[test]
    fn pretty_output_is_indented() {
        let json = encode_to_string_pretty(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(json, "{\n  \"a\": 1\n}");
    }
}
