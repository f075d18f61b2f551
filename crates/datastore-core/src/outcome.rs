use serde::Serialize;

use crate::errors::{DatastoreError, ErrorKind};

/// Result of every public datastore operation.
pub type Outcome<T> = Result<T, DatastoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Error,
}

/// Wire form of an [`Outcome`]: `{"status":"OK","value":..}` or
/// `{"status":"ERROR","kind":..,"error":..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "UPPERCASE")]
pub enum Envelope<T> {
    Ok { value: T },
    Error { kind: ErrorKind, error: String },
}

impl<T> Envelope<T> {
    pub fn status(&self) -> Status {
        match self {
            Envelope::Ok { .. } => Status::Ok,
            Envelope::Error { .. } => Status::Error,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Envelope::Ok { value } => Some(value),
            Envelope::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Envelope::Ok { .. } => None,
            Envelope::Error { error, .. } => Some(error),
        }
    }
}

impl<T> From<Outcome<T>> for Envelope<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Ok(value) => Envelope::Ok { value },
            Err(e) => Envelope::Error {
                kind: e.kind(),
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_serializes_status_and_value() {
        let env: Envelope<u32> = Envelope::from(Ok(7));
        assert_eq!(env.status(), Status::Ok);
        assert_eq!(env.error(), None);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json, serde_json::json!({"status": "OK", "value": 7}));
    }

    #[test]
    fn error_envelope_carries_kind_and_message() {
        let outcome: Outcome<u32> = Err(DatastoreError::NotFound {
            path: "/docs/profile/user.json".into(),
        });
        let env = Envelope::from(outcome);
        assert_eq!(env.status(), Status::Error);
        assert!(env.value().is_none());

        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["status"], "ERROR");
        assert_eq!(json["kind"], "not_found");
        assert!(json["error"].as_str().unwrap().contains("user.json"));
        assert!(json.get("value").is_none());
    }
}
