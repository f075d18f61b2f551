//! Documents-root resolution.
//!
//! The root is owned by the host: it is looked up, never created.
//! Order: explicit root, `DATASTORE_ROOT`, the platform documents directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::errors::DatastoreError;
use crate::outcome::Outcome;

/// Environment variable overriding the platform documents directory.
pub const ROOT_ENV: &str = "DATASTORE_ROOT";

/// Resolve the documents root for this process.
pub fn documents_root(explicit: Option<&Path>) -> Outcome<PathBuf> {
    pick_root(explicit, std::env::var_os(ROOT_ENV), dirs::document_dir)
}

fn pick_root(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    platform: impl FnOnce() -> Option<PathBuf>,
) -> Outcome<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }
    platform().ok_or(DatastoreError::NoDocumentsRoot)
}
