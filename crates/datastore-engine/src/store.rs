//! Record store: one JSON document per file under a namespace directory.
//!
//! Writes encode first, then create the namespace directory, then replace the
//! file atomically. Reads never create directories. There is no locking:
//! concurrent writers to the same file race and the last rename wins.

use serde::de::DeserializeOwned;
use serde::Serialize;

use datastore_core::codec;
use datastore_core::{DatastoreError, IoOp, Namespace, Outcome};

use crate::fs::{atomic_write, ensure_directory};

/// Save `value` as `<namespace>/<fname>` and hand it back on success.
pub fn save<T: Serialize>(ns: &Namespace, fname: &str, value: T) -> Outcome<T> {
    save_ref(ns, fname, &value)?;
    Ok(value)
}

/// Borrowing form of [`save`].
pub fn save_ref<T: Serialize + ?Sized>(ns: &Namespace, fname: &str, value: &T) -> Outcome<()> {
    let path = ns.file(fname)?;
    let bytes = codec::encode_for(fname, value)?;

    let dir = ns.resolve()?;
    ensure_directory(&dir)?;
    atomic_write(&path, &bytes)?;

    tracing::debug!(namespace = %ns, file = fname, bytes = bytes.len(), "saved record");
    Ok(())
}

/// Load `<namespace>/<fname>` and decode it as `T`.
pub fn load<T: DeserializeOwned>(ns: &Namespace, fname: &str) -> Outcome<T> {
    let bytes = load_raw(ns, fname)?;
    let value = codec::decode_for(fname, &bytes)?;
    tracing::debug!(namespace = %ns, file = fname, "loaded record");
    Ok(value)
}

/// Raw bytes of a stored record, without decoding.
pub fn load_raw(ns: &Namespace, fname: &str) -> Outcome<Vec<u8>> {
    let path = ns.file(fname)?;
    std::fs::read(&path).map_err(|e| DatastoreError::io(IoOp::Read, &path, e))
}

/// Remove a stored record. A missing file is [`DatastoreError::NotFound`];
/// so is a directory, which is never a record.
pub fn delete(ns: &Namespace, fname: &str) -> Outcome<()> {
    let path = ns.file(fname)?;
    if path.is_dir() {
        return Err(DatastoreError::NotFound { path });
    }
    std::fs::remove_file(&path).map_err(|e| DatastoreError::io(IoOp::Delete, &path, e))?;
    tracing::debug!(namespace = %ns, file = fname, "deleted record");
    Ok(())
}

pub fn exists(ns: &Namespace, fname: &str) -> Outcome<bool> {
    Ok(ns.file(fname)?.is_file())
}

/// Sorted names of the records in a namespace.
///
/// A namespace that was never written to is empty. Hidden files (including
/// in-flight temp files) are skipped.
pub fn list(ns: &Namespace) -> Outcome<Vec<String>> {
    let dir = ns.resolve()?;
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(DatastoreError::io(IoOp::List, &dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DatastoreError::io(IoOp::List, &dir, e))?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_file && !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
