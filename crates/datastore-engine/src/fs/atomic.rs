use std::io::{self, Write};
use std::path::Path;

use datastore_core::{DatastoreError, IoOp, Outcome};
use tempfile::NamedTempFile;

/// Write content atomically: write to temp file, fsync, rename.
///
/// The temp file is a hidden sibling with a fixed-length random name, so any
/// file name the directory accepts can be written. Readers see either the
/// previous file or the complete new one. On failure the temp file is
/// dropped (and removed) and the target is left as it was.
pub fn atomic_write(path: &Path, content: &[u8]) -> Outcome<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let fail = |e: io::Error| DatastoreError::io(IoOp::Write, path, e);

    let mut file = NamedTempFile::new_in(dir).map_err(fail)?;
    file.write_all(content).map_err(fail)?;
    file.as_file().sync_all().map_err(fail)?;
    file.persist(path).map_err(|e| fail(e.error))?;
    Ok(())
}
