use std::path::Path;

use datastore_core::{DatastoreError, Outcome};

/// Create `path` and any missing parents. An existing directory is fine.
pub fn ensure_directory(path: &Path) -> Outcome<()> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|e| DatastoreError::directory_creation(path, e))?;
    tracing::debug!(dir = %path.display(), "created namespace directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use datastore_core::ErrorKind;

    #[test]
    fn creates_nested_directories() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("a").join("b").join("c");
        ensure_directory(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn second_call_is_a_no_op() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("profile");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep.json"), "{}").unwrap();

        ensure_directory(&path).unwrap();
        ensure_directory(&path).unwrap();

        assert_eq!(std::fs::read_dir(&path).unwrap().count(), 1);
        assert_eq!(
            std::fs::read_to_string(path.join("keep.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn regular_file_in_the_way_fails() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("profile");
        std::fs::write(&path, "not a dir").unwrap();

        let err = ensure_directory(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DirectoryCreation);
        assert!(err.to_string().contains("profile"));
    }
}
