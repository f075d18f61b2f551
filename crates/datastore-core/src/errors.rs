use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem operation that produced an [`DatastoreError::Io`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    Read,
    Write,
    Delete,
    List,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoOp::Read => write!(f, "read"),
            IoOp::Write => write!(f, "write"),
            IoOp::Delete => write!(f, "delete"),
            IoOp::List => write!(f, "list"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatastoreError {
    #[error("no documents directory available (set DATASTORE_ROOT or pass an explicit root)")]
    NoDocumentsRoot,

    #[error("cannot create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("cannot {op} {path}: {source}")]
    Io {
        op: IoOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {target}: {source}")]
    Encoding {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode {target}: {source}")]
    Decoding {
        target: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`DatastoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Encoding,
    Decoding,
    NotFound,
    PermissionDenied,
    Io,
    DirectoryCreation,
    NoDocumentsRoot,
}

impl DatastoreError {
    /// Map an io error for `path`. A missing file on read or delete becomes
    /// [`DatastoreError::NotFound`]; a missing parent on write stays `Io`.
    pub fn io(op: IoOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        let missing = source.kind() == io::ErrorKind::NotFound;
        if missing && matches!(op, IoOp::Read | IoOp::Delete) {
            return Self::NotFound { path };
        }
        Self::Io { op, path, source }
    }

    pub fn directory_creation(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    pub fn encoding(target: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Encoding {
            target: target.into(),
            source,
        }
    }

    pub fn decoding(target: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decoding {
            target: target.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DatastoreError::NoDocumentsRoot => ErrorKind::NoDocumentsRoot,
            DatastoreError::DirectoryCreation { .. } => ErrorKind::DirectoryCreation,
            DatastoreError::NotFound { .. } => ErrorKind::NotFound,
            DatastoreError::Io { source, .. } => {
                if source.kind() == io::ErrorKind::PermissionDenied {
                    ErrorKind::PermissionDenied
                } else {
                    ErrorKind::Io
                }
            }
            DatastoreError::Encoding { .. } => ErrorKind::Encoding,
            DatastoreError::Decoding { .. } => ErrorKind::Decoding,
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DatastoreError::DirectoryCreation { path, .. }
            | DatastoreError::NotFound { path }
            | DatastoreError::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}
