use std::fmt;
use std::path::{Path, PathBuf};

use crate::outcome::Outcome;
use crate::root::documents_root;

/// A named subdirectory of the documents root.
///
/// Names are joined as-is: callers must not pass `..` or absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    name: String,
    root: Option<PathBuf>,
}

/// Namespace bound to the platform documents root.
pub fn get_namespace(name: impl Into<String>) -> Namespace {
    Namespace::new(name)
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: None,
        }
    }

    /// Namespace under an explicit root instead of the documents directory.
    pub fn with_root(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: Some(root.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Absolute directory for this namespace. Does not touch the filesystem.
    pub fn resolve(&self) -> Outcome<PathBuf> {
        let root = documents_root(self.root.as_deref())?;
        Ok(root.join(&self.name))
    }

    /// Path of `fname` inside this namespace.
    pub fn file(&self, fname: &str) -> Outcome<PathBuf> {
        Ok(self.resolve()?.join(fname))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
