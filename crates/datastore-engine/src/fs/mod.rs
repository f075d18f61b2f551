//! Filesystem primitives used by the store.

pub mod atomic;
pub mod dir;

pub use atomic::atomic_write;
pub use dir::ensure_directory;
