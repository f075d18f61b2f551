#![forbid(unsafe_code)]

pub mod fs;
pub mod store;

pub use datastore_core::codec::{decode_from_bytes, encode_to_string};
pub use datastore_core::{get_namespace, DatastoreError, Envelope, ErrorKind, Namespace, Outcome};
pub use store::{delete, exists, list, load, load_raw, save, save_ref};
