#![forbid(unsafe_code)]

pub mod codec;
pub mod errors;
pub mod namespace;
pub mod outcome;
pub mod root;

pub use errors::{DatastoreError, ErrorKind, IoOp};
pub use namespace::{get_namespace, Namespace};
pub use outcome::{Envelope, Outcome, Status};
