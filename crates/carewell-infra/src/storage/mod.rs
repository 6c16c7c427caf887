//! Uploaded image storage.

mod local;

pub use local::{LocalImageStore, StorageConfig};
