//! Container storage layer.
//!
//! A container is a single SQLite file holding namespaces and their objects.
//! Object writes append revision cycles instead of overwriting, so every
//! earlier version of a name stays addressable.

// SQL strings don't need hash-less raw strings
#![allow(clippy::needless_raw_string_hashes)]

pub mod container;
pub mod error;

pub use container::{Container, Entry, NamespaceId, NamespaceRow, OpenMode};
pub use error::{StorageError, StorageResult};
