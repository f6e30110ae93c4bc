//! # FormCraft Storage
//!
//! Async persistence boundary for exported documents. The editing core is
//! synchronous; only this crate touches the filesystem, so hosts can swap
//! stores (in-memory for tests, files for the desktop app) without the
//! session layer noticing.

mod error;
mod file;
mod memory;

use formcraft_document::FormDocument;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Keyed persistence for exported documents.
///
/// Keys are caller-chosen document identifiers. `save` overwrites, `load`
/// yields `None` for unknown keys, and `delete` is idempotent.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    async fn save(&self, key: &str, document: &FormDocument) -> Result<(), StorageError>;
    async fn load(&self, key: &str) -> Result<Option<FormDocument>, StorageError>;
    async fn list(&self) -> Result<Vec<String>, StorageError>;
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}
