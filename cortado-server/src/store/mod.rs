//! Ledger Store - durable full-collection persistence
//!
//! Each entity collection (menu, inventory, orders) is persisted as one
//! JSON document, rewritten whole on every mutating operation. The write
//! protocol is crash-safe: tmp file + fsync + atomic rename, so a failed
//! or interrupted save leaves the previous document fully intact.
//!
//! - [`CollectionStore`] - the storage capability trait
//! - [`JsonStore`] - file-backed implementation
//! - [`MemoryStore`] - in-memory fake for tests (with fault injection)

mod json_store;
mod memory;

pub use json_store::JsonStore;
pub use memory::MemoryStore;

/// Storage-layer errors (the IOFailure leaf of the error taxonomy).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persisted document failed integrity checks on load.
    #[error("Corrupted store document at {path}: {reason}")]
    Corrupted { path: String, reason: String },
}

/// Storage capability for one entity collection.
///
/// `save` must be all-or-nothing: either the full new collection becomes
/// the persisted version, or the prior version survives untouched and the
/// error is reported to the caller.
pub trait CollectionStore<T>: Send + Sync {
    /// Load the full persisted collection. A store that has never been
    /// saved yields an empty collection.
    fn load(&self) -> Result<Vec<T>, StoreError>;

    /// Durably replace the persisted collection with `items`.
    fn save(&self, items: &[T]) -> Result<(), StoreError>;
}
