//! In-memory collection store
//!
//! Test double for [`CollectionStore`]: keeps the "persisted" collection in
//! memory and can be told to fail its next saves, which is how the
//! failed-write atomicity guarantees are exercised without real disk
//! faults.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use super::{CollectionStore, StoreError};

#[derive(Default)]
pub struct MemoryStore<T> {
    items: Mutex<Vec<T>>,
    fail_saves: AtomicBool,
}

impl<T: Clone> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            fail_saves: AtomicBool::new(false),
        }
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `save` fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the currently "persisted" collection.
    pub fn persisted(&self) -> Vec<T> {
        self.items.lock().clone()
    }
}

impl<T: Clone + Send + Sync> CollectionStore<T> for MemoryStore<T> {
    fn load(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.items.lock().clone())
    }

    fn save(&self, items: &[T]) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other(
                "injected save failure",
            )));
        }
        *self.items.lock() = items.to_vec();
        Ok(())
    }
}
