//! File-backed collection store
//!
//! Document envelope:
//!
//! ```json
//! {
//!   "version": 1,
//!   "saved_at": "2026-08-30T12:00:00Z",
//!   "checksum": "<sha256 hex of the items JSON>",
//!   "items": [ ... ]
//! }
//! ```
//!
//! Save path: serialize items, hash, write the envelope to `<file>.tmp`,
//! `sync_all`, then rename over `<file>`. Load verifies the checksum and
//! reports [`StoreError::Corrupted`] on mismatch rather than silently
//! treating a damaged document as empty.

use std::fs::{self, File};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use sha2::{Digest, Sha256};

use super::{CollectionStore, StoreError};

const DOCUMENT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Document {
    version: u32,
    saved_at: DateTime<Utc>,
    checksum: String,
    items: Box<RawValue>,
}

/// JSON file store for one entity collection.
pub struct JsonStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut p = self.path.clone().into_os_string();
        p.push(".tmp");
        PathBuf::from(p)
    }
}

impl<T> CollectionStore<T> for JsonStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    fn load(&self) -> Result<Vec<T>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            // Never-saved collection is empty, not an error
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let doc: Document = serde_json::from_str(&raw)?;
        if doc.version != DOCUMENT_VERSION {
            return Err(StoreError::Corrupted {
                path: self.path.display().to_string(),
                reason: format!("unsupported document version {}", doc.version),
            });
        }

        let actual = hex::encode(Sha256::digest(doc.items.get().as_bytes()));
        if actual != doc.checksum {
            return Err(StoreError::Corrupted {
                path: self.path.display().to_string(),
                reason: format!("checksum mismatch (expected {}, got {actual})", doc.checksum),
            });
        }

        Ok(serde_json::from_str(doc.items.get())?)
    }

    fn save(&self, items: &[T]) -> Result<(), StoreError> {
        let items_json = serde_json::to_string(items)?;
        let doc = Document {
            version: DOCUMENT_VERSION,
            saved_at: Utc::now(),
            checksum: hex::encode(Sha256::digest(items_json.as_bytes())),
            items: RawValue::from_string(items_json)?,
        };
        let body = serde_json::to_string(&doc)?;

        // Crash safety: the previous document stays intact until rename
        let tmp = self.tmp_path();
        let mut file = File::create(&tmp)?;
        file.write_all(body.as_bytes())?;
        file.sync_all()?;
        drop(file);

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}
