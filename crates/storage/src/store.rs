use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use algebruh_core::Fingerprint;
use algebruh_core::model::AnswerRecord;

const BY_ID_TABLE: &str = "by_id.json";
const BY_HASH_TABLE: &str = "by_hash.json";

/// Errors surfaced while loading the answer tables.
///
/// Any of these is fatal at startup: there is no partial-store mode.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("cannot read answer table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("answer table {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only lookup of curated answers, keyed by numeric id and by content
/// fingerprint.
///
/// Both tables are loaded eagerly at startup and never written back. A
/// missing key is a normal outcome and answers with `None`.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    by_id: HashMap<String, AnswerRecord>,
    by_fingerprint: HashMap<String, AnswerRecord>,
}

impl AnswerStore {
    /// Load both tables from a directory containing `by_id.json` and
    /// `by_hash.json`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if either file is missing or malformed.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        Ok(Self {
            by_id: load_table(dir.join(BY_ID_TABLE))?,
            by_fingerprint: load_table(dir.join(BY_HASH_TABLE))?,
        })
    }

    /// Build a store directly from in-memory tables. Intended for tests
    /// and seeding.
    #[must_use]
    pub fn from_tables(
        by_id: HashMap<String, AnswerRecord>,
        by_fingerprint: HashMap<String, AnswerRecord>,
    ) -> Self {
        Self {
            by_id,
            by_fingerprint,
        }
    }

    #[must_use]
    pub fn lookup_by_id(&self, id: &str) -> Option<&AnswerRecord> {
        self.by_id.get(id)
    }

    #[must_use]
    pub fn lookup_by_fingerprint(&self, fingerprint: &Fingerprint) -> Option<&AnswerRecord> {
        self.by_fingerprint.get(fingerprint.as_str())
    }

    /// Number of records reachable by fingerprint.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_fingerprint.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_fingerprint.is_empty()
    }
}

fn load_table(path: PathBuf) -> Result<HashMap<String, AnswerRecord>, StoreError> {
    let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Malformed { path, source })
}
