// file: src/models/duplicate.rs
// description: fingerprint grouping and duplicate report models

use crate::models::HashedRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// All records observed for one content digest, in scan order, together with
/// the set of path-derived secondary keys seen for that digest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FingerprintGroup {
    pub records: Vec<HashedRecord>,
    pub path_keys: HashSet<String>,
}

impl FingerprintGroup {
    pub fn push(&mut self, record: HashedRecord, path_key: String) {
        self.records.push(record);
        self.path_keys.insert(path_key);
    }

    /// A group is a true duplicate only when the same content was reached
    /// through at least two structurally different path identifiers. Repeated
    /// scans of the same path share one key and never qualify.
    pub fn is_duplicate(&self) -> bool {
        self.records.len() >= 2 && self.path_keys.len() >= 2
    }
}

/// Classified duplicate rows, partitioned by group size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuplicateReport {
    pub multiples: Vec<HashedRecord>,
    pub singles: Vec<HashedRecord>,
}

impl DuplicateReport {
    pub fn is_empty(&self) -> bool {
        self.multiples.is_empty() && self.singles.is_empty()
    }
}
