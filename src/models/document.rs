// file: src/models/document.rs
// description: document record models for the scan pipeline
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// One stored document entry as read from the record source. Immutable once
/// read; the file path may be empty or point to a file that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub company: String,
    pub title: String,
    pub url: String,
    pub file_path: String,
}

impl DocumentRecord {
    pub fn new(
        id: impl Into<String>,
        company: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            company: company.into(),
            title: title.into(),
            url: url.into(),
            file_path: file_path.into(),
        }
    }

    pub fn has_path(&self) -> bool {
        !self.file_path.is_empty()
    }
}

/// A record paired with the digest of its extracted file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedRecord {
    pub record: DocumentRecord,
    pub digest: String,
}

impl HashedRecord {
    pub fn new(record: DocumentRecord, digest: String) -> Self {
        Self { record, digest }
    }
}
