// file: src/pipeline/classifier.rs
// description: partitions fingerprint groups into multiples and singles

use crate::models::{DuplicateReport, FingerprintGroup};
use std::collections::HashMap;
use tracing::debug;

pub struct DuplicateClassifier;

impl DuplicateClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Selects every group that passed the duplicate gate (two or more
    /// records under two or more path keys) and routes its records by record
    /// count: more than two rows go to multiples, exactly two to singles.
    /// Routing is record-count-driven once the gate passes; a three-record
    /// group with only two distinct keys is still a multiple.
    ///
    /// Rows follow group-map iteration order across digests and scan order
    /// within a digest.
    pub fn classify(&self, groups: HashMap<String, FingerprintGroup>) -> DuplicateReport {
        let mut report = DuplicateReport::default();

        for (digest, group) in groups {
            if !group.is_duplicate() {
                continue;
            }

            debug!(
                "Duplicate digest {} with {} records across {} path keys",
                digest,
                group.records.len(),
                group.path_keys.len()
            );

            if group.records.len() > 2 {
                report.multiples.extend(group.records);
            } else {
                report.singles.extend(group.records);
            }
        }

        report
    }
}

impl Default for DuplicateClassifier {
    fn default() -> Self {
        Self::new()
    }
}
