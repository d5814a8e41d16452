// file: src/pipeline/scanner.rs
// description: sequential fingerprint scan over stored document records
// reference: groups records by content digest with a path-key tie-break

use crate::config::ScanConfig;
use crate::error::Result;
use crate::fingerprint::{content_digest, path_key, HtmlTextExtractor};
use crate::models::{DocumentRecord, FingerprintGroup, HashedRecord};
use crate::pipeline::progress::{ProgressTracker, ScanStats};
use crate::resume::{NotFoundLog, ResumeJournal};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Everything one scan produced: the digest-keyed groups plus run statistics.
/// Grouping state never outlives the run; only the journals persist.
pub struct ScanOutcome {
    pub groups: HashMap<String, FingerprintGroup>,
    pub stats: ScanStats,
}

impl ScanOutcome {
    pub fn distinct_digests(&self) -> usize {
        self.groups.len()
    }

    pub fn duplicate_digests(&self) -> usize {
        self.groups.values().filter(|g| g.is_duplicate()).count()
    }
}

pub struct DocumentScanner {
    resume: ResumeJournal,
    not_found: NotFoundLog,
    extractor: HtmlTextExtractor,
    ignore_resume: bool,
}

impl DocumentScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            resume: ResumeJournal::new(config.resume_path.clone()),
            not_found: NotFoundLog::new(config.not_found_path.clone()),
            extractor: HtmlTextExtractor::new(),
            ignore_resume: false,
        }
    }

    /// Processes every record even when its path is already journaled. The
    /// journal is still appended to, so later runs stay idempotent.
    pub fn ignore_resume(mut self) -> Self {
        self.ignore_resume = true;
        self
    }

    /// One strictly sequential pass over the records, in source order.
    ///
    /// Per record: a path already journaled on a previous run is skipped
    /// silently (the not-found log included, so a file deleted since that run
    /// is not re-flagged); an empty, missing, or unreadable path sends the
    /// record id to the not-found log and nothing else happens to it;
    /// otherwise the file is read, its path journaled, and its extracted text
    /// digested into the group map.
    ///
    /// The resume snapshot is taken once at startup. A path encountered twice
    /// within the same run is hashed twice on purpose: both rows land in the
    /// same group under one path key, which keeps the group below the
    /// duplicate gate.
    pub fn scan(
        &self,
        records: &[DocumentRecord],
        progress: &ProgressTracker,
    ) -> Result<ScanOutcome> {
        let already_processed = if self.ignore_resume {
            Default::default()
        } else {
            self.resume.load()?
        };

        let mut groups: HashMap<String, FingerprintGroup> = HashMap::new();

        for record in records {
            if already_processed.contains(&record.file_path) {
                debug!("Skipping already-processed path: {}", record.file_path);
                progress.inc_records_skipped();
                continue;
            }

            if !record.has_path() || !Path::new(&record.file_path).exists() {
                warn!("File not found for record {}: {:?}", record.id, record.file_path);
                self.not_found.append(&record.id)?;
                progress.inc_records_missing();
                continue;
            }

            let contents = match fs::read_to_string(&record.file_path) {
                Ok(contents) => contents,
                Err(e) => {
                    warn!("Unreadable file for record {} ({}): {}", record.id, record.file_path, e);
                    self.not_found.append(&record.id)?;
                    progress.inc_records_missing();
                    continue;
                }
            };

            // Journal the path as soon as the read succeeds. A crash after
            // this line loses the in-flight group entry but never causes a
            // re-hash on the next run.
            self.resume.append(&record.file_path)?;

            let text = self.extractor.extract(&contents);
            let digest = content_digest(&text);
            let key = path_key(&record.file_path);

            progress.set_message(format!("Hashing {}", record.file_path));
            progress.add_bytes_processed(contents.len() as u64);
            progress.inc_records_hashed();

            groups
                .entry(digest.clone())
                .or_default()
                .push(HashedRecord::new(record.clone(), digest), key);
        }

        Ok(ScanOutcome {
            groups,
            stats: progress.get_stats(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> ScanConfig {
        ScanConfig {
            resume_path: dir.path().join("saved.txt"),
            not_found_path: dir.path().join("not_found.txt"),
            report_path: dir.path().join("report.xlsx"),
        }
    }

    fn write_doc(dir: &TempDir, name: &str, body: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, format!("<html><body>{}</body></html>", body)).unwrap();
        path.display().to_string()
    }

    fn record(id: &str, path: &str) -> DocumentRecord {
        DocumentRecord::new(id, "Acme", "Report", "http://x", path)
    }

    #[test]
    fn test_identical_content_groups_under_one_digest() {
        let dir = TempDir::new().unwrap();
        let a = write_doc(&dir, "doc1.html", "hello");
        let b = write_doc(&dir, "doc2.html", "hello");

        let scanner = DocumentScanner::new(&test_config(&dir));
        let progress = ProgressTracker::with_color(2, false);
        let outcome = scanner.scan(&[record("a", &a), record("b", &b)], &progress).unwrap();

        assert_eq!(outcome.distinct_digests(), 1);
        let group = outcome.groups.values().next().unwrap();
        assert_eq!(group.records.len(), 2);
        assert_eq!(group.path_keys.len(), 2);
        assert!(group.is_duplicate());
    }

    #[test]
    fn test_missing_file_is_logged_and_excluded() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let ghost = dir.path().join("gone.html").display().to_string();

        let scanner = DocumentScanner::new(&config);
        let progress = ProgressTracker::with_color(1, false);
        let outcome = scanner.scan(&[record("lost", &ghost)], &progress).unwrap();

        assert!(outcome.groups.is_empty());
        assert_eq!(outcome.stats.records_missing, 1);
        assert_eq!(NotFoundLog::new(&config.not_found_path).count().unwrap(), 1);
        // No resume entry is written for a record that was never read.
        assert!(ResumeJournal::new(&config.resume_path).load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_path_is_logged_and_excluded() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        let scanner = DocumentScanner::new(&config);
        let progress = ProgressTracker::with_color(1, false);
        let outcome = scanner.scan(&[record("blank", "")], &progress).unwrap();

        assert!(outcome.groups.is_empty());
        assert_eq!(NotFoundLog::new(&config.not_found_path).count().unwrap(), 1);
    }

    #[test]
    fn test_rerun_skips_everything_via_journal() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let a = write_doc(&dir, "doc1.html", "hello");
        let b = write_doc(&dir, "doc2.html", "hello");
        let records = [record("a", &a), record("b", &b)];

        let scanner = DocumentScanner::new(&config);
        let first = scanner
            .scan(&records, &ProgressTracker::with_color(2, false))
            .unwrap();
        assert_eq!(first.stats.records_hashed, 2);

        let second = scanner
            .scan(&records, &ProgressTracker::with_color(2, false))
            .unwrap();
        assert!(second.groups.is_empty());
        assert_eq!(second.stats.records_skipped, 2);
        assert_eq!(second.stats.records_hashed, 0);
    }

    #[test]
    fn test_journaled_path_deleted_later_is_not_reflagged() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let a = write_doc(&dir, "doc1.html", "hello");
        let records = [record("a", &a)];

        let scanner = DocumentScanner::new(&config);
        scanner
            .scan(&records, &ProgressTracker::with_color(1, false))
            .unwrap();

        fs::remove_file(PathBuf::from(&a)).unwrap();

        scanner
            .scan(&records, &ProgressTracker::with_color(1, false))
            .unwrap();
        assert_eq!(NotFoundLog::new(&config.not_found_path).count().unwrap(), 0);
    }

    #[test]
    fn test_same_path_twice_in_one_run_shares_one_key() {
        let dir = TempDir::new().unwrap();
        let a = write_doc(&dir, "doc1.html", "hello");
        let records = [record("a", &a), record("a-again", &a)];

        let scanner = DocumentScanner::new(&test_config(&dir));
        let outcome = scanner
            .scan(&records, &ProgressTracker::with_color(2, false))
            .unwrap();

        let group = outcome.groups.values().next().unwrap();
        assert_eq!(group.records.len(), 2);
        assert_eq!(group.path_keys.len(), 1);
        assert!(!group.is_duplicate());
    }

    #[test]
    fn test_ignore_resume_rehashes_journaled_paths() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let a = write_doc(&dir, "doc1.html", "hello");
        let records = [record("a", &a)];

        let scanner = DocumentScanner::new(&config);
        scanner
            .scan(&records, &ProgressTracker::with_color(1, false))
            .unwrap();

        let fresh = DocumentScanner::new(&config).ignore_resume();
        let outcome = fresh
            .scan(&records, &ProgressTracker::with_color(1, false))
            .unwrap();
        assert_eq!(outcome.stats.records_hashed, 1);
    }
}
