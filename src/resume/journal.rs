// file: src/resume/journal.rs
// description: append-only side files that make reruns idempotent
// reference: plain-text journals, one entry per line

use crate::error::{Result, ScanError};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Durable record of already-processed file paths. Read in full at startup;
/// each processed path is appended with its own open/append/close so the
/// marker survives a crash mid-run. The journal governs skip decisions on the
/// next run only, never correctness within a run.
pub struct ResumeJournal {
    path: PathBuf,
}

impl ResumeJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the full set of previously processed paths. A journal that does
    /// not exist yet is an empty set, not an error.
    pub fn load(&self) -> Result<HashSet<String>> {
        if !self.path.exists() {
            info!("Resume journal {} not found, starting fresh", self.path.display());
            return Ok(HashSet::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| ScanError::Journal {
            path: self.path.clone(),
            source,
        })?;

        let entries: HashSet<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        debug!("Loaded {} resume entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    pub fn append(&self, file_path: &str) -> Result<()> {
        append_line(&self.path, file_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Append-only log of record identifiers whose file path was empty, missing,
/// or unreadable. Those records are excluded from all further processing.
pub struct NotFoundLog {
    path: PathBuf,
}

impl NotFoundLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, record_id: &str) -> Result<()> {
        append_line(&self.path, record_id)
    }

    pub fn count(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| ScanError::Journal {
            path: self.path.clone(),
            source,
        })?;

        Ok(contents.lines().filter(|line| !line.trim().is_empty()).count())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ScanError::Journal {
            path: path.to_path_buf(),
            source,
        })?;

    writeln!(file, "{}", line).map_err(|source| ScanError::Journal {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_journal_loads_empty() {
        let dir = TempDir::new().unwrap();
        let journal = ResumeJournal::new(dir.path().join("saved.txt"));

        assert!(journal.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let journal = ResumeJournal::new(dir.path().join("saved.txt"));

        journal.append("reports/doc1.html").unwrap();
        journal.append("reports/doc2.html").unwrap();

        let entries = journal.load().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains("reports/doc1.html"));
        assert!(entries.contains("reports/doc2.html"));
    }

    #[test]
    fn test_load_ignores_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved.txt");
        fs::write(&path, "a.html\n\n  \nb.html\n").unwrap();

        let entries = ResumeJournal::new(&path).load().unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_not_found_log_counts_entries() {
        let dir = TempDir::new().unwrap();
        let log = NotFoundLog::new(dir.path().join("not_found.txt"));

        assert_eq!(log.count().unwrap(), 0);
        log.append("65a1").unwrap();
        log.append("65a2").unwrap();
        assert_eq!(log.count().unwrap(), 2);
    }
}
