// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod database;
pub mod error;
pub mod fingerprint;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod resume;
pub mod utils;

pub use config::{Config, DatabaseConfig, ScanConfig};
pub use database::RecordSource;
pub use error::{Result, ScanError};
pub use fingerprint::{content_digest, path_key, HtmlTextExtractor};
pub use models::{DocumentRecord, DuplicateReport, FingerprintGroup, HashedRecord};
pub use pipeline::{
    DocumentScanner, DuplicateClassifier, ProgressTracker, ScanOutcome, ScanStats,
};
pub use report::XlsxReporter;
pub use resume::{NotFoundLog, ResumeJournal};
pub use utils::{format_hms, OperationTimer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _extractor = HtmlTextExtractor::new();
    }
}
