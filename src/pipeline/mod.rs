// file: src/pipeline/mod.rs
// description: scan pipeline exports

pub mod classifier;
pub mod progress;
pub mod scanner;

pub use classifier::DuplicateClassifier;
pub use progress::{ProgressTracker, ScanStats};
pub use scanner::{DocumentScanner, ScanOutcome};
