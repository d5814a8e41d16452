// file: src/models/mod.rs
// description: data model exports

pub mod document;
pub mod duplicate;

pub use document::{DocumentRecord, HashedRecord};
pub use duplicate::{DuplicateReport, FingerprintGroup};
