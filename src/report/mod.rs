// file: src/report/mod.rs
// description: report writer exports

pub mod xlsx;

pub use xlsx::XlsxReporter;
