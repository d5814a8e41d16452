// file: src/database/mod.rs
// description: record source exports

pub mod client;

pub use client::RecordSource;
