// file: src/resume/mod.rs
// description: durable scan journal exports

pub mod journal;

pub use journal::{NotFoundLog, ResumeJournal};
