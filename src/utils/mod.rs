// file: src/utils/mod.rs
// description: shared utility exports

pub mod logging;
pub mod telemetry;

pub use telemetry::{format_hms, OperationTimer};
