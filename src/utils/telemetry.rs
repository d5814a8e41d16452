// file: src/utils/telemetry.rs
// description: operation timing utilities for run summaries

use std::time::{Duration, Instant};
use tracing::info;

/// Formats a duration as hours, minutes, and fractional seconds for the
/// end-of-run summary.
pub fn format_hms(duration: Duration) -> String {
    let total = duration.as_secs_f64();
    let hours = (total / 3600.0).floor();
    let remainder = total - hours * 3600.0;
    let minutes = (remainder / 60.0).floor();
    let seconds = remainder - minutes * 60.0;

    format!("{:.0} hours {:.0} minutes {:.2} seconds", hours, minutes, seconds)
}

/// Operation timer for performance tracking
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        info!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Completed operation: {} in {}",
            self.operation,
            format_hms(elapsed)
        );
        elapsed
    }

    pub fn finish_with_count(self, count: usize) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Completed operation: {} - {} items in {:.2}s ({:.2} items/sec)",
            self.operation,
            count,
            elapsed.as_secs_f64(),
            if elapsed.as_secs_f64() > 0.0 {
                count as f64 / elapsed.as_secs_f64()
            } else {
                0.0
            }
        );
        elapsed
    }
}
