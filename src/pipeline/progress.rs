// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for scan execution
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub records_hashed: usize,
    pub records_skipped: usize,
    pub records_missing: usize,
    pub total_bytes_processed: u64,
    pub duration_secs: u64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records_seen(&self) -> usize {
        self.records_hashed + self.records_skipped + self.records_missing
    }

    pub fn records_per_second(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        self.records_hashed as f64 / self.duration_secs as f64
    }

    pub fn bytes_per_second(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        self.total_bytes_processed as f64 / self.duration_secs as f64
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    records_hashed: Arc<AtomicUsize>,
    records_skipped: Arc<AtomicUsize>,
    records_missing: Arc<AtomicUsize>,
    bytes_processed: Arc<AtomicU64>,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_records: usize) -> Self {
        Self::with_color(total_records, true)
    }

    pub fn with_color(total_records: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();

        let main_bar = create_progress_bar(&multi_progress, total_records as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            records_hashed: Arc::new(AtomicUsize::new(0)),
            records_skipped: Arc::new(AtomicUsize::new(0)),
            records_missing: Arc::new(AtomicUsize::new(0)),
            bytes_processed: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_records_hashed(&self) {
        self.records_hashed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_records_skipped(&self) {
        self.records_skipped.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_records_missing(&self) {
        self.records_missing.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn add_bytes_processed(&self, bytes: u64) {
        self.bytes_processed.fetch_add(bytes, Ordering::SeqCst);
    }

    pub fn set_message(&self, message: String) {
        self.detail_bar.set_message(message);
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Hashing complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> ScanStats {
        let duration = self.start_time.elapsed().as_secs();

        ScanStats {
            records_hashed: self.records_hashed.load(Ordering::SeqCst),
            records_skipped: self.records_skipped.load(Ordering::SeqCst),
            records_missing: self.records_missing.load(Ordering::SeqCst),
            total_bytes_processed: self.bytes_processed.load(Ordering::SeqCst),
            duration_secs: duration,
        }
    }

    fn update_detail_bar(&self) {
        let skipped = self.records_skipped.load(Ordering::SeqCst);
        let missing = self.records_missing.load(Ordering::SeqCst);

        let message = format!("Skipped: {} | Not found: {}", skipped, missing);

        self.detail_bar.set_message(message);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                )
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta}) {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let style = ProgressStyle::default_bar()
        .template("{msg}")
        .expect("Failed to create detail bar template");
    bar.set_style(style);
    bar
}
