//! # Progress Tracking and Statistics Module
//!
//! Progress feedback while files are probed, plus a summary of the run.
//!
//! ## Components:
//! - `ProgressManager`: indicatif bar, only drawn when more than one file is queued
//! - `ProbeStats`: counts of probed and failed files
//!
//! ## Visual feedback:
//! ```text
//! ⠋ [00:00:03] [========================>---------------] 6/10 (60%) Processing file 6 of 10
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Manages progress reporting for the probe loop
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new(total_files: u64) -> Self {
        let bar = ProgressBar::new(total_files);

        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        {
            bar.set_style(style.progress_chars("=>-"));
        }

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// A progress manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Update progress with a message
    pub fn update(&self, message: &str) {
        self.bar.inc(1);
        self.bar.set_message(message.to_string());
    }

    /// Finish and clear the bar so results print on a clean line
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Statistics for one run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProbeStats {
    pub files_probed: usize,
    pub files_failed: usize,
}

impl ProbeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_probed(&mut self) {
        self.files_probed += 1;
    }

    pub fn add_failed(&mut self) {
        self.files_failed += 1;
    }

    pub fn total(&self) -> usize {
        self.files_probed + self.files_failed
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Processed: {} files | Probed: {} | Failed: {}",
            self.total(),
            self.files_probed,
            self.files_failed
        )
    }
}
