use crate::stager::StageProgress;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn create_entry_progress(&self, total_entries: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total_entries);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} entries {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        pb.set_message("Extracting...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new(true)
    }
}

pub fn update_entry_progress(pb: &ProgressBar, progress: &StageProgress) {
    // The entry count is only known once the archive is open.
    if pb.length() != Some(progress.total_entries as u64) {
        pb.set_length(progress.total_entries as u64);
    }
    pb.set_position(progress.entries_processed as u64);
    if let Some(ref entry) = progress.current_entry {
        pb.set_message(entry.clone());
    }
}

pub fn finish_progress_with_summary(pb: &ProgressBar, message: &str, elapsed: Duration) {
    pb.finish_with_message(format!("{} in {:.1}s", message, elapsed.as_secs_f64()));
}
