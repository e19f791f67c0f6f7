pub mod cli;
pub mod error;
pub mod stager;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use error::{Result, StageError, UserFriendlyError};

// Core functionality re-exports
pub use stager::{ArchiveStager, OutputWorkspace, StageProgress, StageSummary};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use std::path::Path;

/// Main library interface for staging a ZIP archive into a directory.
pub struct ZipStage {
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl ZipStage {
    pub fn new(output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        // Progress bars only make sense on a human terminal.
        let progress_manager = ProgressManager::new(output_mode == OutputMode::Human && !quiet);

        Self {
            output_formatter,
            progress_manager,
        }
    }

    /// Create a ZipStage instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Self {
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Self::new(output_mode, cli_args.verbose, cli_args.quiet)
    }

    /// Run the two staging steps: reset the output directory, then extract
    /// the archive into it.
    ///
    /// The steps are sequential and observable, never merged: a pre-existing
    /// output directory is gone before the archive is even opened, so a
    /// failed extraction leaves an empty (or partially populated) directory
    /// behind rather than the stale contents.
    pub fn stage(&self, input: &Path, output: &Path) -> Result<StageSummary> {
        self.output_formatter.start_operation(&format!(
            "Staging {} into {}",
            input.display(),
            output.display()
        ));

        // Step 1: reset the output directory (unconditional, no prompt)
        let workspace = OutputWorkspace::new(output);
        workspace.reset()?;
        self.output_formatter
            .debug(&format!("reset output directory {}", output.display()));

        // Step 2: extract every entry
        let entry_progress = self.progress_manager.create_entry_progress(0);
        let progress_callback = {
            let pb = entry_progress.clone();
            move |progress: &StageProgress| {
                ui::progress::update_entry_progress(&pb, progress);
            }
        };

        let stager = ArchiveStager::new();
        match stager.extract(input, workspace.root(), Some(&progress_callback)) {
            Ok(progress) => {
                ui::progress::finish_progress_with_summary(
                    &entry_progress,
                    &format!("Extracted {} entries", progress.entries_processed),
                    progress.elapsed(),
                );
                Ok(StageSummary::from_progress(input, output, &progress))
            }
            Err(e) => {
                entry_progress.finish_and_clear();
                Err(e)
            }
        }
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &StageError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to stage an archive with minimal setup.
pub fn stage_archive(input: &Path, output: &Path) -> Result<StageSummary> {
    ZipStage::new(OutputMode::Plain, 0, true).stage(input, output)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn build_archive(path: &Path, entries: &[(&str, &[u8])]) {
        let file = fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        for (name, content) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_stage_replaces_prior_contents() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("data.zip");
        let output = temp_dir.path().join("out");

        build_archive(&archive, &[("a.txt", b"hello"), ("sub/b.txt", b"world")]);

        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("stale.txt"), "stale").unwrap();

        let summary = stage_archive(&archive, &output).unwrap();

        assert_eq!(summary.entries_extracted, 2);
        assert_eq!(fs::read_to_string(output.join("a.txt")).unwrap(), "hello");
        assert_eq!(
            fs::read_to_string(output.join("sub/b.txt")).unwrap(),
            "world"
        );
        assert!(!output.join("stale.txt").exists());
    }

    #[test]
    fn test_stage_twice_yields_same_contents() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("data.zip");
        let output = temp_dir.path().join("out");

        build_archive(&archive, &[("a.txt", b"hello")]);

        stage_archive(&archive, &output).unwrap();
        let second = stage_archive(&archive, &output).unwrap();

        assert_eq!(second.entries_extracted, 1);
        assert_eq!(fs::read_to_string(output.join("a.txt")).unwrap(), "hello");
        assert_eq!(fs::read_dir(&output).unwrap().count(), 1);
    }

    #[test]
    fn test_stage_missing_archive_leaves_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out");

        let err = stage_archive(&temp_dir.path().join("missing.zip"), &output).unwrap_err();

        assert!(matches!(err, StageError::ArchiveNotFound { .. }));
        // The reset already happened; the directory exists but is empty.
        assert!(output.is_dir());
        assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
    }

    #[test]
    fn test_stage_collision_mutates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("data.zip");
        build_archive(&archive, &[("a.txt", b"hello")]);

        let collision = temp_dir.path().join("out");
        fs::write(&collision, "precious").unwrap();

        let err = stage_archive(&archive, &collision).unwrap_err();

        assert!(matches!(err, StageError::OutputCollision { .. }));
        assert_eq!(fs::read_to_string(&collision).unwrap(), "precious");
    }

    #[test]
    fn test_from_cli_maps_output_mode() {
        use clap::Parser;
        let cli = Cli::try_parse_from([
            "zipstage",
            "-i",
            "a.zip",
            "-o",
            "out",
            "--output-format",
            "json",
        ])
        .unwrap();
        let stage = ZipStage::from_cli(&cli);
        assert!(!stage.output_formatter().is_quiet());
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
