use clap::Parser;
use std::process;
use zipstage::{Cli, StageError, ZipStage};

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    // Parse CLI arguments; clap exits with a usage message (and non-zero
    // status) before any filesystem mutation when required flags are missing.
    let cli = Cli::parse();

    let stage = ZipStage::from_cli(&cli);

    match stage.stage(&cli.input, &cli.output) {
        Ok(summary) => {
            stage.output_formatter().print_stage_summary(&summary);
            0
        }
        Err(e) => {
            stage.handle_error(&e);

            // Map error types to appropriate exit codes
            match e {
                StageError::ArchiveNotFound { .. } => 3,
                StageError::CorruptArchive { .. } => 4,
                StageError::OutputCollision { .. } => 5,
                StageError::UnsafeEntryPath { .. } => 6,
                StageError::Io(_) => 1,
            }
        }
    }
}
