use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zipstage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Stage ZIP archive contents into a disposable directory")]
#[command(
    long_about = "ZipStage deletes the output directory if it already exists, recreates it \
                       empty, and extracts every entry of the input archive into it. It is \
                       meant for disposable test-data staging: deletion is unconditional and \
                       there is no confirmation prompt."
)]
#[command(after_help = "EXAMPLES:\n  \
    zipstage --input fixtures.zip --output /tmp/fixtures\n  \
    zipstage -i data.zip -o staging --output-format json\n  \
    zipstage -i data.zip -o staging -v\n\n\
    The output directory is destroyed and recreated on every run.")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the input ZIP archive
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Path to the output directory (destroyed and recreated)
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    pub fn should_use_colors(&self) -> bool {
        !self.quiet && console::Term::stdout().features().colors_supported()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_required_flags() {
        assert!(Cli::try_parse_from(["zipstage"]).is_err());
        assert!(Cli::try_parse_from(["zipstage", "-i", "a.zip"]).is_err());
        assert!(Cli::try_parse_from(["zipstage", "-o", "out"]).is_err());

        let cli = Cli::try_parse_from(["zipstage", "-i", "a.zip", "-o", "out"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("a.zip"));
        assert_eq!(cli.output, PathBuf::from("out"));
    }

    #[test]
    fn test_long_flags() {
        let cli =
            Cli::try_parse_from(["zipstage", "--input", "a.zip", "--output", "out"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("a.zip"));
        assert_eq!(cli.output, PathBuf::from("out"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["zipstage", "-i", "a.zip", "-o", "out", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::try_parse_from(["zipstage", "-i", "a.zip", "-o", "out", "-vv"]).unwrap();
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::try_parse_from(["zipstage", "-i", "a.zip", "-o", "out", "-q"]).unwrap();
        assert_eq!(cli.verbosity_level(), 0);
    }
}
