use crate::error::UserFriendlyError;
use crate::stager::StageSummary;
use console::{style, Emoji, Term};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static ROCKET: Emoji = Emoji("🚀 ", "> ");

pub struct OutputFormatter {
    #[allow(dead_code)]
    term: Term,
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

enum MessageType {
    Success,
    Error,
    Warning,
    Info,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let term = Term::stdout();
        let use_colors = match mode {
            OutputMode::Human => term.features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            term,
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Success, message),
            OutputMode::Json => self.print_json_message("success", message),
            OutputMode::Plain => println!("SUCCESS: {}", message),
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Warning, message),
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => println!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", ROCKET, style(operation).bold());
                    } else {
                        println!("> {}", operation);
                    }
                }
                OutputMode::Json => self.print_json_message("operation", operation),
                OutputMode::Plain => println!("> {}", operation),
            }
        }
    }

    /// Completion message with the final stage statistics.
    pub fn print_stage_summary(&self, summary: &StageSummary) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Json => match serde_json::to_string_pretty(summary) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("ERROR: failed to serialize summary: {}", e),
            },
            _ => {
                self.success(&format!(
                    "Staged {} entries ({}) from {} into {}",
                    summary.entries_extracted,
                    format_bytes(summary.bytes_written),
                    summary.input.display(),
                    summary.output.display(),
                ));
                self.debug(&format!("completed in {} ms", summary.duration_ms));
            }
        }
    }

    pub fn print_user_friendly_error(&self, error: &dyn UserFriendlyError) {
        self.error(&error.user_message());
        if let Some(suggestion) = error.suggestion() {
            if !self.quiet {
                match self.mode {
                    OutputMode::Human => {
                        if self.use_colors {
                            eprintln!("  {}", style(format!("Suggestion: {}", suggestion)).dim());
                        } else {
                            eprintln!("  Suggestion: {}", suggestion);
                        }
                    }
                    OutputMode::Json => self.print_json_message("suggestion", &suggestion),
                    OutputMode::Plain => eprintln!("SUGGESTION: {}", suggestion),
                }
            }
        }
    }

    fn print_human_message(&self, message_type: MessageType, message: &str) {
        match message_type {
            MessageType::Success => {
                if self.use_colors {
                    println!("{}{}", CHECKMARK, style(message).green());
                } else {
                    println!("✓ {}", message);
                }
            }
            MessageType::Error => {
                if self.use_colors {
                    eprintln!("{}{}", CROSS, style(message).red());
                } else {
                    eprintln!("✗ {}", message);
                }
            }
            MessageType::Warning => {
                if self.use_colors {
                    println!("{}{}", WARNING, style(message).yellow());
                } else {
                    println!("! {}", message);
                }
            }
            MessageType::Info => {
                if self.use_colors {
                    println!("{}{}", INFO, style(message).cyan());
                } else {
                    println!("i {}", message);
                }
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        let line = serde_json::json!({
            "type": level,
            "message": message,
        });
        println!("{}", line);
    }

    fn should_show_message(&self, required_level: u8) -> bool {
        !self.quiet && self.verbose_level >= required_level
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
