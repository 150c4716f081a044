use colored::Colorize;
use std::fmt;

/// Exit code reported to the CLI layer when none is set explicitly.
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// The error surfaced to the command layer.
///
/// Carries a short, user-facing message and optionally the lower-level error
/// that caused it, so the CLI can print a clean top-level line while the
/// original I/O or parse failure stays available for diagnostics.
#[derive(Debug)]
pub struct CommandError {
    message: String,
    exit_code: i32,
    source: Option<anyhow::Error>,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: DEFAULT_EXIT_CODE,
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self {
            message: message.into(),
            exit_code: DEFAULT_EXIT_CODE,
            source: Some(source.into()),
        }
    }

    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    /// Render the error for a terminal.
    ///
    /// In verbose mode every error in the cause chain is listed under the
    /// headline.
    pub fn report(&self, verbose: bool) -> String {
        let mut out = format!("{} {}", "✗".red().bold(), self.message.bold());
        if let Some(source) = &self.source {
            if verbose {
                for cause in source.chain() {
                    out.push_str(&format!("\n  {} {}", "→".blue(), cause));
                }
            } else {
                out.push_str(&format!(
                    "\n  {} {}",
                    "→".blue(),
                    "Run with --verbose for more details.".dimmed()
                ));
            }
        }
        out
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.source {
            Some(err) => Some(err.as_ref()),
            None => None,
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(format!("I/O error: {err}"), err)
    }
}

impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        Self::with_source(err.to_string(), err)
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
