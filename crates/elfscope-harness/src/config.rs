//! Run configuration.
//!
//! Defaults come from the environment and are resolved once per run:
//! - `ELFSCOPE_FORMAT`: `plain` (default) or `json`. Unrecognized values fall
//!   back to `plain`.
//! - `ELFSCOPE_LOG`: path of a JSONL structured log. Unset or empty disables it.
//!
//! Command-line flags override both.

use std::path::PathBuf;

pub const FORMAT_ENV: &str = "ELFSCOPE_FORMAT";
pub const LOG_ENV: &str = "ELFSCOPE_LOG";

/// Report output format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Aligned text tables.
    #[default]
    Plain,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" | "txt" | "table" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }
}

/// Settings for one `elfscope` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub format: OutputFormat,
    pub log_path: Option<PathBuf>,
}

impl RunConfig {
    /// Resolve from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let format = lookup(FORMAT_ENV)
            .as_deref()
            .and_then(OutputFormat::from_str_loose)
            .unwrap_or_default();
        let log_path = lookup(LOG_ENV)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);
        Self { format, log_path }
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, format: Option<OutputFormat>, log_path: Option<PathBuf>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if log_path.is_some() {
            self.log_path = log_path;
        }
        self
    }
}
