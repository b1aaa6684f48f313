//! Log setup shared by the emojipick binaries
//!
//! `pick-search` logs to stderr so stdout carries only results. `pick-tui`
//! draws on stderr, so it logs to a file or not at all:
//!
//! ```no_run
//! use libemojipick::logging;
//!
//! logging::default_config()
//!     .with_file("/tmp/emojipick.log".into())
//!     .init();
//! ```
//!
//! `EMOJIPICK_LOG_FORMAT` (text, json, pretty) and `EMOJIPICK_LOG_LEVEL`
//! pick the format and level; `RUST_LOG` overrides the level.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// `verbose` forces debug level unless `RUST_LOG` says otherwise
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            file: None,
        }
    }

    /// Redirect output to a log file
    pub fn with_file(mut self, path: PathBuf) -> Self {
        self.file = Some(path);
        self
    }

    fn writer(&self) -> BoxMakeWriter {
        if let Some(ref path) = self.file {
            let opened = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path);
            match opened {
                Ok(file) => return BoxMakeWriter::new(Mutex::new(file)),
                Err(e) => {
                    eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
                }
            }
        }
        BoxMakeWriter::new(std::io::stderr)
    }

    fn filter(&self) -> EnvFilter {
        let level = if self.verbose { "debug" } else { self.level.as_str() };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }

    /// Install the global subscriber. Call once, before the first log line;
    /// a second call panics.
    pub fn init(&self) {
        let filter = self.filter();
        let to_file = self.file.is_some();
        let writer = self.writer();

        match self.format {
            LogFormat::Json => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(!to_file)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(!to_file)
                    .with_target(false)
                    .with_level(true)
                    .init();
            }
        }
    }
}

/// Configuration from `EMOJIPICK_LOG_FORMAT` / `EMOJIPICK_LOG_LEVEL`,
/// defaulting to text at warn level so stdout stays clean
pub fn default_config() -> LoggingConfig {
    let format = std::env::var("EMOJIPICK_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("EMOJIPICK_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

    LoggingConfig::new(format, level, false)
}
