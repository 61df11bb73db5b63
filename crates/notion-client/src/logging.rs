//! Level-filtered, swappable logging.
//!
//! The dispatcher never talks to `tracing` directly; it goes through the
//! [`Logger`] trait so callers can redirect or capture log lines. The default
//! sink is [`TracingLogger`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Severity of a log line, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Lowercase name, as used in the rendered log line.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Returns true if a line at `level` passes a filter set to `self`.
    pub fn allows(&self, level: LogLevel) -> bool {
        level >= *self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(Error::new(ErrorKind::Config(format!(
                "unknown log level: {other}"
            )))),
        }
    }
}

/// Structured key/value pairs attached to a log line.
pub type LogFields = [(&'static str, String)];

/// A log sink.
///
/// Level filtering happens before `log` is called, so implementations only
/// need to write the line.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str, fields: &LogFields);
}

/// Default logger: forwards each line to `tracing` under the `notionkit`
/// target.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    identifier: String,
}

impl TracingLogger {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// Render a line as `{identifier} {level}: {message} {k: v, ...}`.
    pub fn render(&self, level: LogLevel, message: &str, fields: &LogFields) -> String {
        let mut line = format!("{} {}: {}", self.identifier, level, message);
        if !fields.is_empty() {
            let rendered: Vec<String> = fields.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            line.push_str(&format!(" {{{}}}", rendered.join(", ")));
        }
        line
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(crate::CLIENT_NAME)
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, fields: &LogFields) {
        let line = self.render(level, message, fields);
        match level {
            LogLevel::Debug => tracing::debug!(target: "notionkit", "{}", line),
            LogLevel::Info => tracing::info!(target: "notionkit", "{}", line),
            LogLevel::Warn => tracing::warn!(target: "notionkit", "{}", line),
            LogLevel::Error => tracing::error!(target: "notionkit", "{}", line),
        }
    }
}
