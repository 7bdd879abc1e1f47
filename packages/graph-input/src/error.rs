//! Error types for graph-input

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

/// Input error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input path missing, not a regular file, or unreadable
    Access,
    /// Malformed data line (too few fields, non-integer field)
    Parse,
    /// Operation called out of order (e.g. `to_ir` before `read_from_file`)
    State,
    /// Invalid loader configuration
    Config,
    /// Vertex ID space cannot be addressed
    Remap,
    /// I/O errors while reading
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Access => "access",
            ErrorKind::Parse => "parse",
            ErrorKind::State => "state",
            ErrorKind::Config => "config",
            ErrorKind::Remap => "remap",
            ErrorKind::IO => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input adapter error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct InputError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl InputError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn access(path: impl AsRef<std::path::Path>, reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::Access,
            format!(
                "Input file is not accessible: {} ({})",
                path.as_ref().display(),
                reason
            ),
        )
    }

    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, format!("line {}: {}", line, message.into()))
    }

    pub fn state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::State, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn remap(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Remap, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IO, message)
    }
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::io(format!("I/O error: {}", err)).with_source(err)
    }
}

// csv reports both read failures and record errors through one type
impl From<csv::Error> for InputError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        if err.is_io_error() {
            InputError::io(format!("CSV read error: {}", err)).with_source(err)
        } else {
            InputError::parse(line, format!("CSV error: {}", err)).with_source(err)
        }
    }
}

impl From<ConfigError> for InputError {
    fn from(err: ConfigError) -> Self {
        InputError::config(err.to_string()).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, InputError>;
