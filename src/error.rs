//! Centralized error handling for the sankey pipeline.
//!
//! All fallible pipeline operations return [`Result`], an alias over
//! [`SankeyError`]. The `From` conversions let the `?` operator lift
//! I/O, Polars, and JSON errors into the pipeline taxonomy, and the
//! [`ResultExt`] trait adds `.context()` for attaching a caller-side
//! message to any convertible error.

use std::fmt;

/// Main error type for sankey pipeline operations.
#[derive(Debug)]
pub enum SankeyError {
    /// I/O errors (reading input, writing the export)
    Io(std::io::Error),

    /// Input path missing or not a file
    InvalidPath(String),

    /// CSV parsing errors surfaced from Polars
    Csv(String),

    /// A configured category column is absent from the input data
    MissingColumn(String),

    /// An order or highlight entry names a category the dataset does not track
    UnknownCategory(String),

    /// A row value is absent from its category's derived distinct set
    ValueNotFound { category: String, value: String },

    /// Malformed hex color string
    Color(String),

    /// Diagram spec file errors
    Config(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for SankeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidPath(path) => write!(f, "Invalid path: {path}"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::MissingColumn(name) => {
                write!(f, "Column '{name}' not found in the input data")
            }
            Self::UnknownCategory(name) => write!(f, "Unknown category '{name}'"),
            Self::ValueNotFound { category, value } => {
                write!(f, "Value '{value}' not found in category '{category}'")
            }
            Self::Color(color) => write!(f, "Invalid color '{color}': expected '#RRGGBB'"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SankeyError {}

impl From<std::io::Error> for SankeyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::error::PolarsError> for SankeyError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for SankeyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<anyhow::Error> for SankeyError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

/// Result type alias for sankey pipeline operations.
pub type Result<T> = std::result::Result<T, SankeyError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<SankeyError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: SankeyError = e.into();
            SankeyError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: SankeyError = e.into();
            SankeyError::Other(format!("{}: {}", f(), err))
        })
    }
}
