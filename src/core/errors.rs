//! Shared error types for locating test blocks

use std::path::PathBuf;
use thiserror::Error;

/// Message reported when no test declaration encloses the target line.
pub const NO_MATCH_MESSAGE: &str = "No test method found containing the specified line.";

/// Coarse classification of a [`LocateError`], used when aggregating batch results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FileNotFound,
    Parse,
    NoMatch,
    MalformedInput,
    Io,
}

/// Per-item failure of a locate request.
///
/// Every variant is recoverable: the batch driver turns it into an error row
/// and moves on to the next input row.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Source file does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Syntax tree could not be built
    #[error("Parsing error: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Traversal finished without a qualifying node
    #[error("{}", NO_MATCH_MESSAGE)]
    NoMatch { path: PathBuf, line: usize },

    /// Row or request could not be interpreted
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Source exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LocateError {
    /// Create a parse error with location
    pub fn parse(
        path: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            column,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::NoMatch { .. } => ErrorKind::NoMatch,
            Self::MalformedInput(_) => ErrorKind::MalformedInput,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Build the error for a failed read, separating a missing file from other I/O failures.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Failures that abort a whole batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Invalid project root: {}", path.display())]
    InvalidProjectRoot { path: PathBuf },

    #[error("No project root configured (use --project-root, PROJECT_PATH or .smellblock.toml)")]
    MissingProjectRoot,

    #[error("Error reading input CSV {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Error writing output CSV {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type alias for locate operations
pub type Result<T> = std::result::Result<T, LocateError>;
