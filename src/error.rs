use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while tokenizing INI text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: malformed section header")]
    MalformedSection { line: usize },

    #[error("line {line}: expected `key=value`")]
    MalformedLine { line: usize },

    #[error("line {line}: key and value cannot be empty")]
    InvalidKeyValue { line: usize },

    #[error("line {line}: key-value pair appears before any section header")]
    NoCurrentSection { line: usize },

    #[error("line {line}: duplicate key {key:?}")]
    DuplicateKey { line: usize, key: String },
}

impl ParseError {
    #[must_use]
    pub fn line(&self) -> usize {
        match *self {
            Self::MalformedSection { line }
            | Self::MalformedLine { line }
            | Self::InvalidKeyValue { line }
            | Self::NoCurrentSection { line }
            | Self::DuplicateKey { line, .. } => line,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf, source: io::Error },

    #[error("failed to access {}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("section name cannot be empty")]
    InvalidArgument,

    #[error("invalid value {value:?}: must be non-empty and fit on one line")]
    InvalidValue { value: String },

    #[error("key {key:?} not found in section {section:?}")]
    NotFound { section: String, key: String },
}

impl Error {
    /// Classifies an I/O failure on `path`, separating a missing file from other failures.
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound { path, source }
        } else {
            Self::Io { path, source }
        }
    }
}
