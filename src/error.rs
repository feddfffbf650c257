// File: src/error.rs
//! Error types for dictionary generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for fatal generator operations.
pub type Result<T> = std::result::Result<T, DictError>;

/// Failures that abort a generation run.
#[derive(Error, Debug)]
pub enum DictError {
    /// Transport-level failure while fetching the source table.
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The server answered, but not with a success status.
    #[error("HTTP {status} fetching {url}")]
    Http { url: String, status: u16 },

    /// The dictionary could not be written to disk.
    #[error("Could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary could not be read back from disk.
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Invalid or unreadable generator configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for DictError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        if let Some(status) = e.status() {
            DictError::Http {
                url,
                status: status.as_u16(),
            }
        } else {
            DictError::Network {
                url,
                message: e.to_string(),
            }
        }
    }
}

/// A problem confined to a single source line. The line is skipped and the
/// scan carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("Bad line, line {line}: no ':' separator: {text}")]
    MissingSeparator { line: usize, text: String },

    #[error("Bad line, line {line}: empty code field: {text}")]
    MissingCode { line: usize, text: String },

    #[error("Bad line, line {line}: empty pronunciation field: {text}")]
    MissingPronunciation { line: usize, text: String },

    #[error("Bad code point, line {line}: {field:?}")]
    InvalidCodePoint { line: usize, field: String },

    /// Parsed as hex, but no character has this value.
    #[error("Error, line {line}: {code_point:#X} is not a Unicode scalar value")]
    NotAScalarValue { line: usize, code_point: u32 },

    /// Anything else that went wrong while handling the line.
    #[error("Error, line {line}: {detail}")]
    Unexpected { line: usize, detail: String },
}

impl LineError {
    /// 1-based line number in the source body.
    pub fn line(&self) -> usize {
        match self {
            LineError::MissingSeparator { line, .. }
            | LineError::MissingCode { line, .. }
            | LineError::MissingPronunciation { line, .. }
            | LineError::InvalidCodePoint { line, .. }
            | LineError::NotAScalarValue { line, .. }
            | LineError::Unexpected { line, .. } => *line,
        }
    }

    /// True for syntax problems in the line itself, false for the
    /// unexpected class.
    pub fn is_malformed(&self) -> bool {
        !matches!(
            self,
            LineError::NotAScalarValue { .. } | LineError::Unexpected { .. }
        )
    }
}
