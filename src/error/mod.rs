//! Error types for loading documents.
//!
//! Tree navigation, search, typed accessors, and serialization never fail, so
//! the only errors in the crate come from turning bytes or text into a tree.
//! Decoding a subtree through [`crate::decode`] reports the decoder's own error
//! type unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// An error that occurs during encoding detection or transcoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("encoding error: {message}")]
pub struct EncodingError {
    /// A human-readable description of the encoding error.
    pub message: String,
}

impl EncodingError {
    /// Creates a new `EncodingError` with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The error type returned when XML text cannot be turned into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at byte {position}: {message}")]
pub struct ParseError {
    /// The primary error message.
    pub message: String,
    /// Byte offset into the input where the error was detected.
    pub position: u64,
}

impl ParseError {
    /// Creates a new `ParseError` at the given byte offset.
    pub fn new(message: impl Into<String>, position: u64) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl From<EncodingError> for ParseError {
    fn from(err: EncodingError) -> Self {
        Self::new(err.to_string(), 0)
    }
}

/// The error type returned by [`Document::load_file`](crate::Document::load_file).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content is not a well-formed document.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
