//! Vocabulary error module.
//!
//! This module defines error types that may occur while reading a vocabulary
//! word list.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a vocabulary.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// Error when the vocabulary file does not exist.
    #[error("Vocabulary file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the vocabulary file cannot be opened or read.
    #[error("Failed to read vocabulary file {path}: {source}")]
    Read {
        /// The file being read
        path: PathBuf,
        /// The underlying IO failure
        #[source]
        source: io::Error,
    },

    /// Error when reading from a non-file source.
    #[error("Failed to read vocabulary: {0}")]
    Io(#[from] io::Error),

    /// Error when the source produced no words at all.
    #[error("Vocabulary is empty: {0}")]
    Empty(String),
}
