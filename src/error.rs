//! Unified error types for groupstat.
//!
//! This module provides a single [`GroupstatError`] enum covering every
//! failure the analyser can surface.
//!
//! # Error Handling Philosophy
//!
//! - A missing transcript is **fatal**: the run stops before any report.
//! - Missing optional inputs (blocklist, stopwords) are not errors at all.
//! - Malformed transcript lines are **never** errors: they are dropped at the
//!   parser/classifier boundary and only show up in debug counters.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for groupstat operations.
///
/// # Example
///
/// ```rust
/// use groupstat::error::Result;
///
/// fn my_function() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GroupstatError>;

/// The error type for all groupstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroupstatError {
    /// The required transcript file does not exist.
    #[error("Chat file not found: {}", path.display())]
    TranscriptNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// An I/O error occurred while reading an input file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// One of the classifier patterns failed to compile.
    #[error("Invalid {name} pattern: {source}")]
    InvalidPattern {
        /// Which matcher the pattern belongs to
        name: &'static str,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The analyser configuration is unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },
}

impl GroupstatError {
    /// Creates a missing-transcript error.
    pub fn transcript_not_found(path: impl Into<PathBuf>) -> Self {
        GroupstatError::TranscriptNotFound { path: path.into() }
    }

    /// Creates a pattern compilation error.
    pub fn invalid_pattern(name: &'static str, source: regex::Error) -> Self {
        GroupstatError::InvalidPattern { name, source }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        GroupstatError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if this is the fatal missing-transcript error.
    pub fn is_transcript_not_found(&self) -> bool {
        matches!(self, GroupstatError::TranscriptNotFound { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, GroupstatError::Io(_))
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, GroupstatError::InvalidConfig { .. })
    }
}
