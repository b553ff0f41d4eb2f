//! Configuration types for the analyser.
//!
//! [`AnalyzerConfig`] is a plain serde-friendly struct with builder methods,
//! free of any CLI framework dependency. The defaults reproduce the behaviour
//! of a bare run: fixed input file names, the English WhatsApp markers, and
//! top-20 rankings.
//!
//! # Example
//!
//! ```rust
//! use groupstat::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::new()
//!     .with_transcript("export.txt")
//!     .with_top_n(10);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{GroupstatError, Result};

/// Default transcript file name.
pub const DEFAULT_TRANSCRIPT: &str = "Chats_update_2025-07-06.txt";

/// Default blocklist file name.
pub const DEFAULT_BLOCKLIST: &str = "bad_words.txt";

/// Default stopword file name.
pub const DEFAULT_STOPWORDS: &str = "stop_words.txt";

/// Placeholder WhatsApp writes instead of an attachment.
pub const MEDIA_MARKER: &str = "<Media omitted>";

/// Body WhatsApp leaves behind for a deleted message.
pub const DELETED_MARKER: &str = "This message was deleted";

/// Group name shown when the creation event carries none.
pub const UNNAMED_GROUP: &str = "(unnamed)";

/// Configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Transcript export (required at run time)
    pub transcript: PathBuf,

    /// Blocklist, one word per line (optional)
    pub blocklist: PathBuf,

    /// Stopword list, one word per line (optional)
    pub stopwords: PathBuf,

    /// Case-sensitive substring marking a media message
    pub media_marker: String,

    /// Case-insensitive phrase marking a deleted message
    pub deleted_marker: String,

    /// Group name used when a creation line names none
    pub unnamed_group: String,

    /// Length of the word and emoji rankings (default: 20)
    pub top_n: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            transcript: PathBuf::from(DEFAULT_TRANSCRIPT),
            blocklist: PathBuf::from(DEFAULT_BLOCKLIST),
            stopwords: PathBuf::from(DEFAULT_STOPWORDS),
            media_marker: MEDIA_MARKER.to_string(),
            deleted_marker: DELETED_MARKER.to_string(),
            unnamed_group: UNNAMED_GROUP.to_string(),
            top_n: 20,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transcript path.
    #[must_use]
    pub fn with_transcript(mut self, path: impl Into<PathBuf>) -> Self {
        self.transcript = path.into();
        self
    }

    /// Sets the blocklist path.
    #[must_use]
    pub fn with_blocklist(mut self, path: impl Into<PathBuf>) -> Self {
        self.blocklist = path.into();
        self
    }

    /// Sets the stopword list path.
    #[must_use]
    pub fn with_stopwords(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords = path.into();
        self
    }

    /// Sets the media placeholder marker.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_marker = marker.into();
        self
    }

    /// Sets the deleted-message marker.
    #[must_use]
    pub fn with_deleted_marker(mut self, marker: impl Into<String>) -> Self {
        self.deleted_marker = marker.into();
        self
    }

    /// Sets the ranking length.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(GroupstatError::invalid_config("top_n must be at least 1"));
        }
        if self.media_marker.is_empty() || self.deleted_marker.is_empty() {
            return Err(GroupstatError::invalid_config(
                "media and deleted markers must not be empty",
            ));
        }
        Ok(())
    }
}
