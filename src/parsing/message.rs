//! Feature extraction for user message bodies.
//!
//! [`MessageRules`] bundles everything a body is checked against (markers,
//! blocklist, stopwords); [`MessageRules::inspect`] turns a body into
//! [`MessageFeatures`] that the aggregator folds without further decisions.

use std::collections::HashSet;

use regex::Regex;

use crate::config::AnalyzerConfig;
use crate::emoji::EmojiDetector;
use crate::error::{GroupstatError, Result};

/// Any run of characters that are neither letters nor digits.
///
/// Combining marks (tanween, Indic vowel signs) fall outside both classes
/// and split tokens as well.
const TOKEN_SEPARATOR: &str = r"[^\p{L}\p{N}]+";

/// Everything observed about one message body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFeatures {
    /// Body contains the media placeholder
    pub media: bool,
    /// Body contains the deletion marker (case-insensitive)
    pub deleted: bool,
    /// Body contains at least one blocked word as a raw substring
    pub blocked: bool,
    /// Length in characters
    pub chars: usize,
    /// Whitespace-separated word count
    pub words: usize,
    /// Frequency tokens, stopwords removed
    pub tokens: Vec<String>,
    /// Emoji characters, in order
    pub emoji: Vec<char>,
}

/// Detection rules applied to every user message.
#[derive(Debug, Clone)]
pub struct MessageRules {
    media_marker: String,
    deleted_marker: String,
    blocklist: HashSet<String>,
    stopwords: HashSet<String>,
    separator: Regex,
}

impl MessageRules {
    /// Creates rules from explicit markers and word sets.
    ///
    /// The deletion marker is compared case-insensitively; stopwords are
    /// expected already lowercased.
    pub fn new(
        media_marker: impl Into<String>,
        deleted_marker: &str,
        blocklist: HashSet<String>,
        stopwords: HashSet<String>,
    ) -> Result<Self> {
        let separator = Regex::new(TOKEN_SEPARATOR)
            .map_err(|e| GroupstatError::invalid_pattern("token-separator", e))?;
        Ok(Self {
            media_marker: media_marker.into(),
            deleted_marker: deleted_marker.to_lowercase(),
            blocklist,
            stopwords,
            separator,
        })
    }

    /// Creates rules from the configured markers and the loaded word lists.
    pub fn from_config(
        config: &AnalyzerConfig,
        blocklist: HashSet<String>,
        stopwords: HashSet<String>,
    ) -> Result<Self> {
        Self::new(
            config.media_marker.clone(),
            &config.deleted_marker,
            blocklist,
            stopwords,
        )
    }

    /// Inspects a trimmed message body.
    pub fn inspect(&self, body: &str, emoji: &dyn EmojiDetector) -> MessageFeatures {
        MessageFeatures {
            media: body.contains(self.media_marker.as_str()),
            deleted: body.to_lowercase().contains(&self.deleted_marker),
            blocked: self.contains_blocked_word(body),
            chars: body.chars().count(),
            words: body.split_whitespace().count(),
            tokens: self
                .tokenize(body)
                .filter(|token| !self.stopwords.contains(token))
                .collect(),
            emoji: emoji.find_all(body),
        }
    }

    /// Raw substring test, not word-boundary aware.
    pub fn contains_blocked_word(&self, body: &str) -> bool {
        self.blocklist.iter().any(|word| body.contains(word.as_str()))
    }

    /// Splits a body into lowercase frequency tokens.
    ///
    /// Every run of characters outside the letter and number categories acts
    /// as one separator, so punctuation, underscores and combining marks
    /// never end up inside a token.
    pub fn tokenize<'a>(&'a self, body: &'a str) -> impl Iterator<Item = String> + 'a {
        self.separator
            .split(body)
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
    }
}
