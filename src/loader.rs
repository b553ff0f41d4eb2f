//! Input loading.
//!
//! Reads the transcript and the two optional word lists fully into memory.
//! The transcript is required; a missing blocklist or stopword file simply
//! yields an empty set.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::error::{GroupstatError, Result};

/// Everything read from disk for one run.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    /// Transcript lines, in file order
    pub lines: Vec<String>,
    /// Blocked words, as written
    pub blocklist: HashSet<String>,
    /// Stopwords, lowercased
    pub stopwords: HashSet<String>,
}

/// Loads the transcript and word lists named by `config`.
///
/// Fails with [`GroupstatError::TranscriptNotFound`] before touching the
/// optional files if the transcript does not exist.
pub fn load_inputs(config: &AnalyzerConfig) -> Result<Inputs> {
    let lines = load_transcript(&config.transcript)?;
    let blocklist = load_word_list(&config.blocklist)?;
    let stopwords = load_word_list(&config.stopwords)?
        .into_iter()
        .map(|word| word.to_lowercase())
        .collect();

    Ok(Inputs {
        lines,
        blocklist,
        stopwords,
    })
}

/// Reads the transcript into lines.
pub fn load_transcript(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(GroupstatError::transcript_not_found(path));
    }

    let content = fs::read_to_string(path)?;
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "loaded transcript");
    Ok(lines)
}

/// Reads a one-word-per-line list; a missing file is an empty list.
///
/// Entries are trimmed and blank lines skipped.
pub fn load_word_list(path: &Path) -> Result<HashSet<String>> {
    if !path.exists() {
        debug!(path = %path.display(), "optional word list not found");
        return Ok(HashSet::new());
    }

    let content = fs::read_to_string(path)?;
    let words: HashSet<String> = parse_word_list(&content);
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Parses word list content.
pub fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
