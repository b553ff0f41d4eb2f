//! Emoji membership tests.
//!
//! Message bodies are scanned character by character. [`EmojiTable`]
//! (feature `emoji-data`) consults the full Unicode emoji list from the
//! `emojis` crate; [`EmojiRange`] is the coarse fallback that only knows the
//! `U+1F300..=U+1FAFF` block and therefore misses emoji outside it
//! (`☕`, `✅`, ...).

use std::ops::RangeInclusive;

/// A per-character emoji membership test.
pub trait EmojiDetector: Send + Sync {
    /// Human-readable detector name.
    fn name(&self) -> &'static str;

    /// Returns `true` if `ch` counts as an emoji.
    fn is_emoji(&self, ch: char) -> bool;

    /// Every emoji character of `text`, in order, duplicates included.
    fn find_all(&self, text: &str) -> Vec<char> {
        text.chars().filter(|&ch| self.is_emoji(ch)).collect()
    }
}

/// Codepoint block recognised by the fallback detector.
pub const FALLBACK_RANGE: RangeInclusive<char> = '\u{1F300}'..='\u{1FAFF}';

/// Fallback detector covering a single contiguous block.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiRange;

impl EmojiDetector for EmojiRange {
    fn name(&self) -> &'static str {
        "codepoint range"
    }

    fn is_emoji(&self, ch: char) -> bool {
        FALLBACK_RANGE.contains(&ch)
    }
}

/// Emoji components that `emojis` does not list as standalone emoji:
/// skin-tone modifiers and hair components.
#[cfg(feature = "emoji-data")]
const COMPONENT_RANGES: [RangeInclusive<char>; 2] = [
    '\u{1F3FB}'..='\u{1F3FF}',
    '\u{1F9B0}'..='\u{1F9B3}',
];

/// Full-table detector.
///
/// Modifier sequences such as `👍🏽` yield the base emoji and the
/// modifier as two separate characters.
#[cfg(feature = "emoji-data")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiTable;

#[cfg(feature = "emoji-data")]
impl EmojiDetector for EmojiTable {
    fn name(&self) -> &'static str {
        "emoji table"
    }

    fn is_emoji(&self, ch: char) -> bool {
        if COMPONENT_RANGES.iter().any(|range| range.contains(&ch)) {
            return true;
        }
        let mut buf = [0u8; 4];
        emojis::get(ch.encode_utf8(&mut buf)).is_some()
    }
}
