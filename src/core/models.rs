//! Per-user and group-level records built by the aggregator.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Running statistics for one sender.
///
/// `first_seen` is written once; `last_seen` is overwritten by every message,
/// so both follow transcript order rather than chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Sender display name (case-sensitive key)
    pub name: String,
    pub messages: usize,
    pub media: usize,
    pub deleted: usize,
    /// Messages containing at least one blocked word
    pub blocked: usize,
    /// Total characters over all messages
    pub char_sum: usize,
    /// Total whitespace-separated words over all messages
    pub word_sum: usize,
    pub first_seen: Option<NaiveDateTime>,
    pub last_seen: Option<NaiveDateTime>,
}

impl UserStats {
    /// Creates an empty record for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: 0,
            media: 0,
            deleted: 0,
            blocked: 0,
            char_sum: 0,
            word_sum: 0,
            first_seen: None,
            last_seen: None,
        }
    }

    /// Mean characters per message, zero without messages.
    pub fn avg_chars(&self) -> f64 {
        if self.messages == 0 {
            return 0.0;
        }
        self.char_sum as f64 / self.messages as f64
    }

    /// Mean words per message, zero without messages.
    pub fn avg_words(&self) -> f64 {
        if self.messages == 0 {
            return 0.0;
        }
        self.word_sum as f64 / self.messages as f64
    }
}

/// The group creation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCreation {
    /// Date label of the creation line
    pub date: String,
    pub creator: String,
    pub name: String,
}

/// One group rename event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRename {
    /// Date label of the rename line
    pub date: String,
    pub changer: String,
    pub old_name: String,
    pub new_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_averages() {
        let mut user = UserStats::new("Alice");
        assert_eq!(user.avg_chars(), 0.0);
        assert_eq!(user.avg_words(), 0.0);

        user.messages = 4;
        user.char_sum = 10;
        user.word_sum = 6;
        assert!((user.avg_chars() - 2.5).abs() < f64::EPSILON);
        assert!((user.avg_words() - 1.5).abs() < f64::EPSILON);
    }
}
