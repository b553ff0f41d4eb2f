//! The aggregator: folds classified lines into counters.
//!
//! [`ChatStats`] owns every accumulator of a run. It makes no decisions of
//! its own: the classifier decides what a line is and
//! [`MessageRules`](crate::parsing::MessageRules) what a message contains;
//! this module only counts.

use std::collections::HashMap;

use chrono::{NaiveDateTime, Timelike};

use crate::calendar::DateLabel;
use crate::core::counter::FrequencyCounter;
use crate::core::models::{GroupCreation, GroupRename, UserStats};
use crate::parsing::MessageFeatures;

/// Aggregated statistics for a transcript.
#[derive(Debug, Clone, Default)]
pub struct ChatStats {
    users: Vec<UserStats>,
    user_index: HashMap<String, usize>,
    hours: [usize; 24],
    weekdays: [usize; 7],
    months: [usize; 12],
    words: FrequencyCounter<String>,
    emoji: FrequencyCounter<char>,
    messages_per_day: FrequencyCounter<String>,
    media_per_day: FrequencyCounter<String>,
    creation: Option<GroupCreation>,
    renames: Vec<GroupRename>,
}

impl ChatStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a line with a parseable timestamp, whatever it turns out to be.
    pub fn record_line(&mut self, at: NaiveDateTime, label: &DateLabel) {
        self.hours[at.hour() as usize] += 1;
        self.weekdays[label.weekday] += 1;
        self.months[label.month - 1] += 1;
        self.messages_per_day.add(label.text.clone());
    }

    /// Folds one user message.
    pub fn record_message(
        &mut self,
        sender: &str,
        at: NaiveDateTime,
        label: &DateLabel,
        features: MessageFeatures,
    ) {
        let user = self.user_mut(sender);
        user.messages += 1;
        user.char_sum += features.chars;
        user.word_sum += features.words;
        user.first_seen.get_or_insert(at);
        user.last_seen = Some(at);

        if features.media {
            user.media += 1;
        }
        if features.deleted {
            user.deleted += 1;
        }
        if features.blocked {
            user.blocked += 1;
        }

        if features.media {
            self.media_per_day.add(label.text.clone());
        }
        for token in features.tokens {
            self.words.add(token);
        }
        for ch in features.emoji {
            self.emoji.add(ch);
        }
    }

    /// Records the group creation; only the first one is kept.
    pub fn record_creation(&mut self, creation: GroupCreation) {
        if self.creation.is_none() {
            self.creation = Some(creation);
        }
    }

    /// Appends a rename event.
    pub fn record_rename(&mut self, rename: GroupRename) {
        self.renames.push(rename);
    }

    fn user_mut(&mut self, sender: &str) -> &mut UserStats {
        let idx = match self.user_index.get(sender) {
            Some(&idx) => idx,
            None => {
                let idx = self.users.len();
                self.users.push(UserStats::new(sender));
                self.user_index.insert(sender.to_string(), idx);
                idx
            }
        };
        &mut self.users[idx]
    }

    /// Users in first-seen order.
    pub fn users(&self) -> &[UserStats] {
        &self.users
    }

    /// Looks up a user by exact display name.
    pub fn user(&self, name: &str) -> Option<&UserStats> {
        self.user_index.get(name).map(|&idx| &self.users[idx])
    }

    /// Users by descending message count, ties in first-seen order.
    pub fn users_by_messages(&self) -> Vec<&UserStats> {
        let mut users: Vec<&UserStats> = self.users.iter().collect();
        users.sort_by(|a, b| b.messages.cmp(&a.messages));
        users
    }

    /// Hour-of-day histogram, index = hour.
    pub fn hours(&self) -> &[usize; 24] {
        &self.hours
    }

    /// Weekday histogram, `0 = Saturday`.
    pub fn weekdays(&self) -> &[usize; 7] {
        &self.weekdays
    }

    /// Month histogram, index 0 = month 1.
    pub fn months(&self) -> &[usize; 12] {
        &self.months
    }

    /// Number of lines with a parseable timestamp.
    pub fn total_lines(&self) -> usize {
        self.hours.iter().sum()
    }

    pub fn words(&self) -> &FrequencyCounter<String> {
        &self.words
    }

    pub fn emoji(&self) -> &FrequencyCounter<char> {
        &self.emoji
    }

    /// Timestamped lines per date label.
    pub fn messages_per_day(&self) -> &FrequencyCounter<String> {
        &self.messages_per_day
    }

    /// Media messages per date label.
    pub fn media_per_day(&self) -> &FrequencyCounter<String> {
        &self.media_per_day
    }

    pub fn creation(&self) -> Option<&GroupCreation> {
        self.creation.as_ref()
    }

    /// Rename events in transcript order.
    pub fn renames(&self) -> &[GroupRename] {
        &self.renames
    }

    /// Mean lines per day over days that have any.
    pub fn mean_per_day(&self) -> f64 {
        if self.messages_per_day.is_empty() {
            return 0.0;
        }
        self.total_lines() as f64 / self.messages_per_day.len() as f64
    }
}
