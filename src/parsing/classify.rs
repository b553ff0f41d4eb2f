//! Line classification.
//!
//! After the timestamp is split off, the payload is matched against an
//! ordered list of [`Matcher`]s. The first one that accepts the line decides
//! its [`Record`]; the order is part of the contract:
//!
//! 1. [`Matcher::UserMessage`]: `sender: body`, non-empty sender
//! 2. [`Matcher::GroupCreated`]: `Alice created group "Name"`
//! 3. [`Matcher::GroupRenamed`]: matched on the *whole* raw line, since the
//!    rename pattern carries its own timestamp before the separator
//!
//! Anything else is [`Record::Unrecognized`] and dropped by the caller.

use chrono::NaiveDateTime;
use regex::Regex;

use crate::config::UNNAMED_GROUP;
use crate::error::{GroupstatError, Result};
use crate::parsing::timestamp::parse_timestamp;

const CREATED_PATTERN: &str = r#"(?i)^(.+?) created (?:group|this group) "?(.*?)"?$"#;
const RENAMED_PATTERN: &str =
    r#"(?i)^(.*?) - (.+?) changed the group name from "(.+?)" to "(.+?)""#;

/// A classified transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<'a> {
    /// A participant's message.
    UserMessage {
        /// Trimmed sender display name
        sender: &'a str,
        /// Trimmed message body
        body: &'a str,
    },
    /// The group creation event.
    GroupCreated {
        creator: String,
        /// Group name, or the configured placeholder when none was given
        name: String,
    },
    /// A group rename event.
    GroupRenamed {
        /// Timestamp captured by the rename pattern itself
        at: NaiveDateTime,
        changer: String,
        old_name: String,
        new_name: String,
    },
    /// No matcher accepted the line.
    Unrecognized,
}

impl Record<'_> {
    /// Short name of the record kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Record::UserMessage { .. } => "message",
            Record::GroupCreated { .. } => "group-created",
            Record::GroupRenamed { .. } => "group-renamed",
            Record::Unrecognized => "unrecognized",
        }
    }
}

/// Classification rules, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    UserMessage,
    GroupCreated,
    GroupRenamed,
}

impl Matcher {
    /// Matchers in the order they are tried.
    pub const ORDER: [Matcher; 3] = [
        Matcher::UserMessage,
        Matcher::GroupCreated,
        Matcher::GroupRenamed,
    ];
}

/// Classifies `(line, payload)` pairs into [`Record`]s.
#[derive(Debug, Clone)]
pub struct Classifier {
    created: Regex,
    renamed: Regex,
    unnamed_group: String,
}

impl Classifier {
    /// Creates a classifier with the default placeholder group name.
    pub fn new() -> Result<Self> {
        Self::with_unnamed_group(UNNAMED_GROUP)
    }

    /// Creates a classifier that names anonymous groups `unnamed_group`.
    pub fn with_unnamed_group(unnamed_group: impl Into<String>) -> Result<Self> {
        let created = Regex::new(CREATED_PATTERN)
            .map_err(|e| GroupstatError::invalid_pattern("group-created", e))?;
        let renamed = Regex::new(RENAMED_PATTERN)
            .map_err(|e| GroupstatError::invalid_pattern("group-renamed", e))?;

        Ok(Self {
            created,
            renamed,
            unnamed_group: unnamed_group.into(),
        })
    }

    /// Classifies one line.
    ///
    /// `line` is the raw transcript line, `payload` the part after its
    /// timestamp.
    pub fn classify<'a>(&self, line: &'a str, payload: &'a str) -> Record<'a> {
        Matcher::ORDER
            .iter()
            .find_map(|&matcher| self.try_match(matcher, line, payload))
            .unwrap_or(Record::Unrecognized)
    }

    /// Applies a single matcher.
    pub fn try_match<'a>(
        &self,
        matcher: Matcher,
        line: &'a str,
        payload: &'a str,
    ) -> Option<Record<'a>> {
        match matcher {
            Matcher::UserMessage => {
                let (sender, body) = payload.split_once(':')?;
                let sender = sender.trim();
                if sender.is_empty() {
                    return None;
                }
                Some(Record::UserMessage {
                    sender,
                    body: body.trim(),
                })
            }
            Matcher::GroupCreated => {
                let caps = self.created.captures(payload)?;
                let creator = caps.get(1).map_or("", |m| m.as_str().trim());
                let name = caps.get(2).map_or("", |m| m.as_str().trim());
                let name = if name.is_empty() {
                    self.unnamed_group.clone()
                } else {
                    name.to_string()
                };
                Some(Record::GroupCreated {
                    creator: creator.to_string(),
                    name,
                })
            }
            Matcher::GroupRenamed => {
                let caps = self.renamed.captures(line)?;
                let at = parse_timestamp(caps.get(1).map_or("", |m| m.as_str()))?;
                let field = |i: usize| caps.get(i).map_or("", |m| m.as_str().trim()).to_string();
                Some(Record::GroupRenamed {
                    at,
                    changer: field(2),
                    old_name: field(3),
                    new_name: field(4),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::timestamp::split_line;

    fn classify(line: &str) -> Record<'_> {
        let classifier = Classifier::new().unwrap();
        let (_, payload) = split_line(line).unwrap();
        classifier.classify(line, payload)
    }

    #[test]
    fn test_user_message() {
        let record = classify("11/4/20, 9:53 AM - Alice: Hello world 😀");
        assert_eq!(
            record,
            Record::UserMessage {
                sender: "Alice",
                body: "Hello world 😀"
            }
        );
        assert_eq!(record.kind(), "message");
    }

    #[test]
    fn test_user_message_splits_at_first_colon() {
        let record = classify("11/4/20, 9:53 AM - Bob: meet at 10:30: ok?");
        assert_eq!(
            record,
            Record::UserMessage {
                sender: "Bob",
                body: "meet at 10:30: ok?"
            }
        );
    }

    #[test]
    fn test_empty_body_is_still_a_message() {
        let record = classify("11/4/20, 9:53 AM - Bob:");
        assert_eq!(record, Record::UserMessage { sender: "Bob", body: "" });
    }

    #[test]
    fn test_group_created_with_name() {
        let record = classify(r#"11/4/20, 9:50 AM - Alice created group "Book Club""#);
        assert_eq!(
            record,
            Record::GroupCreated {
                creator: "Alice".to_string(),
                name: "Book Club".to_string()
            }
        );
    }

    #[test]
    fn test_group_created_this_group_case_insensitive() {
        let record = classify(r#"11/4/20, 9:50 AM - +98 912 000 0000 CREATED THIS GROUP "Family""#);
        assert_eq!(
            record,
            Record::GroupCreated {
                creator: "+98 912 000 0000".to_string(),
                name: "Family".to_string()
            }
        );
    }

    #[test]
    fn test_group_created_empty_name_uses_placeholder() {
        let record = classify(r#"11/4/20, 9:50 AM - Alice created group """#);
        assert_eq!(
            record,
            Record::GroupCreated {
                creator: "Alice".to_string(),
                name: "(unnamed)".to_string()
            }
        );
    }

    #[test]
    fn test_group_created_custom_placeholder() {
        let classifier = Classifier::with_unnamed_group("-").unwrap();
        let line = "11/4/20, 9:50 AM - Alice created group";
        let (_, payload) = split_line(line).unwrap();
        // No trailing space after "group": the pattern needs one
        assert_eq!(classifier.classify(line, payload), Record::Unrecognized);

        let line = "11/4/20, 9:50 AM - Alice created group ";
        let (_, payload) = split_line(line).unwrap();
        assert_eq!(
            classifier.classify(line, payload),
            Record::GroupCreated {
                creator: "Alice".to_string(),
                name: "-".to_string()
            }
        );
    }

    #[test]
    fn test_group_renamed_uses_whole_line() {
        let record = classify(
            r#"12/1/20, 8:00 PM - Bob changed the group name from "Book Club" to "Readers""#,
        );
        match record {
            Record::GroupRenamed {
                at,
                changer,
                old_name,
                new_name,
            } => {
                assert_eq!(at.to_string(), "2020-12-01 20:00:00");
                assert_eq!(changer, "Bob");
                assert_eq!(old_name, "Book Club");
                assert_eq!(new_name, "Readers");
            }
            other => panic!("expected rename, got {other:?}"),
        }
    }

    #[test]
    fn test_colon_in_payload_wins_over_system_patterns() {
        // A colon inside the quoted name makes the line a "message"
        let record =
            classify(r#"12/1/20, 8:00 PM - Bob changed the group name from "A" to "B: C""#);
        assert_eq!(record.kind(), "message");
    }

    #[test]
    fn test_blank_sender_falls_through_to_system_patterns() {
        let record = classify("11/4/20, 9:53 AM -  : hi");
        assert_eq!(record, Record::Unrecognized);
    }

    #[test]
    fn test_unrecognized_system_event() {
        let record = classify("11/4/20, 9:53 AM - Alice added Bob");
        assert_eq!(record, Record::Unrecognized);
        assert_eq!(record.kind(), "unrecognized");
    }

    #[test]
    fn test_matcher_order() {
        assert_eq!(
            Matcher::ORDER,
            [
                Matcher::UserMessage,
                Matcher::GroupCreated,
                Matcher::GroupRenamed
            ]
        );
    }

    #[test]
    fn test_try_match_individually() {
        let classifier = Classifier::new().unwrap();
        let line = r#"11/4/20, 9:50 AM - Alice created group "X""#;
        let (_, payload) = split_line(line).unwrap();
        assert!(classifier.try_match(Matcher::UserMessage, line, payload).is_none());
        assert!(classifier.try_match(Matcher::GroupRenamed, line, payload).is_none());
        assert!(classifier.try_match(Matcher::GroupCreated, line, payload).is_some());
    }
}
