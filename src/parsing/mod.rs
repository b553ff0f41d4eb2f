//! Line parsing: timestamp split, classification, body inspection.
//!
//! - [`timestamp`] — `" - "` split and the four timestamp encodings
//! - [`classify`] — ordered matchers turning a line into a [`Record`]
//! - [`message`] — media/deletion/blocklist/emoji detection and tokenizing

pub mod classify;
pub mod message;
pub mod timestamp;

// Re-export commonly used items
pub use classify::{Classifier, Matcher, Record};
pub use message::{MessageFeatures, MessageRules};
pub use timestamp::{LINE_SEPARATOR, TimestampFormat, parse_timestamp, split_line};
