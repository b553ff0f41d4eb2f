//! Transcript line splitting and timestamp parsing.
//!
//! An Android-style WhatsApp export line looks like
//! `11/4/20, 9:53 AM - Alice: Hello`. The timestamp is everything before the
//! first `" - "`; its encoding depends on the phone's locale, so four
//! patterns are tried in a fixed order and the first that parses wins.

use chrono::NaiveDateTime;

/// Token separating the timestamp from the payload.
pub const LINE_SEPARATOR: &str = " - ";

/// Timestamp encodings seen in exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `11/4/20, 9:53 AM`
    MonthDay12h,
    /// `4/11/20, 9:53 AM`
    DayMonth12h,
    /// `11/4/20, 21:53`
    MonthDay24h,
    /// `4/11/20, 21:53`
    DayMonth24h,
}

impl TimestampFormat {
    /// Every format in trial order.
    ///
    /// Month/day is tried before day/month, so `3/4/21` means March 4th.
    pub fn all() -> &'static [TimestampFormat] {
        &[
            TimestampFormat::MonthDay12h,
            TimestampFormat::DayMonth12h,
            TimestampFormat::MonthDay24h,
            TimestampFormat::DayMonth24h,
        ]
    }

    /// Returns the chrono format string.
    pub fn pattern(self) -> &'static str {
        match self {
            TimestampFormat::MonthDay12h => "%m/%d/%y, %I:%M %p",
            TimestampFormat::DayMonth12h => "%d/%m/%y, %I:%M %p",
            TimestampFormat::MonthDay24h => "%m/%d/%y, %H:%M",
            TimestampFormat::DayMonth24h => "%d/%m/%y, %H:%M",
        }
    }

    /// Parses `raw` with this format only.
    pub fn parse(self, raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, self.pattern()).ok()
    }
}

/// Splits a raw line at the first [`LINE_SEPARATOR`].
///
/// Returns `None` for lines without one, which covers the continuation lines
/// of multi-line messages.
pub fn split_line(raw: &str) -> Option<(&str, &str)> {
    raw.split_once(LINE_SEPARATOR)
}

/// Parses a raw timestamp, trying every [`TimestampFormat`] in order.
///
/// Newer exports put a narrow no-break space before the meridiem; it is
/// read as a plain space. Returns `None` if no format matches.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    let normalized;
    let raw = if raw.contains(['\u{202F}', '\u{00A0}']) {
        normalized = raw.replace(['\u{202F}', '\u{00A0}'], " ");
        normalized.as_str()
    } else {
        raw
    };

    TimestampFormat::all()
        .iter()
        .find_map(|format| format.parse(raw))
}
