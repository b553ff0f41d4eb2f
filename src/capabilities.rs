//! Optional analytics capabilities, resolved once per run.
//!
//! The calendar and emoji strategies depend on which cargo features were
//! compiled in. [`Capabilities::detect`] picks the best available pair and
//! logs a single warning for each degraded capability; everything
//! downstream receives the strategies by reference and never checks features
//! itself.

use crate::calendar::{Calendar, GregorianCalendar};
use crate::emoji::{EmojiDetector, EmojiRange};

/// The calendar and emoji strategies in effect for a run.
pub struct Capabilities {
    calendar: Box<dyn Calendar>,
    emoji: Box<dyn EmojiDetector>,
}

impl Capabilities {
    /// Injects explicit strategies.
    pub fn new(calendar: Box<dyn Calendar>, emoji: Box<dyn EmojiDetector>) -> Self {
        Self { calendar, emoji }
    }

    /// Selects the best strategies compiled into this build, warning once per
    /// missing capability.
    pub fn detect() -> Self {
        Self::new(detect_calendar(), detect_emoji())
    }

    /// The lowest-fidelity pair: Gregorian dates, range-based emoji.
    pub fn degraded() -> Self {
        Self::new(Box::new(GregorianCalendar), Box::new(EmojiRange))
    }

    /// Active calendar strategy.
    pub fn calendar(&self) -> &dyn Calendar {
        self.calendar.as_ref()
    }

    /// Active emoji detector.
    pub fn emoji(&self) -> &dyn EmojiDetector {
        self.emoji.as_ref()
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("calendar", &self.calendar.name())
            .field("emoji", &self.emoji.name())
            .finish()
    }
}

#[cfg(feature = "jalali")]
fn detect_calendar() -> Box<dyn Calendar> {
    Box::new(crate::calendar::JalaliCalendar)
}

#[cfg(not(feature = "jalali"))]
fn detect_calendar() -> Box<dyn Calendar> {
    tracing::warn!("Jalali calendar support not compiled in; dates will stay Gregorian");
    Box::new(GregorianCalendar)
}

#[cfg(feature = "emoji-data")]
fn detect_emoji() -> Box<dyn EmojiDetector> {
    Box::new(crate::emoji::EmojiTable)
}

#[cfg(not(feature = "emoji-data"))]
fn detect_emoji() -> Box<dyn EmojiDetector> {
    tracing::warn!("emoji table not compiled in; emoji counts may be incomplete");
    Box::new(EmojiRange)
}
