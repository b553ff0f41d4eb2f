//! # groupstat
//!
//! Descriptive analytics for exported WhatsApp group chats.
//!
//! ## Overview
//!
//! An Android-style export is one line per message or system event:
//!
//! ```text
//! 11/4/20, 9:50 AM - Alice created group "Book Club"
//! 11/4/20, 9:53 AM - Alice: Hello world 😀
//! 11/4/20, 9:54 AM - Bob: <Media omitted>
//! ```
//!
//! groupstat reads the whole file, classifies each line, and reports
//! per-user counts (messages, media, deletions, blocked words, average
//! length), the group's creation and rename history, daily totals,
//! hour/weekday/month histograms and the most frequent words and emoji.
//! Dates are shown in the solar-Hijri calendar when the `jalali` feature is
//! on, Gregorian otherwise.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use groupstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = AnalyzerConfig::new().with_transcript("chat.txt");
//!     let mut inputs = load_inputs(&config)?;
//!
//!     let analyzer = Analyzer::from_inputs(&config, &mut inputs, Capabilities::detect())?;
//!     let stats = analyzer.analyze_lines(&inputs.lines);
//!
//!     print!("{}", analyzer.report(&stats));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`loader`] — transcript and word-list loading
//! - [`parsing`] — timestamp split, line classification, body inspection
//! - [`calendar`] — [`Calendar`](calendar::Calendar) strategies (Jalali, Gregorian)
//! - [`emoji`] — [`EmojiDetector`](emoji::EmojiDetector) strategies
//! - [`capabilities`] — startup selection of the strategies
//! - [`core`] — aggregation ([`ChatStats`](core::ChatStats)), pipeline
//!   ([`Analyzer`](core::Analyzer)) and report rendering
//! - [`config`] — [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`error`] — [`GroupstatError`], [`Result`]
//! - [`logging`] — tracing subscriber setup

pub mod calendar;
pub mod capabilities;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod emoji;
pub mod error;
pub mod loader;
pub mod logging;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{GroupstatError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use groupstat::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{GroupstatError, Result};

    // Configuration and inputs
    pub use crate::config::AnalyzerConfig;
    pub use crate::loader::{Inputs, load_inputs};

    // Strategies
    pub use crate::calendar::{Calendar, DateLabel, GregorianCalendar};
    pub use crate::capabilities::Capabilities;
    pub use crate::emoji::{EmojiDetector, EmojiRange};

    // Pipeline and results
    pub use crate::core::{
        Analyzer, ChatStats, GroupCreation, GroupRename, UserStats, to_report, write_report,
    };
}
