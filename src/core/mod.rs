//! Core processing logic for groupstat.
//!
//! This module contains:
//! - [`models`] - Per-user and group records
//! - [`counter`] - Insertion-ordered frequency counter
//! - [`aggregator`] - [`ChatStats`], the accumulator for a run
//! - [`processor`] - [`Analyzer`], the single-pass pipeline
//! - [`report`] - Text report rendering
//!
//! # Quick Start
//!
//! ```rust
//! use groupstat::capabilities::Capabilities;
//! use groupstat::core::Analyzer;
//!
//! let analyzer = Analyzer::with_defaults(Capabilities::detect())?;
//! let stats = analyzer.analyze_str("11/4/20, 21:53 - Bob: see you 👋");
//! println!("{}", analyzer.report(&stats));
//! # Ok::<(), groupstat::GroupstatError>(())
//! ```

pub mod aggregator;
pub mod counter;
pub mod models;
pub mod processor;
pub mod report;

// Re-export main types for convenience
pub use aggregator::ChatStats;
pub use counter::FrequencyCounter;
pub use models::{GroupCreation, GroupRename, UserStats};
pub use processor::{Analyzer, PassSummary};
pub use report::{ReportOptions, to_report, write_report};
