//! Command-line interface definition using clap.
//!
//! The binary takes only positional paths; nothing on the command line
//! changes what is analysed or how the report looks. Each path defaults to
//! the file name a bare run looks for in the working directory.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AnalyzerConfig, DEFAULT_BLOCKLIST, DEFAULT_STOPWORDS, DEFAULT_TRANSCRIPT};

/// Analyse an exported WhatsApp group chat: per-user counts, activity
/// histograms, word and emoji frequency, group timeline.
#[derive(Parser, Debug, Clone)]
#[command(name = "groupstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    groupstat
    groupstat chat.txt
    groupstat chat.txt bad_words.txt stop_words.txt
    RUST_LOG=debug groupstat chat.txt")]
pub struct Args {
    /// Exported chat transcript
    #[arg(default_value = DEFAULT_TRANSCRIPT)]
    pub transcript: PathBuf,

    /// Blocklist, one word per line (skipped if missing)
    #[arg(default_value = DEFAULT_BLOCKLIST)]
    pub blocklist: PathBuf,

    /// Stopword list, one word per line (skipped if missing)
    #[arg(default_value = DEFAULT_STOPWORDS)]
    pub stopwords: PathBuf,

    /// Diagnostic verbosity on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the analyser configuration from the parsed arguments.
    pub fn to_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new()
            .with_transcript(&self.transcript)
            .with_blocklist(&self.blocklist)
            .with_stopwords(&self.stopwords)
    }
}
