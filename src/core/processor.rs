use tracing::debug;

use crate::capabilities::Capabilities;
use crate::config::AnalyzerConfig;
use crate::core::aggregator::ChatStats;
use crate::core::models::{GroupCreation, GroupRename};
use crate::core::report::{ReportOptions, to_report};
use crate::error::Result;
use crate::loader::Inputs;
use crate::parsing::{Classifier, MessageRules, Record, parse_timestamp, split_line};

/// Line counts for one pass, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Lines seen
    pub lines: usize,
    /// Lines without the separator (continuations, blank lines)
    pub no_separator: usize,
    /// Lines whose timestamp matched no format
    pub bad_timestamp: usize,
    pub messages: usize,
    pub system_events: usize,
    pub unrecognized: usize,
}

/// Single-pass pipeline: split, parse, classify, aggregate.
///
/// # Example
///
/// ```rust
/// use groupstat::capabilities::Capabilities;
/// use groupstat::core::Analyzer;
///
/// let analyzer = Analyzer::with_defaults(Capabilities::degraded())?;
/// let stats = analyzer.analyze_str("11/4/20, 9:53 AM - Alice: Hello world");
/// assert_eq!(stats.user("Alice").unwrap().messages, 1);
/// # Ok::<(), groupstat::GroupstatError>(())
/// ```
pub struct Analyzer {
    classifier: Classifier,
    rules: MessageRules,
    capabilities: Capabilities,
    top_n: usize,
}

impl Analyzer {
    /// Creates an analyzer from a validated config, detection rules and the
    /// capabilities resolved at startup.
    pub fn new(
        config: &AnalyzerConfig,
        rules: MessageRules,
        capabilities: Capabilities,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: Classifier::with_unnamed_group(config.unnamed_group.clone())?,
            rules,
            capabilities,
            top_n: config.top_n,
        })
    }

    /// Creates an analyzer with default markers and no word lists.
    pub fn with_defaults(capabilities: Capabilities) -> Result<Self> {
        let config = AnalyzerConfig::default();
        let rules = MessageRules::from_config(&config, Default::default(), Default::default())?;
        Self::new(&config, rules, capabilities)
    }

    /// Creates an analyzer over loaded inputs, consuming their word lists.
    pub fn from_inputs(
        config: &AnalyzerConfig,
        inputs: &mut Inputs,
        capabilities: Capabilities,
    ) -> Result<Self> {
        let rules = MessageRules::from_config(
            config,
            std::mem::take(&mut inputs.blocklist),
            std::mem::take(&mut inputs.stopwords),
        )?;
        Self::new(config, rules, capabilities)
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Analyzes a whole transcript held in memory.
    pub fn analyze_str(&self, content: &str) -> ChatStats {
        self.analyze_lines(content.lines())
    }

    /// Analyzes transcript lines in order.
    pub fn analyze_lines<I, S>(&self, lines: I) -> ChatStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = ChatStats::new();
        let mut summary = PassSummary::default();
        for line in lines {
            self.process_line(line.as_ref(), &mut stats, &mut summary);
        }
        debug!(
            lines = summary.lines,
            no_separator = summary.no_separator,
            bad_timestamp = summary.bad_timestamp,
            messages = summary.messages,
            system_events = summary.system_events,
            unrecognized = summary.unrecognized,
            "transcript analyzed"
        );
        stats
    }

    /// Folds one raw line into `stats`.
    ///
    /// Lines without a separator or with an unparseable timestamp are
    /// dropped. Every other line counts towards the histograms before it is
    /// classified, including lines no matcher recognises.
    pub fn process_line(&self, line: &str, stats: &mut ChatStats, summary: &mut PassSummary) {
        summary.lines += 1;

        let Some((raw_ts, payload)) = split_line(line) else {
            summary.no_separator += 1;
            return;
        };
        let Some(at) = parse_timestamp(raw_ts) else {
            summary.bad_timestamp += 1;
            return;
        };

        let calendar = self.capabilities.calendar();
        let label = calendar.label(at.date());
        stats.record_line(at, &label);

        match self.classifier.classify(line, payload) {
            Record::UserMessage { sender, body } => {
                summary.messages += 1;
                let features = self.rules.inspect(body, self.capabilities.emoji());
                stats.record_message(sender, at, &label, features);
            }
            Record::GroupCreated { creator, name } => {
                summary.system_events += 1;
                stats.record_creation(GroupCreation {
                    date: label.text,
                    creator,
                    name,
                });
            }
            Record::GroupRenamed {
                at: renamed_at,
                changer,
                old_name,
                new_name,
            } => {
                summary.system_events += 1;
                stats.record_rename(GroupRename {
                    date: calendar.label(renamed_at.date()).text,
                    changer,
                    old_name,
                    new_name,
                });
            }
            Record::Unrecognized => summary.unrecognized += 1,
        }
    }

    /// Renders the report for `stats` with this run's calendar and ranking
    /// length.
    pub fn report(&self, stats: &ChatStats) -> String {
        to_report(stats, &self.report_options())
    }

    pub fn report_options(&self) -> ReportOptions<'_> {
        ReportOptions {
            calendar: self.capabilities.calendar(),
            top_n: self.top_n,
        }
    }
}
