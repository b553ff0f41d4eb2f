//! Text report rendering.
//!
//! Sections, in order: user table, group creation, rename history, overall
//! stats, hourly/weekday/monthly histograms, top words, top emoji. Rendering
//! only sorts and divides; every number comes from [`ChatStats`].

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::calendar::Calendar;
use crate::core::aggregator::ChatStats;

const WIDTH: usize = 100;
const NAME_WIDTH: usize = 22;

/// Presentation options for [`to_report`].
#[derive(Clone, Copy)]
pub struct ReportOptions<'a> {
    /// Calendar whose weekday names label the weekday histogram
    pub calendar: &'a dyn Calendar,
    /// Length of the word and emoji rankings
    pub top_n: usize,
}

/// Renders the full report as a string.
pub fn to_report(stats: &ChatStats, options: &ReportOptions<'_>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = render(&mut out, stats, options);
    out
}

/// Writes the full report to `writer`.
pub fn write_report<W: Write>(
    writer: &mut W,
    stats: &ChatStats,
    options: &ReportOptions<'_>,
) -> io::Result<()> {
    writer.write_all(to_report(stats, options).as_bytes())?;
    writer.flush()
}

fn render(out: &mut String, stats: &ChatStats, options: &ReportOptions<'_>) -> std::fmt::Result {
    let heavy = "═".repeat(WIDTH);
    let light = "─".repeat(WIDTH);

    // User table
    writeln!(out)?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "USER SUMMARY (sorted by messages)")?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<22} | {:>6} | {:>5} | {:>4} | {:>4} | {:>8} | {:>8}",
        "Name", "Msgs", "Media", "Del", "Bad", "AvgChars", "AvgWords"
    )?;
    writeln!(out, "{light}")?;
    for user in stats.users_by_messages() {
        let name: String = user.name.chars().take(NAME_WIDTH).collect();
        writeln!(
            out,
            "{:<22} | {:>6} | {:>5} | {:>4} | {:>4} | {:>8.1} | {:>8.1}",
            name,
            user.messages,
            user.media,
            user.deleted,
            user.blocked,
            user.avg_chars(),
            user.avg_words()
        )?;
    }
    writeln!(out, "{heavy}")?;

    // Group timeline
    if let Some(creation) = stats.creation() {
        writeln!(
            out,
            "Group created : {}  by {}  (name: {})",
            creation.date, creation.creator, creation.name
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Group Rename History:")?;
    if stats.renames().is_empty() {
        writeln!(out, "No renames detected.")?;
    } else {
        for rename in stats.renames() {
            writeln!(
                out,
                "🕒 {} | 👤 {} renamed → “{}” → “{}”",
                rename.date, rename.changer, rename.old_name, rename.new_name
            )?;
        }
    }

    // Overall stats
    let total = stats.total_lines();
    if total > 0 {
        let (media_day, media_count) = stats
            .media_per_day()
            .max()
            .map(|(day, n)| (day.as_str(), n))
            .unwrap_or(("-", 0));

        writeln!(out)?;
        writeln!(out, "Overall Message Stats:")?;
        writeln!(out, "Total messages : {total}")?;
        writeln!(out, "Day with most media : {media_day} ({media_count} files sent)")?;
        if let Some((day, n)) = stats.messages_per_day().max() {
            writeln!(out, "Most active day : {day} ({n} messages)")?;
        }
        if let Some((day, n)) = stats.messages_per_day().min() {
            writeln!(out, "Least active day: {day} ({n} messages)")?;
        }
        writeln!(out, "Average messages per day : {:.2}", stats.mean_per_day())?;
    }

    // Histograms
    writeln!(out)?;
    writeln!(out, "Hourly Distribution (0\u{2011}23):")?;
    for (hour, count) in stats.hours().iter().enumerate() {
        let end = if hour % 6 == 5 { "\n" } else { "  " };
        write!(out, "{hour:02}: {count}{end}")?;
    }

    writeln!(out)?;
    writeln!(out, "Weekday Distribution:")?;
    let names = options.calendar.weekday_names();
    for (name, count) in names.iter().zip(stats.weekdays()) {
        writeln!(out, "{name:<9}: {count}")?;
    }

    writeln!(out)?;
    writeln!(out, "Monthly Distribution:")?;
    for (idx, count) in stats.months().iter().enumerate() {
        writeln!(out, "{:02}: {count}", idx + 1)?;
    }

    // Rankings
    writeln!(out)?;
    writeln!(out, "Top {} words (ex stop words):", options.top_n)?;
    for (word, count) in stats.words().most_common(options.top_n) {
        writeln!(out, "{word:<10} {count}")?;
    }

    if !stats.emoji().is_empty() {
        writeln!(out)?;
        writeln!(out, "Top {} emojis:", options.top_n)?;
        for (emoji, count) in stats.emoji().most_common(options.top_n) {
            writeln!(out, "{emoji} {count}")?;
        }
    }
    writeln!(out, "{heavy}")?;

    Ok(())
}
