//! Integration tests for the full load → analyze → report pipeline.

use std::fs;

use groupstat::prelude::*;
use tempfile::{TempDir, tempdir};

const TRANSCRIPT: &str = "\u{FEFF}11/4/20, 9:50 AM - Alice created group \"Book Club\"
11/4/20, 9:53 AM - Alice: Hello world 😀
11/4/20, 9:54\u{202F}AM - Bob: <Media omitted>
second line of Bob's message
11/5/20, 10:15 PM - Carol: This message was deleted
11/5/20, 10:16 PM - Bob: what a badword day
12/1/20, 20:00 - Bob changed the group name from \"Book Club\" to \"Readers\"
12/1/20, 20:05 - Alice added Dave
";

struct Fixture {
    _dir: TempDir,
    config: AnalyzerConfig,
}

fn fixture() -> Fixture {
    let dir = tempdir().unwrap();
    let transcript = dir.path().join("chat.txt");
    let blocklist = dir.path().join("bad_words.txt");
    let stopwords = dir.path().join("stop_words.txt");

    fs::write(&transcript, TRANSCRIPT).unwrap();
    fs::write(&blocklist, "badword\n\n   \n").unwrap();
    fs::write(&stopwords, "Hello\nthe\n").unwrap();

    let config = AnalyzerConfig::new()
        .with_transcript(transcript)
        .with_blocklist(blocklist)
        .with_stopwords(stopwords);
    Fixture { _dir: dir, config }
}

fn gregorian() -> Capabilities {
    Capabilities::new(Box::new(GregorianCalendar), Box::new(EmojiRange))
}

fn run(config: &AnalyzerConfig, capabilities: Capabilities) -> (Analyzer, ChatStats) {
    let mut inputs = load_inputs(config).unwrap();
    let analyzer = Analyzer::from_inputs(config, &mut inputs, capabilities).unwrap();
    let stats = analyzer.analyze_lines(&inputs.lines);
    (analyzer, stats)
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn test_load_inputs() {
    let fx = fixture();
    let inputs = load_inputs(&fx.config).unwrap();

    assert_eq!(inputs.lines.len(), 8);
    assert!(inputs.lines[0].starts_with("11/4/20"), "BOM must be stripped");
    assert_eq!(inputs.blocklist.len(), 1);
    assert!(inputs.stopwords.contains("hello"));
}

#[test]
fn test_missing_transcript_is_fatal() {
    let dir = tempdir().unwrap();
    let config = AnalyzerConfig::new().with_transcript(dir.path().join("nope.txt"));
    let err = load_inputs(&config).unwrap_err();
    assert!(err.is_transcript_not_found());
    assert!(err.to_string().starts_with("Chat file not found"));
}

#[test]
fn test_missing_word_lists_are_empty() {
    let fx = fixture();
    let dir = tempdir().unwrap();
    let config = fx
        .config
        .clone()
        .with_blocklist(dir.path().join("missing_bad.txt"))
        .with_stopwords(dir.path().join("missing_stop.txt"));

    let (_, stats) = run(&config, gregorian());
    assert_eq!(stats.user("Bob").unwrap().blocked, 0);
    assert_eq!(stats.words().get(&"hello".to_string()), 1);
}

// =========================================================================
// Aggregation
// =========================================================================

#[test]
fn test_per_user_counts() {
    let fx = fixture();
    let (_, stats) = run(&fx.config, gregorian());

    let alice = stats.user("Alice").unwrap();
    assert_eq!(alice.messages, 1);
    assert_eq!(alice.char_sum, 13);
    assert_eq!(alice.word_sum, 3);

    let bob = stats.user("Bob").unwrap();
    assert_eq!(bob.messages, 2);
    assert_eq!(bob.media, 1);
    assert_eq!(bob.blocked, 1);

    let carol = stats.user("Carol").unwrap();
    assert_eq!(carol.deleted, 1);

    // System events never create users
    assert!(stats.user("Dave").is_none());
    assert_eq!(stats.users().len(), 3);

    let order: Vec<_> = stats
        .users_by_messages()
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(order, vec!["Bob", "Alice", "Carol"]);
}

#[test]
fn test_histograms_share_one_total() {
    let fx = fixture();
    let (_, stats) = run(&fx.config, gregorian());

    // Every line with a parseable timestamp, continuation excluded
    assert_eq!(stats.total_lines(), 7);
    assert_eq!(stats.weekdays().iter().sum::<usize>(), 7);
    assert_eq!(stats.months().iter().sum::<usize>(), 7);
    assert_eq!(stats.messages_per_day().total(), 7);

    assert_eq!(stats.hours()[9], 3);
    assert_eq!(stats.hours()[22], 2);
    assert_eq!(stats.hours()[20], 2);

    // 2020-11-04 Wed, 2020-11-05 Thu, 2020-12-01 Tue; Saturday is index 0
    assert_eq!(stats.weekdays()[4], 3);
    assert_eq!(stats.weekdays()[5], 2);
    assert_eq!(stats.weekdays()[3], 2);
    assert_eq!(stats.months()[10], 5);
    assert_eq!(stats.months()[11], 2);
}

#[test]
fn test_group_timeline() {
    let fx = fixture();
    let (_, stats) = run(&fx.config, gregorian());

    let creation = stats.creation().unwrap();
    assert_eq!(creation.creator, "Alice");
    assert_eq!(creation.name, "Book Club");
    assert_eq!(creation.date, "2020/11/04");

    assert_eq!(stats.renames().len(), 1);
    let rename = &stats.renames()[0];
    assert_eq!(rename.changer, "Bob");
    assert_eq!(rename.old_name, "Book Club");
    assert_eq!(rename.new_name, "Readers");
    assert_eq!(rename.date, "2020/12/01");
}

#[test]
fn test_stopwords_excluded_from_ranking() {
    let fx = fixture();
    let (_, stats) = run(&fx.config, gregorian());

    assert_eq!(stats.words().get(&"hello".to_string()), 0);
    assert_eq!(stats.words().get(&"world".to_string()), 1);
    assert_eq!(stats.emoji().get(&'😀'), 1);
}

// =========================================================================
// Report
// =========================================================================

#[test]
fn test_report_sections() {
    let fx = fixture();
    let (analyzer, stats) = run(&fx.config, gregorian());
    let report = analyzer.report(&stats);

    assert!(report.contains("USER SUMMARY (sorted by messages)"));
    assert!(report.contains("Group created : 2020/11/04  by Alice  (name: Book Club)"));
    assert!(report.contains("🕒 2020/12/01 | 👤 Bob renamed → “Book Club” → “Readers”"));
    assert!(report.contains("Total messages : 7"));
    assert!(report.contains("Day with most media : 2020/11/04 (1 files sent)"));
    assert!(report.contains("Most active day : 2020/11/04 (3 messages)"));
    assert!(report.contains("Least active day: 2020/11/05 (2 messages)"));
    assert!(report.contains("Average messages per day : 2.33"));
    assert!(report.contains("Wed      : 3"));
    assert!(report.contains("Top 20 words (ex stop words):"));
    assert!(report.contains("world      1"));
    assert!(report.contains("Top 20 emojis:"));
    assert!(report.contains("😀 1"));

    let user_table = report.find("Bob ").unwrap();
    let alice_row = report.find("Alice ").unwrap();
    assert!(user_table < alice_row);
}

#[test]
fn test_report_top_n() {
    let fx = fixture();
    let config = fx.config.clone().with_top_n(2);
    let (analyzer, stats) = run(&config, gregorian());
    let report = analyzer.report(&stats);

    assert!(report.contains("Top 2 words (ex stop words):"));
    let words_section = report
        .split("Top 2 words (ex stop words):\n")
        .nth(1)
        .unwrap();
    let ranked: Vec<_> = words_section.lines().take_while(|l| !l.is_empty()).collect();
    assert_eq!(ranked, vec!["world      1", "media      1"]);
}

#[test]
fn test_write_report_matches_to_report() {
    let fx = fixture();
    let (analyzer, stats) = run(&fx.config, gregorian());

    let mut buffer = Vec::new();
    write_report(&mut buffer, &stats, &analyzer.report_options()).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), analyzer.report(&stats));
}

#[test]
fn test_rerun_is_identical() {
    let fx = fixture();
    let (first_analyzer, first) = run(&fx.config, gregorian());
    let (second_analyzer, second) = run(&fx.config, gregorian());
    assert_eq!(first_analyzer.report(&first), second_analyzer.report(&second));
}

#[cfg(feature = "jalali")]
#[test]
fn test_jalali_labels() {
    use groupstat::calendar::JalaliCalendar;

    let fx = fixture();
    let capabilities = Capabilities::new(Box::new(JalaliCalendar), Box::new(EmojiRange));
    let (analyzer, stats) = run(&fx.config, capabilities);

    assert_eq!(stats.creation().unwrap().date, "1399/08/14");
    assert_eq!(stats.renames()[0].date, "1399/09/11");

    let report = analyzer.report(&stats);
    assert!(report.contains("Group created : 1399/08/14"));
    // Aban (8) and Azar (9) in the solar-Hijri calendar
    assert!(report.contains("08: 5"));
    assert!(report.contains("09: 2"));
}
