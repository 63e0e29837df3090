//! Filename naming-convention detection.
//!
//! Detection runs an ordered table of independent detectors against the
//! filename stem. The first detector that matches wins; when none does the
//! name is `standard`.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{DateLayout, PatternKind, PatternMatch};

type Detector = fn(&str) -> Option<PatternMatch>;

/// Detectors in priority order. Stricter shapes come first so that a loose
/// detector (numbered prefix) cannot swallow a date or an identifier.
const DETECTORS: [(PatternKind, Detector); 5] = [
    (PatternKind::Zettelkasten, detect_zettelkasten),
    (PatternKind::DailyNote, detect_daily_note),
    (PatternKind::WeeklyNote, detect_weekly_note),
    (PatternKind::Uuid, detect_uuid),
    (PatternKind::NumberedPrefix, detect_numbered_prefix),
];

// `[0-9]` rather than `\d`: the regex crate's `\d` also accepts non-ASCII digits.
static ZETTELKASTEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{14}$").unwrap());

static DAILY_RES: LazyLock<[(Regex, DateLayout); 3]> = LazyLock::new(|| {
    [
        (Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap(), DateLayout::IsoDashed),
        (Regex::new(r"^[0-9]{4}\.[0-9]{2}\.[0-9]{2}$").unwrap(), DateLayout::Dotted),
        (Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").unwrap(), DateLayout::MonthFirst),
    ]
});

static WEEKLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9]{4}-W[0-9]{2}$").unwrap());

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
    )
    .unwrap()
});

static NUMBERED_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Group 1 is the number plus separators; a title must follow.
    Regex::new(r"^([0-9]+[\s._-]+)[^\s._-]").unwrap()
});

/// Classify a filename by its naming convention.
///
/// Only the stem is inspected. Never fails: unmatched names are `standard`.
///
/// # Examples
/// ```
/// use vault_indexer_core::patterns::{classify, PatternKind};
///
/// assert_eq!(classify("2024-01-15.md").kind(), PatternKind::DailyNote);
/// assert_eq!(classify("001 - Project Plan.md").kind(), PatternKind::NumberedPrefix);
/// assert_eq!(classify("Meeting notes.md").kind(), PatternKind::Standard);
/// ```
pub fn classify(filename: &str) -> PatternMatch {
    let (stem, _) = split_extension(filename);

    DETECTORS
        .iter()
        .find_map(|(kind, detect)| {
            let matched = detect(stem)?;
            debug_assert_eq!(matched.kind(), *kind);
            Some(matched)
        })
        .unwrap_or(PatternMatch::Standard { words: count_words(stem) })
}

/// Split a filename into `(stem, extension)`, the extension keeping its dot.
///
/// The extension starts at the last `.`; a leading dot or a trailing dot does
/// not start one.
///
/// ```
/// use vault_indexer_core::patterns::split_extension;
///
/// assert_eq!(split_extension("notes.md"), ("notes", ".md"));
/// assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(split_extension(".hidden"), (".hidden", ""));
/// assert_eq!(split_extension("README"), ("README", ""));
/// ```
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < filename.len() => filename.split_at(idx),
        _ => (filename, ""),
    }
}

/// Number of whitespace-separated words in a title.
pub fn count_words(stem: &str) -> usize {
    stem.split_whitespace().count()
}

fn detect_zettelkasten(stem: &str) -> Option<PatternMatch> {
    ZETTELKASTEN_RE.is_match(stem).then_some(PatternMatch::Zettelkasten)
}

fn detect_daily_note(stem: &str) -> Option<PatternMatch> {
    DAILY_RES
        .iter()
        .find(|(re, _)| re.is_match(stem))
        .map(|(_, layout)| PatternMatch::DailyNote(*layout))
}

fn detect_weekly_note(stem: &str) -> Option<PatternMatch> {
    WEEKLY_RE.is_match(stem).then_some(PatternMatch::WeeklyNote)
}

fn detect_uuid(stem: &str) -> Option<PatternMatch> {
    UUID_RE.is_match(stem).then_some(PatternMatch::Uuid)
}

fn detect_numbered_prefix(stem: &str) -> Option<PatternMatch> {
    let prefix = NUMBERED_PREFIX_RE.captures(stem)?.get(1)?;
    Some(PatternMatch::NumberedPrefix { prefix_len: prefix.end() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("20240115143022.md", PatternKind::Zettelkasten)]
    #[case("2024-01-15.md", PatternKind::DailyNote)]
    #[case("2024.01.15.md", PatternKind::DailyNote)]
    #[case("01-15-2024.md", PatternKind::DailyNote)]
    #[case("2024-W03.md", PatternKind::WeeklyNote)]
    #[case("2024-w03.md", PatternKind::WeeklyNote)]
    #[case("123e4567-e89b-12d3-a456-426614174000.md", PatternKind::Uuid)]
    #[case("123E4567-E89B-12D3-A456-426614174000.md", PatternKind::Uuid)]
    #[case("001 - Project Plan.md", PatternKind::NumberedPrefix)]
    #[case("12.Reading list.md", PatternKind::NumberedPrefix)]
    #[case("3_drafts.md", PatternKind::NumberedPrefix)]
    #[case("My Therapy Notes.md", PatternKind::Standard)]
    #[case("README", PatternKind::Standard)]
    fn test_classify_kinds(#[case] filename: &str, #[case] expected: PatternKind) {
        assert_eq!(classify(filename).kind(), expected);
    }

    #[test]
    fn test_each_detector_in_isolation() {
        assert_eq!(detect_zettelkasten("20240115143022"), Some(PatternMatch::Zettelkasten));
        assert_eq!(detect_zettelkasten("2024011514302"), None);
        assert_eq!(
            detect_daily_note("2024.01.15"),
            Some(PatternMatch::DailyNote(DateLayout::Dotted))
        );
        assert_eq!(detect_daily_note("2024-1-15"), None);
        assert_eq!(detect_weekly_note("2024-W3"), None);
        assert_eq!(detect_uuid("123e4567-e89b-12d3-a456-42661417400g"), None);
        assert_eq!(detect_numbered_prefix("001 - "), None);
        assert_eq!(detect_numbered_prefix("001Plan"), None);
    }

    #[test]
    fn test_zettelkasten_beats_numbered_and_standard() {
        // 14 digits with no separator never reaches the prefix detector, but
        // a zettel id followed by a title does.
        assert_eq!(classify("20240115143022.md"), PatternMatch::Zettelkasten);
        assert_eq!(
            classify("20240115143022 Idea.md").kind(),
            PatternKind::NumberedPrefix
        );
    }

    #[test]
    fn test_daily_beats_numbered_prefix() {
        // "2024-01-15" also looks like "2024" + "-" + "01-15".
        assert!(detect_numbered_prefix("2024-01-15").is_some());
        assert_eq!(
            classify("2024-01-15.md"),
            PatternMatch::DailyNote(DateLayout::IsoDashed)
        );
        assert_eq!(
            classify("01-15-2024.md"),
            PatternMatch::DailyNote(DateLayout::MonthFirst)
        );
    }

    #[test]
    fn test_weekly_beats_numbered_prefix() {
        assert!(detect_numbered_prefix("2024-W03").is_some());
        assert_eq!(classify("2024-W03.md"), PatternMatch::WeeklyNote);
    }

    #[test]
    fn test_uuid_beats_numbered_prefix() {
        let stem = "12345678-1234-1234-1234-123456789abc";
        assert!(detect_numbered_prefix(stem).is_some());
        assert_eq!(classify(&format!("{stem}.md")), PatternMatch::Uuid);
    }

    #[test]
    fn test_zettelkasten_daily_weekly_uuid_are_disjoint() {
        let samples = [
            "20240115143022",
            "2024-01-15",
            "2024-W03",
            "123e4567-e89b-12d3-a456-426614174000",
        ];
        for stem in samples {
            let hits = DETECTORS
                .iter()
                .take(4)
                .filter(|(_, detect)| detect(stem).is_some())
                .count();
            assert_eq!(hits, 1, "{stem} should match exactly one strict detector");
        }
    }

    #[test]
    fn test_numbered_prefix_length_covers_separators() {
        assert_eq!(
            classify("001 - Project Plan.md"),
            PatternMatch::NumberedPrefix { prefix_len: 6 }
        );
        assert_eq!(
            classify("7.Inbox.md"),
            PatternMatch::NumberedPrefix { prefix_len: 2 }
        );
    }

    #[test]
    fn test_year_then_title_is_numbered_prefix() {
        assert_eq!(
            classify("2024 Plan.md"),
            PatternMatch::NumberedPrefix { prefix_len: 5 }
        );
    }

    #[test]
    fn test_standard_counts_words_in_stem() {
        assert_eq!(
            classify("My Therapy Notes.md"),
            PatternMatch::Standard { words: 3 }
        );
        assert_eq!(classify("  spaced   out  .md"), PatternMatch::Standard { words: 2 });
        assert_eq!(classify("photo.final.png"), PatternMatch::Standard { words: 1 });
    }

    #[test]
    fn test_extension_is_ignored() {
        assert_eq!(classify("2024-01-15.canvas").kind(), PatternKind::DailyNote);
        assert_eq!(classify("2024-01-15").kind(), PatternKind::DailyNote);
    }

    #[test]
    fn test_non_ascii_digits_are_not_dates() {
        // Arabic-Indic digits
        assert_eq!(classify("٢٠٢٤-٠١-١٥.md").kind(), PatternKind::Standard);
    }

    #[test]
    fn test_detector_table_reports_its_own_kind() {
        let hits = [
            "20240115143022",
            "2024-01-15",
            "2024-W03",
            "123e4567-e89b-12d3-a456-426614174000",
            "001 - Plan",
        ];
        for ((kind, detect), stem) in DETECTORS.iter().zip(hits) {
            assert_eq!(detect(stem).map(|m| m.kind()), Some(*kind), "{stem}");
        }
    }
}
