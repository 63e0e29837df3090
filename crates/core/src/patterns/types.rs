//! Pattern kinds and classification results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Naming convention a filename was classified under.
///
/// Variants are declared in detection priority order, so the derived `Ord`
/// doubles as the tie-breaker when ranking tallies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// 14-digit `YYYYMMDDHHMMSS` identifier.
    Zettelkasten,
    /// Date-named daily journal note.
    DailyNote,
    /// ISO week note, e.g. `2024-W03`.
    WeeklyNote,
    /// Canonical 8-4-4-4-12 hex UUID.
    Uuid,
    /// Digits and a separator in front of a title, e.g. `001 - Plan`.
    NumberedPrefix,
    /// Anything else.
    Standard,
}

impl PatternKind {
    /// Every kind, in detection priority order.
    pub const ALL: [Self; 6] = [
        Self::Zettelkasten,
        Self::DailyNote,
        Self::WeeklyNote,
        Self::Uuid,
        Self::NumberedPrefix,
        Self::Standard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zettelkasten => "zettelkasten",
            Self::DailyNote => "daily_note",
            Self::WeeklyNote => "weekly_note",
            Self::Uuid => "uuid",
            Self::NumberedPrefix => "numbered_prefix",
            Self::Standard => "standard",
        }
    }

    /// Canonical filename showing the shape of this convention.
    pub fn format_example(&self) -> &'static str {
        match self {
            Self::Zettelkasten => "YYYYMMDDHHmmss.md",
            Self::DailyNote => "YYYY-MM-DD.md",
            Self::WeeklyNote => "YYYY-Www.md",
            Self::Uuid => "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx.md",
            Self::NumberedPrefix => "001 - Title.md",
            Self::Standard => "[Any title].md",
        }
    }

    /// Whether filenames of this kind are shown verbatim in reports.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Zettelkasten | Self::DailyNote | Self::WeeklyNote | Self::Uuid)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Date layouts accepted for daily notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DateLayout {
    /// `YYYY-MM-DD`
    IsoDashed,
    /// `YYYY.MM.DD`
    Dotted,
    /// `MM-DD-YYYY`
    MonthFirst,
}

impl DateLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IsoDashed => "YYYY-MM-DD",
            Self::Dotted => "YYYY.MM.DD",
            Self::MonthFirst => "MM-DD-YYYY",
        }
    }
}

/// Result of classifying one filename, with whatever the redactor needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternMatch {
    Zettelkasten,
    DailyNote(DateLayout),
    WeeklyNote,
    Uuid,
    /// `prefix_len` is the byte length of the digits and separators at the
    /// start of the stem.
    NumberedPrefix { prefix_len: usize },
    /// `words` is the whitespace-separated word count of the stem.
    Standard { words: usize },
}

impl PatternMatch {
    pub fn kind(&self) -> PatternKind {
        match self {
            Self::Zettelkasten => PatternKind::Zettelkasten,
            Self::DailyNote(_) => PatternKind::DailyNote,
            Self::WeeklyNote => PatternKind::WeeklyNote,
            Self::Uuid => PatternKind::Uuid,
            Self::NumberedPrefix { .. } => PatternKind::NumberedPrefix,
            Self::Standard { .. } => PatternKind::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_priority_order() {
        let mut sorted = PatternKind::ALL;
        sorted.sort();
        assert_eq!(sorted, PatternKind::ALL);
        assert_eq!(PatternKind::ALL.first(), Some(&PatternKind::Zettelkasten));
        assert_eq!(PatternKind::ALL.last(), Some(&PatternKind::Standard));
    }

    #[test]
    fn test_serde_names_match_display() {
        for kind in PatternKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_only_standard_and_numbered_are_hidden() {
        let hidden: Vec<_> =
            PatternKind::ALL.into_iter().filter(|k| !k.is_structural()).collect();
        assert_eq!(hidden, vec![PatternKind::NumberedPrefix, PatternKind::Standard]);
    }
}
