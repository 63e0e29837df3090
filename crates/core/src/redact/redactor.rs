//! Display names that keep a filename's structure but not its words.

use crate::patterns::{PatternMatch, classify, split_extension};

use super::fingerprint::fingerprint;

/// Replaces the title after a numbered prefix.
pub const REDACTED_TITLE: &str = "[Redacted Title]";

/// Render the privacy-safe display form of `filename`.
///
/// Dates, zettel ids and UUIDs are shown as-is. Numbered prefixes keep the
/// number and separator. Everything else becomes a fingerprint plus the
/// title's word count. The extension is always kept.
///
/// # Examples
/// ```
/// use vault_indexer_core::patterns::classify;
/// use vault_indexer_core::redact::redact;
///
/// let name = "001 - Project Plan.md";
/// assert_eq!(redact(name, &classify(name)), "001 - [Redacted Title].md");
/// ```
pub fn redact(filename: &str, matched: &PatternMatch) -> String {
    let (stem, ext) = split_extension(filename);

    match matched {
        PatternMatch::Zettelkasten
        | PatternMatch::DailyNote(_)
        | PatternMatch::WeeklyNote
        | PatternMatch::Uuid => filename.to_string(),
        PatternMatch::NumberedPrefix { prefix_len } => {
            // An out-of-range prefix must not leak the title.
            let prefix = stem.get(..*prefix_len).unwrap_or_default();
            format!("{prefix}{REDACTED_TITLE}{ext}")
        }
        PatternMatch::Standard { words } => {
            format!("[Note_{}] (~{words} words in title){ext}", fingerprint(stem))
        }
    }
}

/// Classify and redact in one step.
pub fn redact_filename(filename: &str) -> (PatternMatch, String) {
    let matched = classify(filename);
    let display = redact(filename, &matched);
    (matched, display)
}
