//! Ordered-pattern matching shared by every field rule and the classifier.

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Compile raw pattern strings for matching against receipt text.
///
/// All patterns are case-insensitive and unanchored. A pattern that fails to
/// compile is logged and skipped rather than aborting configuration; the
/// remaining candidates for the rule stay usable.
pub fn compile_patterns(raw: &[&str]) -> Vec<Regex> {
    raw.iter().filter_map(|pattern| compile_pattern(pattern)).collect()
}

pub(crate) fn compile_pattern(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(error) => {
            warn!("skipping malformed pattern `{pattern}`: {error}");
            None
        }
    }
}

/// Return the first non-empty capture among ordered candidate patterns.
///
/// Patterns are tried strictly in the given order; the first one that
/// matches and whose first capture group trims to something non-empty wins,
/// and later candidates are not tried. A capture spanning multiple lines is
/// truncated to its first line: a mis-scoped pattern must not swallow the
/// following template lines.
pub fn first_match(text: &str, patterns: &[Regex]) -> Option<String> {
    for pattern in patterns {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        let Some(group) = caps.get(1) else {
            continue;
        };

        let mut value = group.as_str().trim();
        if let Some(first_line) = value.split('\n').next() {
            value = first_line.trim();
        }

        if !value.is_empty() {
            return Some(value.to_string());
        }
    }
    None
}
