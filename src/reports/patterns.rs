use regex::{Captures, Regex};

/// Tries an ordered list of pattern strategies and returns the first match.
///
/// Report layouts drift across tool versions, so each field is located by a
/// short sequence of tolerant patterns (summary table first, labeled-line
/// scraping as fallback) instead of one monolithic regex. New layout
/// variants are appended to the relevant list.
pub fn first_captures<'t>(patterns: &[&str], text: &'t str) -> Option<Captures<'t>> {
    for pattern in patterns {
        let re = Regex::new(pattern).unwrap();
        if let Some(caps) = re.captures(text) {
            return Some(caps);
        }
    }
    None
}

/// Like [`first_captures`] but returns the first capture group, trimmed.
pub fn first_capture<'t>(patterns: &[&str], text: &'t str) -> Option<&'t str> {
    first_captures(patterns, text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}
