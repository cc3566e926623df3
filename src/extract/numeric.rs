//! Heuristic parsing of free-form duration and view-count strings
//!
//! Upstream hands these over as display text, not numbers. Both parsers
//! resolve anything unparsable to the `-1` sentinel rather than erroring,
//! since a video with an unknown length is still worth returning.

use regex::Regex;

use crate::models::UNKNOWN;

/// Parse a "MM:SS" or "HH:MM:SS" duration string into seconds
///
/// Any other shape, a non-numeric component, or empty input yields `-1`.
/// Component ranges are deliberately not validated; "99:99" parses to
/// 99*60+99 because upstream is the authority on what it emits.
pub fn parse_duration(text: &str) -> i64 {
    if text.is_empty() {
        return UNKNOWN;
    }

    let components: Option<Vec<i64>> = text
        .split(':')
        .map(|part| part.parse::<i64>().ok())
        .collect();

    match components.as_deref() {
        Some([minutes, seconds]) => minutes * 60 + seconds,
        Some([hours, minutes, seconds]) => hours * 3600 + minutes * 60 + seconds,
        _ => UNKNOWN,
    }
}

/// Parse a human view-count string into a count
///
/// Handles both abbreviated counts ("1.2M views") and grouped digits
/// ("5,234 views"). Magnitude suffixes are checked case-insensitively in
/// k → m → b order; the first match wins, which is the documented tie-break
/// for pathological input containing more than one suffix letter. Without a
/// suffix, dots are treated as thousands separators. Empty input or a parse
/// failure yields `-1`.
pub fn parse_view_count(text: &str) -> i64 {
    if text.is_empty() {
        return UNKNOWN;
    }

    let digits = Regex::new(r"[^0-9.]")
        .unwrap()
        .replace_all(text, "")
        .into_owned();
    let lower = text.to_lowercase();

    let magnitude = if lower.contains('k') {
        Some(1_000.0)
    } else if lower.contains('m') {
        Some(1_000_000.0)
    } else if lower.contains('b') {
        Some(1_000_000_000.0)
    } else {
        None
    };

    match magnitude {
        Some(factor) => digits
            .parse::<f64>()
            .map(|count| (count * factor) as i64)
            .unwrap_or(UNKNOWN),
        None => digits.replace('.', "").parse::<i64>().unwrap_or(UNKNOWN),
    }
}
