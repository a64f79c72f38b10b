//! Calendar date validation

use chrono::NaiveDate;

use crate::input::{Input, Rule};

/// Parses a strict `YYYY-MM-DD` date if it names a real day.
///
/// The shape is checked first: chrono alone accepts `2024-1-01` and
/// years of any width.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let strict = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !strict {
        return None;
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Optional ISO-8601 calendar date (birthday).
pub fn check_iso_date(input: Input<'_>) -> Option<Rule> {
    if input.is_non_text() {
        return Some(Rule::NotText);
    }
    match input.present() {
        Some(s) if parse_iso_date(s).is_none() => Some(Rule::InvalidDate),
        _ => None,
    }
}
