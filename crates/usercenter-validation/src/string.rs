//! String validation functions

use crate::input::{char_len, Input, Rule};

fn check_max(s: &str, max_len: usize) -> Option<Rule> {
    if max_len > 0 && char_len(s) > max_len {
        Some(Rule::Max(max_len))
    } else {
        None
    }
}

/// Required text with an optional ceiling (0 = unlimited)
pub fn check_required_text(input: Input<'_>, max_len: usize) -> Option<Rule> {
    if input.is_non_text() {
        return Some(Rule::NotText);
    }
    match input.present() {
        Some(s) => check_max(s, max_len),
        None => Some(Rule::Required),
    }
}

/// Optional text. Missing or blank passes; the caller stores it as null.
pub fn check_optional_text(input: Input<'_>, max_len: usize) -> Option<Rule> {
    if input.is_non_text() {
        return Some(Rule::NotText);
    }
    input.present().and_then(|s| check_max(s, max_len))
}

/// Optional value restricted to a fixed set, compared exactly.
pub fn check_one_of(input: Input<'_>, allowed: &[&str]) -> Option<Rule> {
    if input.is_non_text() {
        return Some(Rule::NotText);
    }
    match input.present() {
        Some(s) if !allowed.contains(&s) => Some(Rule::NotAllowed),
        _ => None,
    }
}

fn as_text(input: Input<'_>) -> Option<&str> {
    match input {
        Input::Text(s) => Some(s),
        Input::Missing => Some(""),
        Input::NonText => None,
    }
}

/// The confirmation must equal its primary value.
///
/// A missing confirmation compares as empty text, so an empty confirmation
/// against a filled-in password is a mismatch rather than a second
/// "required" message.
pub fn check_confirmation(input: Input<'_>, primary: Input<'_>) -> Option<Rule> {
    let Some(value) = as_text(input) else {
        return Some(Rule::NotText);
    };

    match as_text(primary) {
        Some(primary) if primary == value => None,
        _ => Some(Rule::Mismatched),
    }
}
