//! Email validation functions

use crate::input::{char_len, Input, Rule};

/// Validates basic email format
///
/// Checks for:
/// - Exactly one '@' symbol
/// - Content before and after '@'
/// - At least one '.' in the domain part
/// - A top level domain of two or more letters
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if domain.is_empty() || domain.len() > 255 || !domain.contains('.') {
        return false;
    }

    // Domain can't start or end with dot or hyphen
    if domain.starts_with('.') || domain.ends_with('.')
        || domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    if domain.contains("..") {
        return false;
    }

    let valid_local_chars = |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
    };

    if !local.chars().all(valid_local_chars) {
        return false;
    }

    let valid_domain_chars = |c: char| c.is_ascii_alphanumeric() || c == '.' || c == '-';

    if !domain.chars().all(valid_domain_chars) {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((_, tld)) => tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}

/// Checks an email field.
///
/// Presence is checked first, then shape, then `max_len`. A `max_len` of 0
/// means unlimited, which is what login uses.
pub fn check_email(input: Input<'_>, max_len: usize) -> Option<Rule> {
    if input.is_non_text() {
        return Some(Rule::NotText);
    }

    let Some(email) = input.present() else {
        return Some(Rule::Required);
    };

    if !is_valid_email(email) {
        return Some(Rule::Invalid);
    }

    if max_len > 0 && char_len(email) > max_len {
        return Some(Rule::Max(max_len));
    }

    None
}
