//! Password validation functions

use crate::input::{char_len, Input, Rule};

/// Upper bound applied to every password field, whatever the caller asks for
pub const PASSWORD_MAX_LEN: usize = 128;

/// Checks a password field.
///
/// `min_len` of 0 disables the minimum; login only needs the password to be
/// present since the upstream API decides whether it matches. The maximum is
/// always enforced.
///
/// This check measures the text it is given without trimming it, so a caller
/// building [`Input`] by hand keeps surrounding spaces in the count. Values
/// coming through the form layer are already trimmed. A whitespace-only
/// password counts as missing either way.
///
/// # Examples
/// ```
/// use usercenter_validation::{check_password, Input, Rule};
/// assert_eq!(check_password(Input::Text("abcdefgh"), 8), None);
/// assert_eq!(check_password(Input::Text("abc"), 8), Some(Rule::Min(8)));
/// assert_eq!(check_password(Input::Text("abc"), 0), None);
/// ```
pub fn check_password(input: Input<'_>, min_len: usize) -> Option<Rule> {
    let password = match input {
        Input::NonText => return Some(Rule::NotText),
        Input::Missing => return Some(Rule::Required),
        Input::Text(s) if s.trim().is_empty() => return Some(Rule::Required),
        Input::Text(s) => s,
    };

    let len = char_len(password);

    if min_len > 0 && len < min_len {
        return Some(Rule::Min(min_len));
    }

    if len > PASSWORD_MAX_LEN {
        return Some(Rule::Max(PASSWORD_MAX_LEN));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Input::Missing, 8, Some(Rule::Required))]
    #[case(Input::Text(""), 8, Some(Rule::Required))]
    #[case(Input::Text("  "), 0, Some(Rule::Required))]
    #[case(Input::NonText, 8, Some(Rule::NotText))]
    #[case(Input::Text("1234567"), 8, Some(Rule::Min(8)))]
    #[case(Input::Text("12345678"), 8, None)]
    #[case(Input::Text(" 123456 "), 8, None)]
    #[case(Input::Text("1"), 0, None)]
    fn test_check_password(
        #[case] input: Input<'static>,
        #[case] min_len: usize,
        #[case] expected: Option<Rule>,
    ) {
        assert_eq!(check_password(input, min_len), expected);
    }

    #[test]
    fn test_max_is_always_enforced() {
        let at_limit = "x".repeat(PASSWORD_MAX_LEN);
        let over = "x".repeat(PASSWORD_MAX_LEN + 1);

        assert_eq!(check_password(Input::Text(&at_limit), 8), None);
        assert_eq!(check_password(Input::Text(&over), 8), Some(Rule::Max(128)));
        // Login passes no minimum but still gets the ceiling
        assert_eq!(check_password(Input::Text(&over), 0), Some(Rule::Max(128)));
    }
}
