//! Raw input view and the rule vocabulary shared by every check

/// A single submitted value as the validators see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// The field was not submitted at all
    Missing,
    /// A string value, possibly untrimmed
    Text(&'a str),
    /// A value of some other JSON type (number, bool, object...)
    NonText,
}

impl<'a> Input<'a> {
    /// Trimmed text, treating whitespace-only text as absent.
    pub fn present(self) -> Option<&'a str> {
        match self {
            Input::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    Some(s)
                }
            }
            Input::Missing | Input::NonText => None,
        }
    }

    pub fn is_non_text(self) -> bool {
        matches!(self, Input::NonText)
    }
}

impl<'a> From<Option<&'a str>> for Input<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Input::Missing, Input::Text)
    }
}

/// A failed rule.
///
/// Renders as the `{validator}.{rule}` tail of a message code, e.g.
/// `any.required` or `string.max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Empty or missing where a value is required
    Required,
    /// Not a string at all
    NotText,
    /// Text that is not the right shape (email)
    Invalid,
    /// Shorter than the limit
    Min(usize),
    /// Longer than the limit
    Max(usize),
    /// Differs from the value it has to confirm
    Mismatched,
    /// Not one of the allowed values
    NotAllowed,
    /// Not a calendar date
    InvalidDate,
}

impl Rule {
    /// Validator family the rule belongs to
    pub fn kind(self) -> &'static str {
        match self {
            Rule::Required | Rule::Mismatched | Rule::NotAllowed => "any",
            Rule::NotText | Rule::Invalid | Rule::Min(_) | Rule::Max(_) => "string",
            Rule::InvalidDate => "date",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::NotText => "base",
            Rule::Invalid | Rule::InvalidDate => "invalid",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Mismatched => "mismatched",
            Rule::NotAllowed => "allowOnly",
        }
    }

    /// The length bound carried by `min`/`max`
    pub fn limit(self) -> Option<usize> {
        match self {
            Rule::Min(n) | Rule::Max(n) => Some(n),
            _ => None,
        }
    }
}

impl core::fmt::Display for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.kind(), self.name())
    }
}

/// Length in characters; CJK names count one per glyph.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_present_trims() {
        assert_eq!(Input::Text("  a@b.com ").present(), Some("a@b.com"));
        assert_eq!(Input::Text(" \t ").present(), None);
        assert_eq!(Input::Missing.present(), None);
        assert_eq!(Input::NonText.present(), None);
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::Required.to_string(), "any.required");
        assert_eq!(Rule::Max(64).to_string(), "string.max");
        assert_eq!(Rule::NotText.to_string(), "string.base");
        assert_eq!(Rule::InvalidDate.to_string(), "date.invalid");
        assert_eq!(Rule::NotAllowed.to_string(), "any.allowOnly");
    }

    #[test]
    fn test_char_len_counts_glyphs() {
        assert_eq!(char_len("王小明"), 3);
        assert_eq!(char_len("abc"), 3);
    }
}
