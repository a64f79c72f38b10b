// File: src/validation/mod.rs
// Purpose: Validation outcome and the reducer that produces it

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use usercenter_validation::Rule;

use crate::form::FormData;
use crate::message::{FieldErrors, MessageCode};

pub mod entities;

pub use entities::{Entity, Limits, Strictness, Validators};

/// Validated fields. Optional fields left blank are present as `None`.
pub type Record = BTreeMap<String, Option<String>>;

/// Result of validating one input record
///
/// Serializes as `{ "result": ..., "errors": ... }` with exactly one side null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(Record),
    Invalid(FieldErrors),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn result(&self) -> Option<&Record> {
        match self {
            Self::Valid(record) => Some(record),
            Self::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Get the code for a specific field
    pub fn error(&self, field: &str) -> Option<&MessageCode> {
        self.errors()?.get(field)
    }

    pub fn into_result(self) -> Result<Record, FieldErrors> {
        match self {
            Self::Valid(record) => Ok(record),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

impl Serialize for ValidationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationOutcome", 2)?;
        state.serialize_field("result", &self.result())?;
        state.serialize_field("errors", &self.errors())?;
        state.end()
    }
}

type CheckFn<'a> = Box<dyn Fn(&FormData) -> Option<Rule> + 'a>;

/// One rule applied to one field of a form
pub struct FieldCheck<'a> {
    field: &'static str,
    check: CheckFn<'a>,
}

impl<'a> FieldCheck<'a> {
    pub fn new(field: &'static str, check: impl Fn(&FormData) -> Option<Rule> + 'a) -> Self {
        Self {
            field,
            check: Box::new(check),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn run(&self, form: &FormData) -> Option<Rule> {
        (self.check)(form)
    }
}

impl fmt::Debug for FieldCheck<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCheck")
            .field("field", &self.field)
            .finish()
    }
}

/// Run every check against the form and fold the answers into one outcome.
///
/// No check is skipped because an earlier one failed, so a page can show all
/// of its errors at once. When a field has several checks the first failure
/// is the one reported.
pub fn validate(form: &FormData, checks: &[FieldCheck<'_>]) -> ValidationOutcome {
    let (result, errors) = checks.iter().fold(
        (Record::new(), FieldErrors::new()),
        |(mut result, mut errors), check| {
            let field = check.field();
            match check.run(form) {
                Some(rule) => {
                    errors
                        .entry(field.to_string())
                        .or_insert_with(|| MessageCode::new(field, rule));
                }
                None => {
                    let value = form
                        .get(field)
                        .filter(|value| !value.is_empty())
                        .map(str::to_string);
                    result.insert(field.to_string(), value);
                }
            }
            (result, errors)
        },
    );

    if errors.is_empty() {
        ValidationOutcome::Valid(result)
    } else {
        ValidationOutcome::Invalid(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use usercenter_validation::{check_optional_text, check_required_text};

    fn checks() -> Vec<FieldCheck<'static>> {
        vec![
            FieldCheck::new("title", |form: &FormData| {
                check_required_text(form.input("title"), 10)
            }),
            FieldCheck::new("note", |form: &FormData| {
                check_optional_text(form.input("note"), 10)
            }),
        ]
    }

    #[test]
    fn test_valid_outcome_contains_checked_fields_only() {
        let form: FormData = [("title", "Hello"), ("note", ""), ("extra", "ignored")]
            .into_iter()
            .collect();

        let outcome = validate(&form, &checks());

        let mut expected = Record::new();
        expected.insert("title".to_string(), Some("Hello".to_string()));
        expected.insert("note".to_string(), None);
        assert_eq!(outcome, ValidationOutcome::Valid(expected));
    }

    #[test]
    fn test_all_failures_accumulate() {
        let form: FormData = [("note", "far too long a note")].into_iter().collect();

        let outcome = validate(&form, &checks());

        assert!(!outcome.is_valid());
        assert_eq!(outcome.result(), None);
        assert_eq!(outcome.error("title").map(ToString::to_string).as_deref(), Some("title.any.required"));
        assert_eq!(outcome.error("note").map(ToString::to_string).as_deref(), Some("note.string.max"));
    }

    #[test]
    fn test_first_failure_per_field_wins() {
        let checks = vec![
            FieldCheck::new("title", |_: &FormData| Some(Rule::Required)),
            FieldCheck::new("title", |_: &FormData| Some(Rule::Max(1))),
        ];

        let outcome = validate(&FormData::new(), &checks);

        assert_eq!(outcome.error("title"), Some(&MessageCode::new("title", Rule::Required)));
    }

    #[test]
    fn test_serialized_shape() {
        let form: FormData = [("title", "Hi")].into_iter().collect();
        let valid = serde_json::to_value(validate(&form, &checks())).unwrap();
        assert_eq!(
            valid,
            serde_json::json!({ "result": { "title": "Hi", "note": null }, "errors": null })
        );

        let invalid = serde_json::to_value(validate(&FormData::new(), &checks())).unwrap();
        assert_eq!(
            invalid,
            serde_json::json!({ "result": null, "errors": { "title": "title.any.required" } })
        );
    }
}
