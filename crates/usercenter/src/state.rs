// File: src/state.rs
// Purpose: The state object a handler hands to a form template

use serde::Serialize;

use crate::message::{Catalog, ErrorMessages};
use crate::normalizer::Normalized;
use crate::validation::{Record, ValidationOutcome};

/// What a form page renders: field errors, a page-level alert, and the
/// accepted values (to refill the form or confirm a save).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub errors: Option<ErrorMessages>,
    pub alert: Option<String>,
    pub result: Option<Record>,
}

impl FormState {
    /// From local validation, rendered through the catalog
    pub fn from_outcome(outcome: ValidationOutcome, catalog: &Catalog) -> Self {
        match outcome {
            ValidationOutcome::Valid(record) => Self {
                result: Some(record),
                ..Self::default()
            },
            ValidationOutcome::Invalid(errors) => Self {
                errors: Some(catalog.render(&errors)),
                ..Self::default()
            },
        }
    }

    /// From an upstream failure the normalizer recovered
    pub fn from_normalized(normalized: Normalized) -> Self {
        match normalized {
            Normalized::Fields(errors) => Self {
                errors: Some(errors),
                ..Self::default()
            },
            Normalized::NotFound(alert) | Normalized::Alert(alert) => Self {
                alert: Some(alert),
                ..Self::default()
            },
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty()) || self.alert.is_some()
    }

    /// Get the message for a specific field
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.as_ref()?.get(field).map(String::as_str)
    }
}
