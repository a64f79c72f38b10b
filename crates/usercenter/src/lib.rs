// User center - form validation and upstream error normalization
// Validates submitted account forms and turns API failures into the same
// field → message shape, so a template only has one way to show errors.

pub mod config;
pub mod form;
pub mod message;
pub mod normalizer;
pub mod state;
pub mod upstream;
pub mod validation;

// Re-export core types
pub use config::{Config, MessagesConfig};
pub use form::FormData;
pub use message::{Catalog, ErrorMessages, FieldErrors, Locale, MessageCode};
pub use normalizer::{Normalized, Normalizer, DEFAULT_NOT_FOUND_KEY};
pub use state::FormState;
pub use upstream::{ApiCode, ApiErrorBody, ApiFieldError, UpstreamError};
pub use validation::{
    validate, Entity, FieldCheck, Limits, Record, Strictness, ValidationOutcome, Validators,
};

// Field validators and their rule vocabulary
pub use usercenter_validation as fields;
pub use usercenter_validation::{Input, Rule};

// Re-export commonly used types from dependencies
pub use axum::http::StatusCode;
