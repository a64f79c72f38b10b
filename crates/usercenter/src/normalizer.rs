// File: src/normalizer.rs
// Purpose: Translate upstream API failures into the template error shape

use axum::http::StatusCode;
use tracing::{debug, warn};

use crate::message::{Catalog, ErrorMessages};
use crate::upstream::{ApiCode, ApiErrorBody, ApiFieldError, UpstreamError};

/// Catalog key shown when the API answers 404 (bad reset token and the like)
pub const DEFAULT_NOT_FOUND_KEY: &str = "token.any.notFound";

/// An upstream failure the page can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// Errors keyed by field, same shape as local validation
    Fields(ErrorMessages),
    /// The thing the request referred to does not exist
    NotFound(String),
    /// A 422 without a field to attach it to
    Alert(String),
}

/// Maps [`UpstreamError`]s through a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    catalog: &'a Catalog,
    not_found_key: &'a str,
}

impl<'a> Normalizer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            not_found_key: DEFAULT_NOT_FOUND_KEY,
        }
    }

    /// Use another catalog key for 404, e.g. `email.any.notFound` on the
    /// forgot-password page.
    pub fn with_not_found(self, key: &'a str) -> Self {
        Self {
            not_found_key: key,
            ..self
        }
    }

    /// Recover what can be shown to the user.
    ///
    /// 404 and 422 are recovered. Anything else, including network failures
    /// and a 422 with no readable body, is handed back untouched for the
    /// request handler to turn into a 500.
    pub fn normalize(&self, err: UpstreamError) -> Result<Normalized, UpstreamError> {
        match err {
            UpstreamError::Api { status, .. } if status == StatusCode::NOT_FOUND => {
                debug!(key = self.not_found_key, "upstream 404 mapped to alert");
                Ok(Normalized::NotFound(
                    self.catalog.lookup(self.not_found_key).to_string(),
                ))
            }
            UpstreamError::Api {
                status,
                body: Some(body),
            } if status == StatusCode::UNPROCESSABLE_ENTITY => Ok(self.unprocessable(body)),
            other => {
                warn!(error = %other, "upstream error not handled by normalizer");
                Err(other)
            }
        }
    }

    fn unprocessable(&self, body: ApiErrorBody) -> Normalized {
        let ApiErrorBody { message, error } = body;
        let message = if message.trim().is_empty() {
            self.catalog.server_error().to_string()
        } else {
            message
        };

        let Some(ApiFieldError { field, code }) = error else {
            debug!("upstream 422 without field detail");
            return Normalized::Alert(message);
        };

        let text = match self.field_message(&field, code) {
            Some(text) => text,
            None => {
                warn!(%field, ?code, "unrecognized upstream error code, showing raw message");
                message
            }
        };

        debug!(%field, ?code, "upstream 422 mapped to field error");

        let mut errors = ErrorMessages::new();
        errors.insert(field, text);
        Normalized::Fields(errors)
    }

    /// Field text for an API code, if the catalog has a phrase for it
    pub fn field_message(&self, field: &str, code: ApiCode) -> Option<String> {
        self.catalog
            .phrase(code)
            .map(|phrase| format!("{}{}", self.catalog.label(field), phrase))
    }
}
