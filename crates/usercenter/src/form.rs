// File: src/form.rs
// Purpose: Submitted form data, trimmed and viewed as validator input

use serde_json::Value as JsonValue;
use std::collections::{HashMap, HashSet};
use usercenter_validation::Input;

/// Form data from a POST body: one input record per request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    fields: HashMap<String, String>,
    non_text: HashSet<String>,
}

impl FormData {
    /// Create empty form data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from form fields with automatic trimming
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k, v.trim().to_string()))
            .collect();

        Self {
            fields,
            non_text: HashSet::new(),
        }
    }

    /// Decode an `application/x-www-form-urlencoded` body.
    ///
    /// Pairs that fail to percent-decode are dropped. A repeated key keeps
    /// its last value, as a browser form only submits one of each here.
    pub fn from_urlencoded(body: &str) -> Self {
        let decode = |raw: &str| {
            let raw = raw.replace('+', " ");
            urlencoding::decode(&raw).map(|s| s.into_owned()).ok()
        };

        let fields = body
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                Some((decode(key)?, decode(value)?))
            })
            .collect();

        Self::from_fields(fields)
    }

    /// Create from a JSON object. String values are trimmed; any other JSON
    /// type is recorded so validators can reject it instead of guessing.
    pub fn from_json(json: &JsonValue) -> Self {
        let mut form = Self::new();

        if let JsonValue::Object(map) = json {
            for (key, value) in map {
                match value {
                    JsonValue::String(s) => {
                        form.fields.insert(key.clone(), s.trim().to_string());
                    }
                    JsonValue::Null => {}
                    _ => {
                        form.non_text.insert(key.clone());
                    }
                }
            }
        }

        form
    }

    /// Get a form field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The value as a field validator sees it
    pub fn input(&self, key: &str) -> Input<'_> {
        if self.non_text.contains(key) {
            Input::NonText
        } else {
            Input::from(self.get(key))
        }
    }

    /// Check if a field exists
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key) || self.non_text.contains(key)
    }

    /// Check if form is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.non_text.is_empty()
    }

    /// Get as HashMap
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_fields(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
