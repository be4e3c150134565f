use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ConsoleError, ConsoleResult};

/// Field-level validation messages, keyed by wire field name.
///
/// Only the first message per field is kept, mirroring how a form shows one
/// error under each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    /// Records the outcome of a validation rule.
    ///
    /// Validation failures are stored under the field they name; any other
    /// error is stored under `fallback_field`.
    pub fn check(&mut self, fallback_field: &str, outcome: ConsoleResult<()>) {
        match outcome {
            Ok(()) => {}
            Err(ConsoleError::Validation { field, message }) => self.insert(field, message),
            Err(other) => self.insert(fallback_field, other.user_message()),
        }
    }

    /// Returns the message for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns true if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with an error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// `Ok(())` when empty, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<FieldErrors> for ConsoleError {
    /// Collapses to the first field's message.
    fn from(errors: FieldErrors) -> Self {
        match errors.errors.into_iter().next() {
            Some((field, message)) => ConsoleError::Validation { field, message },
            None => ConsoleError::validation("form", "Form is invalid"),
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}
