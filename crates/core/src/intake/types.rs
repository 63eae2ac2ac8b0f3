use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Intake form fields that can carry a validation message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntakeField {
    Customer,
    Request,
}

impl IntakeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeField::Customer => "customer",
            IntakeField::Request => "request",
        }
    }
}

impl fmt::Display for IntakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violated rule, shown next to the offending field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: IntakeField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: IntakeField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every rule the submitted fields broke, customer first.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("Invalid call request: {}", summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message for `field`, if that field failed.
    pub fn for_field(&self, field: IntakeField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

/// Customer and request text that passed intake validation.
///
/// Only [`validate`](super::validate) builds one, so holding a `ValidIntake`
/// is proof that both rules held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidIntake {
    customer: String,
    request: String,
}

impl ValidIntake {
    pub(crate) fn new(customer: String, request: String) -> Self {
        Self { customer, request }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn request(&self) -> &str {
        &self.request
    }

    pub(crate) fn into_parts(self) -> (String, String) {
        (self.customer, self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display_lists_fields() {
        let errors = ValidationErrors::new(vec![
            FieldError::new(IntakeField::Customer, "bad email"),
            FieldError::new(IntakeField::Request, "too short"),
        ]);
        assert_eq!(
            errors.to_string(),
            "Invalid call request: customer: bad email; request: too short"
        );
    }

    #[test]
    fn test_validation_errors_serialization() {
        let errors = ValidationErrors::new(vec![FieldError::new(
            IntakeField::Request,
            "too short",
        )]);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "errors": [{ "field": "request", "message": "too short" }]
            })
        );
    }
}
