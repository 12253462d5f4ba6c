//! Field validation rules

use super::field::{FieldName, FormField};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// `local-part@domain.tld` with no whitespace and no extra `@`.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex literal"));

/// Reasons a field value is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    MissingRequiredValue,
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
}

/// An error annotation attached to a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field_name: FieldName,
    pub kind: ValidationError,
    pub message: String,
}

impl FieldError {
    pub fn new(field_name: FieldName, kind: ValidationError) -> Self {
        Self {
            field_name,
            kind,
            message: kind.to_string(),
        }
    }
}

/// Whether `value` matches the email pattern
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check a single field against the rule set.
///
/// Rules apply in order: required-and-blank, then the email pattern for the
/// email field. The value is trimmed before both checks.
pub fn check_field(field: &FormField) -> Result<(), ValidationError> {
    let value = field.as_text().trim();

    if field.required && value.is_empty() {
        return Err(ValidationError::MissingRequiredValue);
    }

    if field.name == FieldName::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    Ok(())
}
