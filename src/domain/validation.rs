// src/domain/validation.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Ensure a required text field is non-blank and at most `max_chars` long.
pub(crate) fn required_text(
    value: String,
    field: &str,
    max_chars: Option<usize>,
) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    max_length(value, field, max_chars)
}

pub(crate) fn max_length(
    value: String,
    field: &str,
    max_chars: Option<usize>,
) -> DomainResult<String> {
    match max_chars {
        Some(max) if value.chars().count() > max => Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(value),
    }
}
