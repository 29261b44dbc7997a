//! Validation helpers for `synapse-events`.
//!
//! Form-boundary constraints only. The storage layer persists whatever it is
//! handed; name/type requiredness is enforced here, before a write is built.

use crate::error::ValidationError;
use crate::model::NewEvent;

/// Validates event fields at the form boundary.
pub struct EventValidator;

impl EventValidator {
    /// Validate an event payload and return all validation errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any validation rules are violated.
    pub fn validate(event: &NewEvent) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        // Name: Required, max 200 chars.
        if event.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "cannot be empty"));
        }
        if event.name.len() > 200 {
            errors.push(ValidationError::new("name", "exceeds 200 characters"));
        }

        // Type: Required.
        if event.kind.trim().is_empty() {
            errors.push(ValidationError::new("type", "cannot be empty"));
        }

        // Prize money: non-negative.
        if event.prize_money.is_sign_negative() {
            errors.push(ValidationError::new("prize_money", "cannot be negative"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
