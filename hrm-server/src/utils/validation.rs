//! Input validation helpers
//!
//! Request payloads carry `validator` derives; this module converts the
//! field-level errors into an [`AppError`] with structured details.

use validator::Validate;

use crate::utils::{AppError, AppResult};

/// Validate a request payload and convert field errors into an [`AppError`].
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(|errors| {
        let mut err = AppError::validation("Request validation failed");
        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            err = err.with_detail(field.to_string(), messages.join(", "));
        }
        err
    })
}
