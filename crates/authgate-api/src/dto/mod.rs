//! Request and response payloads for the HTTP API.

pub mod request;
pub mod response;

use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use validator::Validate;

/// Runs derive-based validation and folds the violations into a single
/// `Validation` error.
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(|errors| {
        let mut violations: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let detail = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{field}: {detail}")
            })
            .collect();
        violations.sort();
        AppError::validation(violations.join("; "))
    })
}
