//! Incoming request payloads.

use serde::Deserialize;
use validator::Validate;

use authgate_entity::user::Role;

/// POST /api/v1/auth/register
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,
    pub role: Role,
}

/// POST /api/v1/auth/authenticate
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AuthenticationRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// PATCH /api/v1/users
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub current_password: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub new_password: String,
    pub confirmation_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validate_payload;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            email: "alice@mail.com".to_string(),
            password: "admin$123".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            role: Role::User,
        };
        assert!(validate_payload(&valid).is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(validate_payload(&bad_email).is_err());

        let short_password = RegisterRequest {
            password: "short".to_string(),
            ..valid
        };
        assert!(validate_payload(&short_password).is_err());
    }
}
