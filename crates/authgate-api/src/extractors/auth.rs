//! `AuthPrincipal` extractor — pulls the principal the request gate
//! attached after token validation.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use authgate_auth::principal::Principal;
use authgate_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated principal available in handlers.
#[derive(Debug, Clone)]
pub struct AuthPrincipal(pub Principal);

impl std::ops::Deref for AuthPrincipal {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The gate middleware inserts the principal after validating the
        // token; its absence means the route was reached without passing
        // authentication.
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthPrincipal)
            .ok_or_else(|| AppError::missing_token("Authentication required").into())
    }
}
