//! The request gate: JWT authentication middleware applied to every
//! non-public route.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use authgate_auth::principal::Principal;
use authgate_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticates each request before it reaches a handler.
///
/// Public paths pass straight through. For everything else:
/// 1. Extract the bearer token from the Authorization header.
/// 2. Decode and validate it as an access token (signature, expiry,
///    kind, revocation).
/// 3. Look the subject up in the credential store; a valid token whose
///    subject was removed is rejected.
/// 4. Build a `Principal` from the stored user's current role and attach
///    it, together with the claims, to the request.
pub async fn request_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path();
    if is_public_path(&state, path) {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::missing_token("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::missing_token("Invalid Authorization header format"))?;

    let claims = state.decoder.decode_access_token(token).await?;

    let Some(user) = state.credentials.find_by_email(&claims.sub).await? else {
        warn!(subject = %claims.sub, "Valid token for unknown subject");
        return Err(AppError::unknown_subject("Token subject no longer exists").into());
    };

    // Grants come from the store's current role, not the token's snapshot,
    // so a role change takes effect on the next request.
    let principal = Principal::for_user(&user, &state.policies);
    request.extensions_mut().insert(principal);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Checks the path against the configured public prefixes.
fn is_public_path(state: &AppState, path: &str) -> bool {
    state
        .config
        .auth
        .public_paths
        .iter()
        .any(|prefix| path == prefix || path.starts_with(&format!("{prefix}/")))
}
