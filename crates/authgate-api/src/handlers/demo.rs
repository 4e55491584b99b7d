//! Demo controller — any authenticated caller.

use crate::error::ApiError;
use crate::extractors::AuthPrincipal;

/// GET /api/v1/demo
pub async fn say_hello(_auth: AuthPrincipal) -> Result<&'static str, ApiError> {
    Ok("Hello from secured endpoint")
}
