//! User self-service handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::ChangePasswordRequest;
use crate::dto::response::MessageResponse;
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::AuthPrincipal;
use crate::state::AppState;

/// PATCH /api/v1/users/me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&req)?;

    state
        .auth_service
        .change_password(
            auth.user_id,
            &req.current_password,
            &req.new_password,
            &req.confirmation_password,
        )
        .await?;

    Ok(Json(MessageResponse::new("Password changed successfully")))
}
