//! Auth handlers — register, authenticate, refresh, logout.

use axum::extract::{Extension, State};
use axum::http::HeaderMap;
use axum::Json;

use authgate_auth::rbac::RouteRequirement;
use authgate_auth::service::RegisterUser;
use authgate_auth::token::Claims;
use authgate_core::error::AppError;
use authgate_entity::user::Role;

use crate::dto::request::{AuthenticationRequest, RegisterRequest};
use crate::dto::response::{AuthenticationResponse, MessageResponse};
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::AuthPrincipal;
use crate::state::AppState;

/// POST /api/v1/auth/register
///
/// Only admins may create accounts; the caller is recorded as the new
/// user's creator.
pub async fn register(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthenticationResponse>, ApiError> {
    RouteRequirement::Role(Role::Admin).evaluate(&auth)?;
    validate_payload(&req)?;

    let pair = state
        .auth_service
        .register(
            RegisterUser {
                email: req.email,
                password: req.password,
                first_name: req.first_name,
                last_name: req.last_name,
                role: req.role,
            },
            Some(auth.user_id),
        )
        .await?;

    Ok(Json(pair.into()))
}

/// POST /api/v1/auth/authenticate
pub async fn authenticate(
    State(state): State<AppState>,
    Json(req): Json<AuthenticationRequest>,
) -> Result<Json<AuthenticationResponse>, ApiError> {
    validate_payload(&req)?;

    let pair = state
        .auth_service
        .authenticate(&req.email, &req.password)
        .await?;

    Ok(Json(pair.into()))
}

/// POST /api/v1/auth/refresh-token
///
/// The refresh token arrives in the Authorization header, not the body.
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AuthenticationResponse>, ApiError> {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::missing_token("Missing Authorization header"))?;

    let pair = state.auth_service.refresh(authorization).await?;

    Ok(Json(pair.into()))
}

/// POST /api/v1/auth/logout
///
/// Revokes the presented access token. The gate already validated it and
/// attached the claims.
pub async fn logout(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.auth_service.logout(&claims).await?;
    Ok(Json(MessageResponse::new("Logged out successfully")))
}
