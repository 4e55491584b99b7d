//! Route definitions for the AuthGate HTTP API.
//!
//! All routes are mounted under `/api/v1`. Authentication is applied
//! globally by the request gate; per-route authorization lives in the
//! handlers.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(management_routes())
        .merge(admin_routes())
        .merge(demo_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::request_gate,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Auth endpoints: register, authenticate, refresh, logout.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/authenticate", post(handlers::auth::authenticate))
        .route("/auth/refresh-token", post(handlers::auth::refresh_token))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// User self-service endpoints.
fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users/me/password",
        patch(handlers::user::change_password),
    )
}

/// Management endpoints, shared between admins and managers.
fn management_routes() -> Router<AppState> {
    Router::new()
        .route("/management", get(handlers::management::get))
        .route("/management", post(handlers::management::post))
        .route("/management", put(handlers::management::put))
        .route("/management", delete(handlers::management::delete))
}

/// Admin-only endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(handlers::admin::get))
        .route("/admin", post(handlers::admin::post))
        .route("/admin", put(handlers::admin::put))
        .route("/admin", delete(handlers::admin::delete))
}

/// Demo endpoint for any authenticated caller.
fn demo_routes() -> Router<AppState> {
    Router::new().route("/demo", get(handlers::demo::say_hello))
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
