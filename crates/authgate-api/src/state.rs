//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use authgate_auth::rbac::RolePolicies;
use authgate_auth::service::AuthService;
use authgate_auth::token::TokenDecoder;
use authgate_core::config::AppConfig;
use authgate_store::CredentialStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Authentication flow orchestrator.
    pub auth_service: Arc<AuthService>,
    /// JWT decoder used by the request gate.
    pub decoder: Arc<TokenDecoder>,
    /// Credential store for subject lookups.
    pub credentials: Arc<dyn CredentialStore>,
    /// Role policy table for principal construction.
    pub policies: Arc<RolePolicies>,
}
