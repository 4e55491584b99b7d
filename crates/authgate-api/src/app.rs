//! Application assembly: wires configuration, stores, and the auth
//! service into an `AppState` and builds the router.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tracing::info;

use authgate_auth::service::{AuthService, RegisterUser};
use authgate_core::config::AppConfig;
use authgate_core::result::AppResult;
use authgate_entity::user::Role;
use authgate_store::{MemoryCredentialStore, MemoryRevocationRegistry};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration.
pub fn build_state(config: AppConfig) -> AppResult<AppState> {
    let credentials = Arc::new(MemoryCredentialStore::new());

    // Revocation entries must outlive the longest-lived token.
    let retention = Duration::from_secs(config.auth.refresh_ttl_days * 24 * 3600);
    let revocations = Arc::new(MemoryRevocationRegistry::new(retention));

    let auth_service = Arc::new(AuthService::new(
        &config.auth,
        credentials.clone(),
        revocations,
    )?);

    let decoder = Arc::new(auth_service.decoder().clone());
    let policies = Arc::new(auth_service.policies().clone());

    Ok(AppState {
        config: Arc::new(config),
        auth_service,
        decoder,
        credentials,
        policies,
    })
}

/// Builds the router from an assembled state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Registers the three demo accounts and logs their access tokens.
///
/// Only runs when `auth.seed_demo_users` is enabled; intended for local
/// development and the integration suite.
pub async fn seed_demo_users(state: &AppState) -> AppResult<()> {
    let seeds = [
        ("Admin", "admin@mail.com", "admin$123", Role::Admin),
        ("Manager", "manager@mail.com", "manager$123", Role::Manager),
        ("User", "user@mail.com", "user$123", Role::User),
    ];

    for (name, email, password, role) in seeds {
        let pair = state
            .auth_service
            .register(
                RegisterUser {
                    email: email.to_string(),
                    password: password.to_string(),
                    first_name: name.to_string(),
                    last_name: name.to_string(),
                    role,
                },
                None,
            )
            .await?;
        info!(email, role = %role, token = %pair.access_token, "Seeded demo user");
    }

    Ok(())
}
