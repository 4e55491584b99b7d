//! Authentication and token configuration.

use serde::{Deserialize, Serialize};

/// Authentication, token signing, and credential configuration.
///
/// Signing key material, algorithm, and TTLs are configuration here rather
/// than being hard-coded at any call site. The `public_paths` allow-list is
/// consulted by the authorization gate before any token check runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC family).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Signing algorithm identifier: `"HS256"`, `"HS384"`, or `"HS512"`.
    #[serde(default = "default_jwt_algorithm")]
    pub jwt_algorithm: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days. Must exceed the access TTL.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Clock skew leeway applied during expiry validation, in seconds.
    #[serde(default = "default_leeway")]
    pub clock_skew_leeway_seconds: u64,
    /// Minimum password length accepted on registration and password change.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Request paths admitted without a token (prefix match).
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,
    /// Whether to seed demo accounts (admin/manager/user) at startup.
    #[serde(default)]
    pub seed_demo_users: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_algorithm: default_jwt_algorithm(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
            clock_skew_leeway_seconds: default_leeway(),
            password_min_length: default_password_min(),
            public_paths: default_public_paths(),
            seed_demo_users: false,
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7
}

fn default_leeway() -> u64 {
    5
}

fn default_password_min() -> usize {
    8
}

fn default_public_paths() -> Vec<String> {
    vec![
        "/api/v1/auth/authenticate".to_string(),
        "/api/v1/auth/refresh-token".to_string(),
        "/api/v1/health".to_string(),
    ]
}
