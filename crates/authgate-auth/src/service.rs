//! Credential flow orchestration: register, authenticate, refresh, logout,
//! and password change.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use authgate_core::config::AuthConfig;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_entity::user::{NewUser, Role, User};
use authgate_store::{CredentialStore, RevocationRegistry};

use crate::password::{PasswordHasher, PasswordPolicy};
use crate::rbac::RolePolicies;
use crate::token::{Claims, TokenDecoder, TokenEncoder, TokenPair};

/// The message returned for any credential failure during login. Kept
/// identical for unknown email and wrong password so callers cannot probe
/// which addresses are registered.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Input for creating a new user account.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Orchestrates authentication flows over the credential store, token
/// codec, and revocation registry.
#[derive(Clone)]
pub struct AuthService {
    encoder: TokenEncoder,
    decoder: TokenDecoder,
    hasher: PasswordHasher,
    policy: PasswordPolicy,
    policies: RolePolicies,
    credentials: Arc<dyn CredentialStore>,
    revocations: Arc<dyn RevocationRegistry>,
}

impl AuthService {
    /// Builds the service and its token codec from auth configuration.
    pub fn new(
        config: &AuthConfig,
        credentials: Arc<dyn CredentialStore>,
        revocations: Arc<dyn RevocationRegistry>,
    ) -> AppResult<Self> {
        Ok(Self {
            encoder: TokenEncoder::new(config)?,
            decoder: TokenDecoder::new(config, revocations.clone())?,
            hasher: PasswordHasher::new(),
            policy: PasswordPolicy::new(config),
            policies: RolePolicies::new(),
            credentials,
            revocations,
        })
    }

    /// The token decoder, shared with the request gate.
    pub fn decoder(&self) -> &TokenDecoder {
        &self.decoder
    }

    /// The role policy table, shared with the request gate.
    pub fn policies(&self) -> &RolePolicies {
        &self.policies
    }

    /// Creates a new user account and issues its first token pair.
    ///
    /// `created_by` records the admin who performed the registration.
    pub async fn register(
        &self,
        request: RegisterUser,
        created_by: Option<Uuid>,
    ) -> AppResult<TokenPair> {
        self.policy.validate(&request.password)?;

        let password_hash = self.hasher.hash(&request.password)?;
        let user = self
            .credentials
            .insert(NewUser {
                email: request.email,
                password_hash,
                first_name: request.first_name,
                last_name: request.last_name,
                role: request.role,
                created_by,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        self.issue_pair(&user)
    }

    /// Verifies email + password and issues a token pair.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<TokenPair> {
        let Some(user) = self.credentials.find_by_email(email).await? else {
            warn!(email = %email.to_lowercase(), "Login attempt for unknown email");
            return Err(AppError::invalid_credentials(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::invalid_credentials(INVALID_CREDENTIALS));
        }

        info!(user_id = %user.id, role = %user.role, "User authenticated");
        self.issue_pair(&user)
    }

    /// Exchanges a refresh token (from the `Authorization` header value)
    /// for a fresh access token. The refresh token itself is not rotated.
    pub async fn refresh(&self, authorization: &str) -> AppResult<TokenPair> {
        let Some(token) = authorization.strip_prefix("Bearer ") else {
            return Err(AppError::missing_token(
                "Authorization header must carry a bearer token",
            ));
        };

        let claims = self.decoder.decode_refresh_token(token).await?;

        let Some(user) = self.credentials.find_by_email(&claims.sub).await? else {
            warn!(subject = %claims.sub, "Refresh for unknown subject");
            return Err(AppError::unknown_subject("Token subject no longer exists"));
        };

        let authorities = self.policies.authorities_for(user.role);
        let (access_token, access_expires_at) =
            self.encoder.issue_access_token(&user, authorities)?;

        info!(user_id = %user.id, "Access token refreshed");
        Ok(TokenPair {
            access_token,
            refresh_token: token.to_string(),
            access_expires_at,
            refresh_expires_at: claims.expires_at(),
        })
    }

    /// Revokes the presented token so it is rejected on future requests.
    /// Idempotent.
    pub async fn logout(&self, claims: &Claims) -> AppResult<()> {
        self.revocations
            .revoke(&claims.jti.to_string(), claims.expires_at())
            .await?;
        info!(subject = %claims.sub, "Token revoked on logout");
        Ok(())
    }

    /// Changes a user's password after verifying the current one and the
    /// confirmation.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
        confirmation_password: &str,
    ) -> AppResult<()> {
        let Some(user) = self.credentials.find_by_id(user_id).await? else {
            return Err(AppError::unknown_subject("User no longer exists"));
        };

        if !self.hasher.verify(current_password, &user.password_hash)? {
            return Err(AppError::invalid_credentials("Wrong password"));
        }

        if new_password != confirmation_password {
            return Err(AppError::password_mismatch("Passwords are not the same"));
        }

        self.policy.validate(new_password)?;

        let password_hash = self.hasher.hash(new_password)?;
        self.credentials
            .update_password_hash(user.id, &password_hash)
            .await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }

    fn issue_pair(&self, user: &User) -> AppResult<TokenPair> {
        let authorities = self.policies.authorities_for(user.role);
        self.encoder.issue_pair(user, authorities)
    }
}
