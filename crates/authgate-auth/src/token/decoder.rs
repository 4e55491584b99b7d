//! JWT token validation and revocation checking.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use authgate_core::config::AuthConfig;
use authgate_core::error::AppError;
use authgate_store::RevocationRegistry;

use super::claims::{Claims, TokenKind};

/// Validates JWT tokens and checks revocation status.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Signing algorithm, kept for the unverified-peek path.
    algorithm: Algorithm,
    /// Registry of revoked token IDs.
    revocations: Arc<dyn RevocationRegistry>,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(
        config: &AuthConfig,
        revocations: Arc<dyn RevocationRegistry>,
    ) -> Result<Self, AppError> {
        let algorithm = config.jwt_algorithm.parse::<Algorithm>().map_err(|e| {
            AppError::configuration(format!(
                "Unsupported JWT algorithm '{}': {e}",
                config.jwt_algorithm
            ))
        })?;

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.leeway = config.clock_skew_leeway_seconds;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            algorithm,
            revocations,
        })
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks:
    /// 1. Signature validity
    /// 2. Expiration (with configured leeway)
    /// 3. Token kind is Access
    /// 4. JTI not revoked
    pub async fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenKind::Access {
            return Err(AppError::token_wrong_kind(
                "Invalid token kind: expected access token",
            ));
        }

        self.check_revocation(&claims).await?;

        Ok(claims)
    }

    /// Decodes and validates a refresh token string.
    pub async fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenKind::Refresh {
            return Err(AppError::token_wrong_kind(
                "Invalid token kind: expected refresh token",
            ));
        }

        self.check_revocation(&claims).await?;

        Ok(claims)
    }

    /// Extracts the subject from a token without verifying its signature
    /// or expiry. For logging and diagnostics only — never for
    /// authentication decisions.
    pub fn extract_subject(&self, token: &str) -> Result<String, AppError> {
        let mut validation = Validation::new(self.algorithm);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;

        let token_data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|e| AppError::token_malformed(format!("Unreadable token: {e}")))?;

        Ok(token_data.claims.sub)
    }

    /// Internal decode without kind checking.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::token_expired("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::token_malformed("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::token_malformed("Invalid token signature")
                    }
                    _ => AppError::token_malformed(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Checks whether the token's JTI has been revoked.
    async fn check_revocation(&self, claims: &Claims) -> Result<(), AppError> {
        if self.revocations.is_revoked(&claims.jti.to_string()).await? {
            return Err(AppError::token_revoked("Token has been revoked"));
        }
        Ok(())
    }
}
