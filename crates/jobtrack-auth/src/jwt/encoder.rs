//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use jobtrack_core::config::AuthConfig;
use jobtrack_core::error::AppError;
use jobtrack_entity::account::Account;
use jobtrack_entity::session::Session;

use super::claims::Claims;

/// Creates signed JWT session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Generates a session token for the given account and session.
    ///
    /// The token expires together with the session row, so a validated
    /// token always refers to a session that was live when issued.
    pub fn generate_token(
        &self,
        account: &Account,
        session: &Session,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let claims = Claims {
            sub: account.id,
            sid: session.id,
            role: account.role,
            name: account.name.clone(),
            iat: Utc::now().timestamp(),
            exp: session.expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok((token, session.expires_at))
    }
}
