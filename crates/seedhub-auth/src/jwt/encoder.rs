//! JWT token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use seedhub_core::config::AuthConfig;
use seedhub_core::error::AppError;
use seedhub_entity::user::User;

use super::claims::Claims;

/// Creates signed access tokens.
///
/// The server never issues tokens to clients; this exists for the admin CLI
/// and for tests.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: config.token_ttl_minutes.min(u64::from(u32::MAX)) as i64,
        }
    }

    /// Issues an access token for `user`.
    pub fn issue(&self, user: &User) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.ttl_minutes);

        let claims = Claims {
            sub: user.id,
            role: user.role,
            login: user.login.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok((token, exp))
    }
}
