//! Access token configuration.

use serde::{Deserialize, Serialize};

/// Access token verification settings.
///
/// Tokens arrive in the `X-Access-Token` header and are HS256 JWTs whose
/// subject is the caller's user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Lifetime of tokens minted by tooling, in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    60 * 24
}
