//! JWT token handling and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use vitrine_core::config::AuthConfig;
use vitrine_core::errors::AuthError;
use vitrine_core::models::UserId;
use vitrine_core::traits::IIdentityVerifier;

/// Registered claims carried by a Vitrine token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Expiry, seconds since epoch.
    pub exp: usize,
    /// Issued-at, seconds since epoch.
    pub iat: usize,
}

/// HS256 token manager. Keys are derived once at construction from the
/// injected secret; nothing reads the environment.
pub struct JwtVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_hours: i64,
}

impl JwtVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            token_ttl_hours: config.token_ttl_hours,
        }
    }

    /// Issue a token for a user, valid for the configured TTL.
    pub fn issue(&self, user: &UserId) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.0.clone(),
            exp: (now + Duration::hours(self.token_ttl_hours)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            debug!(error = %e, "token encoding failed");
            AuthError::InvalidToken
        })
    }
}

impl IIdentityVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => Ok(UserId(data.claims.sub)),
            Err(e) => {
                // Expired, malformed, and wrong-signature all collapse to
                // one variant; callers never branch on the decode detail.
                debug!(error = %e, "token verification failed");
                Err(AuthError::InvalidToken)
            }
        }
    }
}
