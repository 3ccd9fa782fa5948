//! Signed session tokens (HS256 JWT) carrying the public user fields.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::domain::AuthUser;
use super::errors::AuthError;

/// Lifetime of every issued token.
pub const TOKEN_TTL_HOURS: i64 = 2;

/// Claims embedded in a token: the user fields plus issue/expiry timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn user(&self) -> AuthUser {
        AuthUser { id: self.id, name: self.name.clone(), email: self.email.clone() }
    }
}

/// Signs and verifies session tokens.
pub trait TokenIssuer: Send + Sync {
    fn sign(&self, user: &AuthUser) -> Result<String, AuthError>;
    /// Fails with `AuthError::Unauthorized` for any token that does not verify.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// `TokenIssuer` backed by `jsonwebtoken` with a shared secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn sign(&self, user: &AuthUser) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = TokenClaims {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = %e, "token rejected");
                AuthError::Unauthorized
            })
    }
}
