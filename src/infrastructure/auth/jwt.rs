//! JWT token generation and validation

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::DomainError;
use crate::domain::user::User;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user account id, decimal string)
    pub sub: String,
    /// Username
    pub username: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl JwtClaims {
    /// Create new claims for a user
    pub fn new(user: &User, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: user.id().to_string(),
            username: user.username().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Get the user account id from claims
    pub fn user_id(&self) -> Result<i32, DomainError> {
        self.sub
            .parse()
            .map_err(|_| DomainError::internal(format!("Invalid subject claim: {}", self.sub)))
    }
}

/// Configuration for the JWT service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token expiration time in hours
    pub expiration_hours: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            expiration_hours: 24,
        }
    }
}

/// Trait for token operations
pub trait TokenService: Send + Sync + Debug {
    /// Generate a signed token for a user
    fn generate(&self, user: &User) -> Result<String, DomainError>;

    /// Validate a token and return the claims
    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError>;

    /// Token expiration time in hours
    fn expiration_hours(&self) -> u64;
}

/// HS256 token service
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiration_hours", &self.config.expiration_hours)
            .finish()
    }
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenService for JwtService {
    fn generate(&self, user: &User) -> Result<String, DomainError> {
        let claims = JwtClaims::new(user, self.config.expiration_hours);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign token: {}", e)))
    }

    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| DomainError::internal(format!("Invalid token: {}", e)))
    }

    fn expiration_hours(&self) -> u64 {
        self.config.expiration_hours
    }
}
