//! Authentication and authorization ports.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Role granted to blog administrators.
pub const ADMIN_ROLE: &str = "admin";

/// Claims stored in session tokens.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub session_id: Uuid,
    pub subject: String,
    pub roles: Vec<String>,
    pub exp: i64,
}

/// Login credentials as submitted by the admin form.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// An authenticated admin session.
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: Uuid,
    pub username: String,
    pub token: String,
    pub expires_in: i64,
    pub issued_at: DateTime<Utc>,
}

/// Credential verification capability.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify credentials and open a session.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Token service trait for JWT operations.
pub trait TokenService: Send + Sync {
    /// Generate an access token for a subject.
    fn generate_token(
        &self,
        session_id: Uuid,
        subject: &str,
        roles: Vec<String>,
    ) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime of generated tokens.
    fn expiration_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
