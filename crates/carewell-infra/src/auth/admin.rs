//! Single-administrator credential check.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use carewell_core::ports::{
    ADMIN_ROLE, AuthError, Authenticator, Credentials, PasswordService, Session, TokenService,
};

/// Configured administrator account.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}

/// Verifies credentials against one configured admin account and issues a JWT session.
pub struct AdminAuthenticator {
    account: AdminAccount,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AdminAuthenticator {
    pub fn new(
        account: AdminAccount,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            account,
            passwords,
            tokens,
        }
    }
}

#[async_trait]
impl Authenticator for AdminAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        // Verify the hash even on a username mismatch so both failures cost the same.
        let password_ok = self
            .passwords
            .verify(&credentials.password, &self.account.password_hash)?;
        let username_ok = credentials.username == self.account.username;

        if !(password_ok && username_ok) {
            tracing::warn!("Rejected admin login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let session_id = Uuid::new_v4();
        let token = self.tokens.generate_token(
            session_id,
            &self.account.username,
            vec![ADMIN_ROLE.to_string()],
        )?;

        tracing::info!(%session_id, "Admin session opened");

        Ok(Session {
            session_id,
            username: self.account.username.clone(),
            token,
            expires_in: self.tokens.expiration_seconds(),
            issued_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

    fn authenticator() -> (AdminAuthenticator, Arc<JwtTokenService>) {
        let passwords = Arc::new(Argon2PasswordService::new());
        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            ..JwtConfig::default()
        }));
        let account = AdminAccount {
            username: "admin".to_string(),
            password_hash: passwords.hash("correct horse").unwrap(),
        };

        (
            AdminAuthenticator::new(account, passwords, tokens.clone()),
            tokens,
        )
    }

    #[tokio::test]
    async fn test_authenticate_issues_admin_token() {
        let (auth, tokens) = authenticator();

        let session = auth
            .authenticate(&Credentials {
                username: "admin".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();

        let claims = tokens.validate_token(&session.token).unwrap();
        assert_eq!(claims.subject, "admin");
        assert_eq!(claims.session_id, session.session_id);
        assert!(claims.roles.iter().any(|r| r == ADMIN_ROLE));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_wrong_password() {
        let (auth, _) = authenticator();

        let result = auth
            .authenticate(&Credentials {
                username: "admin".to_string(),
                password: "password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_wrong_username() {
        let (auth, _) = authenticator();

        let result = auth
            .authenticate(&Credentials {
                username: "root".to_string(),
                password: "correct horse".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
