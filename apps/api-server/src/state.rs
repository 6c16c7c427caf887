//! Application state - shared across all handlers.

use std::sync::Arc;

use carewell_core::BlogService;
use carewell_core::ports::{Authenticator, BlogPostRepository, ImageStore, TokenService};
use carewell_infra::{InMemoryBlogPostRepository, LocalImageStore};

#[cfg(feature = "postgres")]
use carewell_infra::{DatabaseConnection, PostgresBlogPostRepository};

#[cfg(feature = "auth")]
use carewell_infra::{
    AdminAccount, AdminAuthenticator, Argon2PasswordService, JwtConfig, JwtTokenService,
};

use crate::config::AppConfig;

/// Admin login services. Present only when admin credentials are configured.
#[derive(Clone)]
pub struct AuthState {
    pub authenticator: Arc<dyn Authenticator>,
    pub tokens: Arc<dyn TokenService>,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    pub images: Arc<dyn ImageStore>,
    pub auth: Option<AuthState>,
    pub upload_max_bytes: usize,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Fails when a configured database cannot be reached.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let posts = Self::blog_repository(config).await?;
        let images: Arc<dyn ImageStore> = Arc::new(LocalImageStore::new(config.storage.clone()));
        let auth = Self::admin_auth(config);

        tracing::info!(
            admin_auth = auth.is_some(),
            upload_dir = %config.storage.upload_dir.display(),
            "Application state initialized"
        );

        Ok(Self::from_parts(posts, images, auth, config.upload_max_bytes))
    }

    /// Assemble state from ready-made components.
    pub fn from_parts(
        posts: Arc<dyn BlogPostRepository>,
        images: Arc<dyn ImageStore>,
        auth: Option<AuthState>,
        upload_max_bytes: usize,
    ) -> Self {
        Self {
            blog: BlogService::new(posts),
            images,
            auth,
            upload_max_bytes,
        }
    }

    #[cfg(feature = "postgres")]
    async fn blog_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn BlogPostRepository>> {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Arc::new(InMemoryBlogPostRepository::new()));
        };

        let connection = DatabaseConnection::init(db_config).await.map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            anyhow::anyhow!("database connection failed: {e}")
        })?;

        Ok(Arc::new(PostgresBlogPostRepository::new(connection.main)))
    }

    #[cfg(not(feature = "postgres"))]
    async fn blog_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn BlogPostRepository>> {
        if config.database.is_some() {
            anyhow::bail!("DATABASE_URL is set but the server was built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        Ok(Arc::new(InMemoryBlogPostRepository::new()))
    }

    #[cfg(feature = "auth")]
    fn admin_auth(config: &AppConfig) -> Option<AuthState> {
        let Some(admin) = &config.admin else {
            tracing::warn!("ADMIN_PASSWORD_HASH not set. Admin endpoints are open.");
            return None;
        };

        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret: admin.jwt_secret.clone(),
            expiration_hours: admin.jwt_expiration_hours,
            issuer: admin.jwt_issuer.clone(),
        }));
        let authenticator = AdminAuthenticator::new(
            AdminAccount {
                username: admin.username.clone(),
                password_hash: admin.password_hash.clone(),
            },
            Arc::new(Argon2PasswordService::new()),
            tokens.clone(),
        );

        Some(AuthState {
            authenticator: Arc::new(authenticator),
            tokens,
        })
    }

    #[cfg(not(feature = "auth"))]
    fn admin_auth(config: &AppConfig) -> Option<AuthState> {
        if config.admin.is_some() {
            tracing::warn!("Built without auth feature - ignoring admin credentials.");
        }
        None
    }
}
