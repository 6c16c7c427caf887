//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use carewell_infra::{DatabaseConfig, StorageConfig};

/// Admin login settings. Absent means open mode.
#[derive(Debug, Clone)]
pub struct AdminAuthConfig {
    pub username: String,
    pub password_hash: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub jwt_issuer: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub storage: StorageConfig,
    pub upload_max_bytes: usize,
    pub admin: Option<AdminAuthConfig>,
    pub seed_sample_post: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parse_var(&lookup, "DB_MIN_CONNECTIONS").unwrap_or(2),
            ..DatabaseConfig::new(url)
        });

        let defaults = StorageConfig::default();
        let storage = StorageConfig {
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            public_prefix: lookup("UPLOAD_URL_PREFIX").unwrap_or(defaults.public_prefix),
        };

        let admin = lookup("ADMIN_PASSWORD_HASH").map(|password_hash| AdminAuthConfig {
            username: lookup("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
            password_hash,
            jwt_secret: lookup("JWT_SECRET")
                .unwrap_or_else(|| "change-me-in-production".to_string()),
            jwt_expiration_hours: parse_var(&lookup, "JWT_EXPIRATION_HOURS").unwrap_or(24),
            jwt_issuer: lookup("JWT_ISSUER").unwrap_or_else(|| "carewell-blog".to_string()),
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "PORT").unwrap_or(8080),
            database,
            storage,
            upload_max_bytes: parse_var(&lookup, "UPLOAD_MAX_BYTES").unwrap_or(10 * 1024 * 1024),
            admin,
            seed_sample_post: lookup("SEED_SAMPLE_POST")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.parse().ok())
}
