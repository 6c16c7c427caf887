//! # CareWell Infrastructure
//!
//! Concrete implementations of the ports defined in `carewell-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory repository only
//! - `postgres` - PostgreSQL blog store via SeaORM
//! - `auth` - JWT + Argon2 admin authentication

pub mod database;
pub mod storage;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::{DatabaseConfig, InMemoryBlogPostRepository};
pub use storage::{LocalImageStore, StorageConfig};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnection, PostgresBlogPostRepository};

#[cfg(feature = "auth")]
pub use auth::{AdminAccount, AdminAuthenticator, Argon2PasswordService, JwtConfig, JwtTokenService};
