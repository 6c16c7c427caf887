//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;
mod storage;

pub use auth::{
    ADMIN_ROLE, AuthError, Authenticator, Credentials, PasswordService, Session, TokenClaims,
    TokenService,
};
pub use repository::{BaseRepository, BlogPostRepository};
pub use storage::{ImageStore, StorageError};
