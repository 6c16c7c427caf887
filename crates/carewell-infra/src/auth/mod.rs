//! Authentication implementations.

mod admin;
mod jwt;
mod password;

pub use admin::{AdminAccount, AdminAuthenticator};
pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;
