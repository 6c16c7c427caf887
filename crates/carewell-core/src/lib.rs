//! # CareWell Core
//!
//! The domain layer of the CareWell blog backend.
//! This crate contains the blog post model, the ports infrastructure must
//! implement, and the service that composes them. No database or HTTP code lives here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
pub use services::BlogService;
