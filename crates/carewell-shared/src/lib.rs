//! # CareWell Shared
//!
//! Request and response types of the blog HTTP API, shared with API clients.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, MessageResponse};
