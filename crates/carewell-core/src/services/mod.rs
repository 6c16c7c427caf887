//! Domain services - orchestration over the ports.

mod blog;

pub use blog::{BlogService, DASHBOARD_RECENT_LIMIT};
