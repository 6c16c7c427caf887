use serde::{Deserialize, Serialize};

use super::BlogPost;

/// Admin dashboard figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_posts: u64,
    pub published_posts: u64,
    pub draft_posts: u64,
    pub recent_blogs: Vec<BlogPost>,
}
