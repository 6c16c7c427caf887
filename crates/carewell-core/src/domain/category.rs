use serde::{Deserialize, Serialize};

use super::PostColor;

/// A derived category: published posts grouped by `(category, color)`.
///
/// Color is stored per post, so one category name can appear once per color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: u64,
    pub color: PostColor,
}
