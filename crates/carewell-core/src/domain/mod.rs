//! Domain entities - the core business objects.

mod blog_post;
mod category;
pub mod post_date;
mod stats;

pub use blog_post::{
    BlogPost, BlogPostPatch, NewBlogPost, PLACEHOLDER_IMAGE, PostColor, PostFilter, PostId,
    PostStatus,
};
pub use category::CategorySummary;
pub use stats::DashboardStats;
