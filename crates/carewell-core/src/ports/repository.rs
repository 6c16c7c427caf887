use async_trait::async_trait;

use crate::domain::{
    BlogPost, BlogPostPatch, CategorySummary, NewBlogPost, PostFilter, PostId, PostStatus,
};
use crate::error::RepoError;

/// Generic repository trait for lookups and removal by primary key.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` if absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post store plus the read-only aggregate views derived from it.
///
/// Listings are always ordered newest `date` first, ties broken by `id` descending.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, PostId> {
    /// Insert a post; the store assigns `id`, `created_at` and `updated_at`.
    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Merge `patch` into an existing post.
    async fn update(&self, id: PostId, patch: BlogPostPatch) -> Result<BlogPost, RepoError>;

    /// All posts matching `filter`.
    async fn find_all(&self, filter: PostFilter) -> Result<Vec<BlogPost>, RepoError>;

    /// Posts with exactly this category, any status.
    async fn find_by_category(&self, category: &str) -> Result<Vec<BlogPost>, RepoError> {
        self.find_all(PostFilter::default().with_category(category))
            .await
    }

    /// Number of posts, optionally restricted to one status.
    async fn count(&self, status: Option<PostStatus>) -> Result<u64, RepoError>;

    /// Published posts grouped by `(category, color)`, ordered by name then color.
    async fn categories(&self) -> Result<Vec<CategorySummary>, RepoError>;

    /// The `limit` most recent posts regardless of status.
    async fn recent(&self, limit: u64) -> Result<Vec<BlogPost>, RepoError>;
}
