use std::sync::Arc;

use chrono::Utc;

use crate::domain::{
    BlogPost, BlogPostPatch, CategorySummary, DashboardStats, NewBlogPost, PLACEHOLDER_IMAGE,
    PostColor, PostFilter, PostId, PostStatus,
};
use crate::error::{DomainError, RepoError};
use crate::ports::BlogPostRepository;

/// Number of recent posts shown on the admin dashboard.
pub const DASHBOARD_RECENT_LIMIT: u64 = 3;

const ENTITY: &str = "BlogPost";

/// Blog operations used by the HTTP layer.
#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn BlogPostRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self { posts }
    }

    pub async fn create(&self, mut data: NewBlogPost) -> Result<BlogPost, DomainError> {
        if data.image.trim().is_empty() {
            data.image = PLACEHOLDER_IMAGE.to_string();
        }

        let post = self.posts.create(data).await?;
        tracing::info!(post_id = post.id, status = %post.status, "Blog post created");
        Ok(post)
    }

    pub async fn get(&self, id: PostId) -> Result<Option<BlogPost>, DomainError> {
        Ok(self.posts.find_by_id(id).await?)
    }

    pub async fn list(&self, filter: PostFilter) -> Result<Vec<BlogPost>, DomainError> {
        Ok(self.posts.find_all(filter).await?)
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<BlogPost>, DomainError> {
        Ok(self.posts.find_by_category(category).await?)
    }

    pub async fn update(
        &self,
        id: PostId,
        mut patch: BlogPostPatch,
    ) -> Result<BlogPost, DomainError> {
        if patch.image.as_deref().is_some_and(|image| image.trim().is_empty()) {
            patch.image = Some(PLACEHOLDER_IMAGE.to_string());
        }

        let post = self
            .posts
            .update(id, patch)
            .await
            .map_err(|e| not_found_or(e, id))?;
        tracing::info!(post_id = id, "Blog post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: PostId) -> Result<(), DomainError> {
        self.posts
            .delete(id)
            .await
            .map_err(|e| not_found_or(e, id))?;
        tracing::info!(post_id = id, "Blog post deleted");
        Ok(())
    }

    pub async fn categories(&self) -> Result<Vec<CategorySummary>, DomainError> {
        Ok(self.posts.categories().await?)
    }

    pub async fn total_posts(&self) -> Result<u64, DomainError> {
        Ok(self.posts.count(None).await?)
    }

    pub async fn published_posts_count(&self) -> Result<u64, DomainError> {
        Ok(self.posts.count(Some(PostStatus::Published)).await?)
    }

    pub async fn draft_posts_count(&self) -> Result<u64, DomainError> {
        Ok(self.posts.count(Some(PostStatus::Draft)).await?)
    }

    pub async fn recent(&self, limit: u64) -> Result<Vec<BlogPost>, DomainError> {
        Ok(self.posts.recent(limit).await?)
    }

    /// Counts plus the latest posts, drafts included so editors see their own work.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, DomainError> {
        Ok(DashboardStats {
            total_posts: self.total_posts().await?,
            published_posts: self.published_posts_count().await?,
            draft_posts: self.draft_posts_count().await?,
            recent_blogs: self.recent(DASHBOARD_RECENT_LIMIT).await?,
        })
    }

    /// Insert the welcome post when the store is empty.
    pub async fn seed_sample_post(&self) -> Result<Option<BlogPost>, DomainError> {
        if self.total_posts().await? > 0 {
            tracing::debug!("Blog already has posts, skipping seed");
            return Ok(None);
        }

        let post = self
            .create(NewBlogPost {
                title: "Welcome to Our Health Blog".to_string(),
                excerpt: "Your trusted source for women's health information and expert advice."
                    .to_string(),
                content: "Welcome to our health blog! Here you'll find valuable information about \
                          women's health, expert advice, and the latest medical insights."
                    .to_string(),
                image: PLACEHOLDER_IMAGE.to_string(),
                author: "Dr. Sarah Johnson".to_string(),
                date: Utc::now(),
                category: "Health Tips".to_string(),
                read_time: "2 min read".to_string(),
                color: PostColor::Pink,
                status: PostStatus::Published,
            })
            .await?;

        Ok(Some(post))
    }
}

fn not_found_or(err: RepoError, id: PostId) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: ENTITY,
            id,
        },
        other => DomainError::Repository(other),
    }
}
