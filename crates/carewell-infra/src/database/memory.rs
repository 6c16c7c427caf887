//! In-memory blog post repository - used when no database is configured.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use carewell_core::domain::{
    BlogPost, BlogPostPatch, CategorySummary, NewBlogPost, PostColor, PostFilter, PostId,
    PostStatus,
};
use carewell_core::error::RepoError;
use carewell_core::ports::{BaseRepository, BlogPostRepository};

#[derive(Default)]
struct Store {
    posts: HashMap<PostId, BlogPost>,
    /// Last id handed out. Never decremented, so deleted ids are not reused.
    last_id: PostId,
}

/// Blog post store backed by a HashMap behind an async RwLock.
///
/// Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryBlogPostRepository {
    store: RwLock<Store>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted<'a>(posts: impl Iterator<Item = &'a BlogPost>) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = posts.cloned().collect();
        posts.sort_by(BlogPost::recency_cmp);
        posts
    }
}

#[async_trait]
impl BaseRepository<BlogPost, PostId> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("Post id sequence exhausted".to_string()))?;
        store.last_id = id;

        let post = BlogPost::from_new(id, post, Utc::now());
        store.posts.insert(id, post.clone());

        tracing::debug!(post_id = id, "Inserted blog post (in-memory)");
        Ok(post)
    }

    async fn update(&self, id: PostId, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        let post = store.posts.get_mut(&id).ok_or(RepoError::NotFound)?;

        post.apply(patch, Utc::now());
        Ok(post.clone())
    }

    async fn find_all(&self, filter: PostFilter) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(Self::sorted(
            store.posts.values().filter(|post| filter.matches(post)),
        ))
    }

    async fn count(&self, status: Option<PostStatus>) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        let count = store
            .posts
            .values()
            .filter(|post| status.is_none_or(|s| post.status == s))
            .count();
        Ok(count as u64)
    }

    async fn categories(&self) -> Result<Vec<CategorySummary>, RepoError> {
        let store = self.store.read().await;

        // Keyed by the color's stored name so ordering matches the SQL query.
        let mut groups: BTreeMap<(String, &'static str), (PostColor, u64)> = BTreeMap::new();
        for post in store.posts.values().filter(|p| p.is_published()) {
            groups
                .entry((post.category.clone(), post.color.as_str()))
                .or_insert((post.color, 0))
                .1 += 1;
        }

        Ok(groups
            .into_iter()
            .map(|((name, _), (color, count))| CategorySummary { name, count, color })
            .collect())
    }

    async fn recent(&self, limit: u64) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        let mut posts = Self::sorted(store.posts.values());
        posts.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};
    use std::collections::HashSet;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, d, 10, 0, 0).unwrap()
    }

    fn new_post(title: &str, category: &str, color: PostColor, status: PostStatus) -> NewBlogPost {
        NewBlogPost {
            title: title.to_string(),
            excerpt: format!("{title} excerpt"),
            content: format!("{title} content"),
            image: "/uploads/cover.png".to_string(),
            author: "Dr. Sarah Johnson".to_string(),
            date: day(1),
            category: category.to_string(),
            read_time: "4 min read".to_string(),
            color,
            status,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let repo = InMemoryBlogPostRepository::new();
        let mut ids = HashSet::new();

        for i in 0..5 {
            let post = repo
                .create(new_post(&format!("Post {i}"), "Fertility", PostColor::Rose, PostStatus::Draft))
                .await
                .unwrap();
            assert!(ids.insert(post.id));
        }
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let repo = InMemoryBlogPostRepository::new();
        let first = repo
            .create(new_post("First", "Surgery", PostColor::Pink, PostStatus::Draft))
            .await
            .unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo
            .create(new_post("Second", "Surgery", PostColor::Pink, PostStatus::Draft))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_find_by_id_round_trip() {
        let repo = InMemoryBlogPostRepository::new();
        let input = new_post("Menopause basics", "Menopause", PostColor::Fuchsia, PostStatus::Published);

        let created = repo.create(input.clone()).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(found, created);
        assert_eq!(found.title, input.title);
        assert_eq!(found.excerpt, input.excerpt);
        assert_eq!(found.content, input.content);
        assert_eq!(found.image, input.image);
        assert_eq!(found.date, input.date);
        assert_eq!(found.read_time, input.read_time);
        assert_eq!(found.color, input.color);
        assert_eq!(found.status, input.status);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = InMemoryBlogPostRepository::new();
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_changes_only_given_field() {
        let repo = InMemoryBlogPostRepository::new();
        let created = repo
            .create(new_post("Original", "Pregnancy", PostColor::Pink, PostStatus::Draft))
            .await
            .unwrap();

        let patch = BlogPostPatch {
            excerpt: Some("New excerpt".to_string()),
            ..BlogPostPatch::default()
        };
        repo.update(created.id, patch).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.excerpt, "New excerpt");
        assert_eq!(found.title, created.title);
        assert_eq!(found.content, created.content);
        assert_eq!(found.date, created.date);
        assert_eq!(found.status, created.status);
        assert_eq!(found.created_at, created.created_at);
        assert!(found.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_delete_then_find_and_update_not_found() {
        let repo = InMemoryBlogPostRepository::new();
        let created = repo
            .create(new_post("Short lived", "Surgery", PostColor::Purple, PostStatus::Draft))
            .await
            .unwrap();

        repo.delete(created.id).await.unwrap();

        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        let result = repo
            .update(created.id, BlogPostPatch::status(PostStatus::Published))
            .await;
        assert!(matches!(result, Err(RepoError::NotFound)));
        assert!(matches!(repo.delete(created.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_status_counts_partition_total() {
        let repo = InMemoryBlogPostRepository::new();
        for (i, status) in [PostStatus::Draft, PostStatus::Published, PostStatus::Published]
            .into_iter()
            .enumerate()
        {
            repo.create(new_post(&format!("P{i}"), "Health Tips", PostColor::Pink, status))
                .await
                .unwrap();
        }

        let total = repo.count(None).await.unwrap();
        let published = repo.count(Some(PostStatus::Published)).await.unwrap();
        let draft = repo.count(Some(PostStatus::Draft)).await.unwrap();

        assert_eq!(total, 3);
        assert_eq!(published, 2);
        assert_eq!(published + draft, total);
    }

    #[tokio::test]
    async fn test_published_listing_excludes_drafts() {
        let repo = InMemoryBlogPostRepository::new();
        repo.create(new_post("Draft", "Fertility", PostColor::Rose, PostStatus::Draft))
            .await
            .unwrap();
        repo.create(new_post("Live", "Fertility", PostColor::Rose, PostStatus::Published))
            .await
            .unwrap();

        let all = repo.find_all(PostFilter::default()).await.unwrap();
        let published = repo.find_all(PostFilter::published()).await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(published.len(), 1);
        assert!(published.iter().all(BlogPost::is_published));
        assert!(published.iter().all(|p| all.contains(p)));
    }

    #[tokio::test]
    async fn test_find_by_category_exact_match() {
        let repo = InMemoryBlogPostRepository::new();
        repo.create(new_post("A", "Surgery", PostColor::Pink, PostStatus::Draft))
            .await
            .unwrap();
        repo.create(new_post("B", "surgery", PostColor::Pink, PostStatus::Published))
            .await
            .unwrap();

        let posts = repo.find_by_category("Surgery").await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "A");
    }

    #[tokio::test]
    async fn test_category_appears_once_published() {
        let repo = InMemoryBlogPostRepository::new();
        let post = repo
            .create(new_post("Morning sickness", "Pregnancy", PostColor::Pink, PostStatus::Draft))
            .await
            .unwrap();

        let categories = repo.categories().await.unwrap();
        assert!(categories.iter().all(|c| c.name != "Pregnancy"));

        repo.update(post.id, BlogPostPatch::status(PostStatus::Published))
            .await
            .unwrap();

        let categories = repo.categories().await.unwrap();
        assert_eq!(
            categories,
            vec![CategorySummary {
                name: "Pregnancy".to_string(),
                count: 1,
                color: PostColor::Pink,
            }]
        );
    }

    #[tokio::test]
    async fn test_categories_group_by_name_and_color() {
        let repo = InMemoryBlogPostRepository::new();
        for (category, color) in [
            ("Surgery", PostColor::Pink),
            ("Surgery", PostColor::Pink),
            ("Surgery", PostColor::Purple),
            ("Fertility", PostColor::Rose),
        ] {
            repo.create(new_post("x", category, color, PostStatus::Published))
                .await
                .unwrap();
        }

        let categories = repo.categories().await.unwrap();
        let summary: Vec<(&str, u64, PostColor)> = categories
            .iter()
            .map(|c| (c.name.as_str(), c.count, c.color))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Fertility", 1, PostColor::Rose),
                ("Surgery", 2, PostColor::Pink),
                ("Surgery", 1, PostColor::Purple),
            ]
        );
    }

    #[tokio::test]
    async fn test_recent_returns_latest_by_date() {
        let repo = InMemoryBlogPostRepository::new();
        for d in [3, 1, 5, 2, 4] {
            let mut post = new_post(&format!("Day {d}"), "Health Tips", PostColor::Pink, PostStatus::Draft);
            post.date = day(d);
            repo.create(post).await.unwrap();
        }

        let recent = repo.recent(3).await.unwrap();
        let dates: Vec<DateTime<Utc>> = recent.iter().map(|p| p.date).collect();

        assert_eq!(dates, vec![day(5), day(4), day(3)]);
    }

    #[tokio::test]
    async fn test_listing_ties_ordered_by_id_desc() {
        let repo = InMemoryBlogPostRepository::new();
        let a = repo
            .create(new_post("A", "Surgery", PostColor::Pink, PostStatus::Published))
            .await
            .unwrap();
        let b = repo
            .create(new_post("B", "Surgery", PostColor::Pink, PostStatus::Published))
            .await
            .unwrap();

        let ids: Vec<PostId> = repo
            .find_all(PostFilter::default())
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![b.id, a.id]);
    }

    mod service {
        use std::sync::Arc;

        use super::*;
        use carewell_core::{BlogService, DomainError};

        fn service() -> BlogService {
            BlogService::new(Arc::new(InMemoryBlogPostRepository::new()))
        }

        #[tokio::test]
        async fn test_dashboard_stats_limits_recent_to_three() {
            let blog = service();
            for d in 1..=5 {
                let mut post = new_post(&format!("Day {d}"), "Pregnancy", PostColor::Pink, PostStatus::Published);
                post.date = day(d);
                if d % 2 == 0 {
                    post.status = PostStatus::Draft;
                }
                blog.create(post).await.unwrap();
            }

            let stats = blog.dashboard_stats().await.unwrap();

            assert_eq!(stats.total_posts, 5);
            assert_eq!(stats.published_posts, 3);
            assert_eq!(stats.draft_posts, 2);
            let titles: Vec<&str> = stats.recent_blogs.iter().map(|p| p.title.as_str()).collect();
            assert_eq!(titles, vec!["Day 5", "Day 4", "Day 3"]);
        }

        #[tokio::test]
        async fn test_create_replaces_blank_image_with_placeholder() {
            let blog = service();
            let mut post = new_post("No cover", "Surgery", PostColor::Purple, PostStatus::Draft);
            post.image = "  ".to_string();

            let created = blog.create(post).await.unwrap();

            assert_eq!(created.image, carewell_core::domain::PLACEHOLDER_IMAGE);
        }

        #[tokio::test]
        async fn test_update_replaces_blank_image_with_placeholder() {
            let blog = service();
            let mut post = new_post("Cover removed", "Surgery", PostColor::Rose, PostStatus::Draft);
            post.image = "/uploads/cover.png".to_string();
            let created = blog.create(post).await.unwrap();

            let patch = BlogPostPatch {
                image: Some(String::new()),
                ..BlogPostPatch::default()
            };
            let updated = blog.update(created.id, patch).await.unwrap();

            assert_eq!(updated.image, carewell_core::domain::PLACEHOLDER_IMAGE);
            assert_eq!(updated.title, "Cover removed");
        }

        #[tokio::test]
        async fn test_update_missing_maps_to_domain_not_found() {
            let blog = service();

            let result = blog.update(404, BlogPostPatch::default()).await;

            assert!(matches!(result, Err(DomainError::NotFound { id: 404, .. })));
        }

        #[tokio::test]
        async fn test_seed_only_when_empty() {
            let blog = service();

            let seeded = blog.seed_sample_post().await.unwrap().unwrap();
            assert_eq!(seeded.status, PostStatus::Published);
            assert_eq!(seeded.category, "Health Tips");

            assert!(blog.seed_sample_post().await.unwrap().is_none());
            assert_eq!(blog.total_posts().await.unwrap(), 1);
        }
    }
}
