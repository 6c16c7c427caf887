//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use carewell_core::domain::{
    BlogPost, BlogPostPatch, CategorySummary, NewBlogPost, PostFilter, PostId, PostStatus,
};
use carewell_core::error::RepoError;
use carewell_core::ports::BlogPostRepository;

use super::entity::blog_post::{ActiveModel, Color, Column, Entity as BlogPostEntity, Status};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

/// One row of the category aggregation query.
#[derive(Debug, FromQueryResult)]
struct CategoryRow {
    category: String,
    color: Color,
    count: i64,
}

/// Newest first, ties broken by id.
fn by_recency(query: Select<BlogPostEntity>) -> Select<BlogPostEntity> {
    query
        .order_by_desc(Column::Date)
        .order_by_desc(Column::Id)
}

fn filtered(filter: PostFilter) -> Select<BlogPostEntity> {
    let mut query = BlogPostEntity::find();
    if let Some(status) = filter.status {
        query = query.filter(Column::Status.eq(Status::from(status)));
    }
    if let Some(category) = filter.category {
        query = query.filter(Column::Category.eq(category));
    }
    query
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let model = ActiveModel::from_new(post, Utc::now())
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Inserted blog post");
        Ok(model.into())
    }

    async fn update(&self, id: PostId, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        let existing = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active: ActiveModel = existing.into_active_model();
        active.apply_patch(patch, Utc::now());

        let model = active.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn find_all(&self, filter: PostFilter) -> Result<Vec<BlogPost>, RepoError> {
        tracing::debug!(?filter, "Listing blog posts");

        let result = by_recency(filtered(filter))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self, status: Option<PostStatus>) -> Result<u64, RepoError> {
        let filter = PostFilter {
            status,
            ..PostFilter::default()
        };

        filtered(filter).count(&self.db).await.map_err(map_db_err)
    }

    async fn categories(&self) -> Result<Vec<CategorySummary>, RepoError> {
        let rows = BlogPostEntity::find()
            .select_only()
            .column(Column::Category)
            .column(Column::Color)
            .column_as(Column::Id.count(), "count")
            .filter(Column::Status.eq(Status::Published))
            .group_by(Column::Category)
            .group_by(Column::Color)
            .order_by_asc(Column::Category)
            .order_by_asc(Column::Color)
            .into_model::<CategoryRow>()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| CategorySummary {
                name: row.category,
                count: u64::try_from(row.count).unwrap_or_default(),
                color: row.color.into(),
            })
            .collect())
    }

    async fn recent(&self, limit: u64) -> Result<Vec<BlogPost>, RepoError> {
        let result = by_recency(BlogPostEntity::find())
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
