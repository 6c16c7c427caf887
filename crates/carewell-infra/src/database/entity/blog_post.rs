//! Blog post entity for SeaORM.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use carewell_core::domain::{BlogPost, BlogPostPatch, NewBlogPost, PostColor, PostStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Status {
    #[sea_orm(string_value = "Draft")]
    Draft,
    #[sea_orm(string_value = "Published")]
    Published,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Color {
    #[sea_orm(string_value = "pink")]
    Pink,
    #[sea_orm(string_value = "rose")]
    Rose,
    #[sea_orm(string_value = "fuchsia")]
    Fuchsia,
    #[sea_orm(string_value = "purple")]
    Purple,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub image: String,
    pub author: String,
    pub date: DateTimeWithTimeZone,
    pub category: String,
    pub read_time: String,
    pub color: Color,
    pub status: Status,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<PostStatus> for Status {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Draft => Status::Draft,
            PostStatus::Published => Status::Published,
        }
    }
}

impl From<Status> for PostStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Draft => PostStatus::Draft,
            Status::Published => PostStatus::Published,
        }
    }
}

impl From<PostColor> for Color {
    fn from(color: PostColor) -> Self {
        match color {
            PostColor::Pink => Color::Pink,
            PostColor::Rose => Color::Rose,
            PostColor::Fuchsia => Color::Fuchsia,
            PostColor::Purple => Color::Purple,
        }
    }
}

impl From<Color> for PostColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Pink => PostColor::Pink,
            Color::Rose => PostColor::Rose,
            Color::Fuchsia => PostColor::Fuchsia,
            Color::Purple => PostColor::Purple,
        }
    }
}

/// Conversion from SeaORM Model to domain BlogPost.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            excerpt: model.excerpt,
            content: model.content,
            image: model.image,
            author: model.author,
            date: model.date.into(),
            category: model.category,
            read_time: model.read_time,
            color: model.color.into(),
            status: model.status.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl ActiveModel {
    /// Insert model for a new post; `id` is left to the database sequence.
    pub fn from_new(post: NewBlogPost, now: DateTime<Utc>) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            excerpt: Set(post.excerpt),
            content: Set(post.content),
            image: Set(post.image),
            author: Set(post.author),
            date: Set(post.date.into()),
            category: Set(post.category),
            read_time: Set(post.read_time),
            color: Set(post.color.into()),
            status: Set(post.status.into()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }

    /// Mark the fields present in `patch` as changed.
    pub fn apply_patch(&mut self, patch: BlogPostPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = Set(title);
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = Set(excerpt);
        }
        if let Some(content) = patch.content {
            self.content = Set(content);
        }
        if let Some(image) = patch.image {
            self.image = Set(image);
        }
        if let Some(author) = patch.author {
            self.author = Set(author);
        }
        if let Some(date) = patch.date {
            self.date = Set(date.into());
        }
        if let Some(category) = patch.category {
            self.category = Set(category);
        }
        if let Some(read_time) = patch.read_time {
            self.read_time = Set(read_time);
        }
        if let Some(color) = patch.color {
            self.color = Set(color.into());
        }
        if let Some(status) = patch.status {
            self.status = Set(status.into());
        }
        self.updated_at = Set(now.into());
    }
}
