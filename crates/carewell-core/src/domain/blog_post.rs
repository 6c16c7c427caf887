use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::post_date;
use crate::error::DomainError;

/// Identifier of a blog post. Assigned by the store, never reused.
pub type PostId = i32;

/// Image shown for posts created without one.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Publication state of a post. Only published posts appear in public listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PostStatus {
    #[default]
    #[serde(alias = "draft")]
    Draft,
    #[serde(alias = "published")]
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Published => "Published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" | "draft" => Ok(PostStatus::Draft),
            "Published" | "published" => Ok(PostStatus::Published),
            other => Err(DomainError::Validation(format!(
                "Unknown status '{other}', expected Draft or Published"
            ))),
        }
    }
}

/// Presentation theme tag. Carries no business meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostColor {
    Pink,
    Rose,
    Fuchsia,
    Purple,
}

impl PostColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostColor::Pink => "pink",
            PostColor::Rose => "rose",
            PostColor::Fuchsia => "fuchsia",
            PostColor::Purple => "purple",
        }
    }
}

impl fmt::Display for PostColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BlogPost entity - a single article of the hospital blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub category: String,
    pub read_time: String,
    pub color: PostColor,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Build a persisted post from creation data and store-assigned fields.
    pub fn from_new(id: PostId, data: NewBlogPost, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: data.title,
            excerpt: data.excerpt,
            content: data.content,
            image: data.image,
            author: data.author,
            date: data.date,
            category: data.category,
            read_time: data.read_time,
            color: data.color,
            status: data.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the provided fields of `patch` into this post and refresh `updated_at`.
    pub fn apply(&mut self, patch: BlogPostPatch, now: DateTime<Utc>) {
        let BlogPostPatch {
            title,
            excerpt,
            content,
            image,
            author,
            date,
            category,
            read_time,
            color,
            status,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(excerpt) = excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(image) = image {
            self.image = image;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(read_time) = read_time {
            self.read_time = read_time;
        }
        if let Some(color) = color {
            self.color = color;
        }
        if let Some(status) = status {
            self.status = status;
        }
        self.updated_at = now;
    }

    /// Canonical listing order: newest `date` first, ties broken by higher `id`.
    pub fn recency_cmp(&self, other: &Self) -> Ordering {
        other
            .date
            .cmp(&self.date)
            .then_with(|| other.id.cmp(&self.id))
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

fn placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// Data for creating a post. `id` and record timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default = "placeholder_image")]
    pub image: String,
    pub author: String,
    #[serde(default = "Utc::now", deserialize_with = "post_date::deserialize")]
    pub date: DateTime<Utc>,
    pub category: String,
    pub read_time: String,
    pub color: PostColor,
    #[serde(default)]
    pub status: PostStatus,
}

/// Partial update. Every field is independently replaceable; absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub author: Option<String>,
    #[serde(deserialize_with = "post_date::deserialize_optional")]
    pub date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub read_time: Option<String>,
    pub color: Option<PostColor>,
    pub status: Option<PostStatus>,
}

impl BlogPostPatch {
    pub fn status(status: PostStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Equality filters for listings. Empty filter matches every post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub status: Option<PostStatus>,
    pub category: Option<String>,
}

impl PostFilter {
    pub fn published() -> Self {
        Self::default().with_status(PostStatus::Published)
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        self.status.is_none_or(|s| post.status == s)
            && self.category.as_deref().is_none_or(|c| post.category == c)
    }
}
