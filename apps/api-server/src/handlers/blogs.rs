//! Blog post handlers - the `/api/blogs` resource.

use actix_web::{HttpResponse, web};

use carewell_core::domain::{BlogPostPatch, NewBlogPost, PostFilter, PostId, PostStatus};
use carewell_shared::MessageResponse;
use carewell_shared::dto::BlogQuery;

use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Treats `?id=` and friends the same as an absent parameter.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_id(raw: &str) -> AppResult<PostId> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid blog post id '{raw}'")))
}

fn required_id(query: &BlogQuery) -> AppResult<PostId> {
    let raw = non_empty(&query.id).ok_or_else(|| AppError::BadRequest("ID is required".to_string()))?;
    parse_id(raw)
}

/// GET /api/blogs
///
/// `type` wins over `id`, which wins over `category`/`status`.
pub async fn get_blogs(
    state: web::Data<AppState>,
    query: web::Query<BlogQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    match non_empty(&query.kind) {
        Some("stats") => {
            let stats = state.blog.dashboard_stats().await?;
            return Ok(HttpResponse::Ok().json(stats));
        }
        Some("categories") => {
            let categories = state.blog.categories().await?;
            return Ok(HttpResponse::Ok().json(categories));
        }
        Some(other) => tracing::debug!(kind = other, "Ignoring unknown query type"),
        None => {}
    }

    if let Some(raw) = non_empty(&query.id) {
        let id = parse_id(raw)?;
        let post = state
            .blog
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blog post {id} not found")))?;
        return Ok(HttpResponse::Ok().json(post));
    }

    let status = non_empty(&query.status)
        .map(str::parse::<PostStatus>)
        .transpose()?;

    let posts = match (non_empty(&query.category), status) {
        (Some(category), None) => state.blog.list_by_category(category).await?,
        (category, status) => {
            let filter = PostFilter {
                status,
                category: category.map(String::from),
            };
            state.blog.list(filter).await?
        }
    };

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/blogs
pub async fn create_blog(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<NewBlogPost>,
) -> AppResult<HttpResponse> {
    let post = state.blog.create(body.into_inner()).await?;
    tracing::debug!(admin = ?admin.subject, post_id = post.id, "Create request served");

    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/blogs?id=<n>
pub async fn update_blog(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    query: web::Query<BlogQuery>,
    body: web::Json<BlogPostPatch>,
) -> AppResult<HttpResponse> {
    let id = required_id(&query)?;
    let post = state.blog.update(id, body.into_inner()).await?;
    tracing::debug!(admin = ?admin.subject, post_id = id, "Update request served");

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/blogs?id=<n>
pub async fn delete_blog(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    query: web::Query<BlogQuery>,
) -> AppResult<HttpResponse> {
    let id = required_id(&query)?;
    state.blog.delete(id).await?;
    tracing::debug!(admin = ?admin.subject, post_id = id, "Delete request served");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog post deleted successfully")))
}
