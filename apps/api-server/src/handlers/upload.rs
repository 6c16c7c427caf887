//! Image upload handler.

use actix_multipart::{Multipart, MultipartError};
use actix_web::{HttpResponse, web};
use futures::TryStreamExt;

use carewell_shared::dto::UploadResponse;

use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Form field carrying the image.
const FILE_FIELD: &str = "file";

fn bad_multipart(err: MultipartError) -> AppError {
    AppError::BadRequest(format!("Invalid multipart body: {}", err))
}

/// POST /api/upload
///
/// Stores the `file` field and returns its public URL. Other fields are skipped.
pub async fn upload_image(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> AppResult<HttpResponse> {
    while let Some(mut field) = payload.try_next().await.map_err(bad_multipart)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(bad_multipart)? {
            if bytes.len() + chunk.len() > state.upload_max_bytes {
                return Err(AppError::BadRequest(format!(
                    "File exceeds the upload limit of {} bytes",
                    state.upload_max_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        let url = state.images.store(&file_name, &bytes).await?;
        tracing::info!(admin = ?admin.subject, %url, "Image uploaded");

        return Ok(HttpResponse::Ok().json(UploadResponse { url }));
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};
    use serde_json::Value;

    use carewell_infra::{InMemoryBlogPostRepository, LocalImageStore, StorageConfig};

    use crate::handlers::configure_app;
    use crate::state::AppState;

    const BOUNDARY: &str = "carewell-boundary";

    fn state_in(dir: &std::path::Path, limit: usize) -> AppState {
        let images = LocalImageStore::new(StorageConfig {
            upload_dir: dir.to_path_buf(),
            public_prefix: "/uploads".to_string(),
        });
        AppState::from_parts(
            Arc::new(InMemoryBlogPostRepository::new()),
            Arc::new(images),
            None,
            limit,
        )
    }

    fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/upload")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
    }

    #[actix_rt::test]
    async fn test_upload_stores_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new().configure(configure_app(web::Data::new(state_in(dir.path(), 1024)))),
        )
        .await;

        let resp = test::call_service(
            &app,
            upload_request(multipart_body("file", "ultrasound.PNG", b"fake image bytes"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let url = body["url"].as_str().unwrap();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));

        let name = url.trim_start_matches("/uploads/");
        let stored = std::fs::read(dir.path().join(name)).unwrap();
        assert_eq!(stored, b"fake image bytes");
    }

    #[actix_rt::test]
    async fn test_upload_without_file_field_is_400() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new().configure(configure_app(web::Data::new(state_in(dir.path(), 1024)))),
        )
        .await;

        let resp = test::call_service(
            &app,
            upload_request(multipart_body("avatar", "me.jpg", b"bytes")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_upload_over_limit_is_400() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new().configure(configure_app(web::Data::new(state_in(dir.path(), 4)))),
        )
        .await;

        let resp = test::call_service(
            &app,
            upload_request(multipart_body("file", "big.jpg", b"way more than four bytes"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
