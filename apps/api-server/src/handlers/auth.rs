//! Admin login handler.

use actix_web::{HttpResponse, web};

use carewell_core::ports::Credentials;
use carewell_shared::dto::{AuthResponse, LoginRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let Some(auth) = &state.auth else {
        return Err(AppError::NotFound(
            "Admin login is not configured on this server".to_string(),
        ));
    };

    let LoginRequest { username, password } = body.into_inner();
    let session = auth
        .authenticator
        .authenticate(&Credentials { username, password })
        .await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: session.token,
        token_type: "Bearer".to_string(),
        expires_in: session.expires_in.max(0) as u64,
    }))
}
