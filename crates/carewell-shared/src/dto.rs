//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Query string of `/api/blogs`.
///
/// Values are kept as raw strings; the handler validates them so a malformed
/// `id` or `status` produces a descriptive 400 instead of a generic parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Request to login as administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response containing an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Response of a successful image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}
