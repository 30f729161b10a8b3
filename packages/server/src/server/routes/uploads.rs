//! Identity-document upload endpoint.

use axum::{
    extract::{Extension, Multipart},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::common::types::Role;
use crate::common::{ApiError, ApiResult};
use crate::server::app::AppState;

/// Accepts a multipart form with a `role` text field and a `file` field and
/// returns the stored relative path.
///
/// Registration happens after the upload, so this endpoint is deliberately
/// unauthenticated; the store enforces the size and type limits before
/// anything is written.
pub async fn upload_id_document_handler(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let mut role: Option<Role> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("role") => {
                let text = field.text().await?;
                role = Some(parse_role(&text)?);
            }
            Some("file") => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await?;
                file = Some((content_type, data.to_vec()));
            }
            _ => {}
        }
    }

    let role = role.ok_or_else(|| ApiError::Validation("Role is required.".to_string()))?;
    let (content_type, data) =
        file.ok_or_else(|| ApiError::Validation("A document file is required.".to_string()))?;

    let path = state
        .deps
        .uploads
        .store_id_document(role, &content_type, &data)
        .await?;

    info!(%role, path = %path, bytes = data.len(), "Stored identity document");

    Ok(Json(json!({ "success": true, "path": path })))
}

/// Uploads predate registration, so the role arrives as a bare form value.
fn parse_role(value: &str) -> ApiResult<Role> {
    match value.trim().to_lowercase().as_str() {
        "student" => Ok(Role::Student),
        "mentor" => Ok(Role::Mentor),
        _ => Err(ApiError::Validation(
            "Role must be student or mentor.".to_string(),
        )),
    }
}
