//! Local-filesystem store for identity document uploads.
//!
//! Files are content-addressed: the stored name is derived from a SHA-256
//! digest of the bytes, so re-uploading the same document is idempotent and
//! nothing user-controlled (like an original filename) ever reaches the
//! filesystem.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use super::traits::{BaseUploadStore, UploadError};
use crate::common::types::Role;

/// Maximum accepted upload size: 5 MB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Accepted MIME types mapped to the extension the file is stored under.
fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/webp" => Some("webp"),
        "application/pdf" => Some("pdf"),
        _ => None,
    }
}

pub struct LocalUploadStore {
    root: PathBuf,
}

impl LocalUploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl BaseUploadStore for LocalUploadStore {
    async fn store_id_document(
        &self,
        role: Role,
        content_type: &str,
        data: &[u8],
    ) -> Result<String, UploadError> {
        if data.is_empty() {
            return Err(UploadError::Empty);
        }
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                max_mb: MAX_UPLOAD_BYTES / (1024 * 1024),
            });
        }
        let ext = extension_for(content_type).ok_or(UploadError::UnsupportedType)?;

        let mut hasher = Sha256::new();
        hasher.update(data);
        let digest = format!("{:x}", hasher.finalize());

        // First 16 hex chars are plenty for uniqueness at this volume.
        let relative = format!("{}/{}.{}", role, &digest[..16], ext);
        let full_path = self.root.join(&relative);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&full_path, data).await?;

        Ok(relative)
    }
}
