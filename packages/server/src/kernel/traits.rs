// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "who may publish") lives in domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BasePasswordHasher)

use async_trait::async_trait;

use crate::common::types::Role;

// =============================================================================
// Password hashing (Infrastructure - credential storage)
// =============================================================================

/// Hashes and verifies passwords. The stored hash format is opaque to the
/// rest of the application.
pub trait BasePasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> anyhow::Result<String>;

    /// Constant-time verification against a stored hash. Malformed stored
    /// hashes verify as false rather than erroring.
    fn verify(&self, password: &str, password_hash: &str) -> bool;
}

// =============================================================================
// Upload storage (Infrastructure - identity document files)
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("The uploaded file is empty.")]
    Empty,

    #[error("File is too large. Maximum size is {max_mb} MB.")]
    TooLarge { max_mb: usize },

    #[error("Unsupported file type. Use PNG, JPG, WEBP, or PDF.")]
    UnsupportedType,

    #[error("Failed to store the uploaded file")]
    Io(#[from] std::io::Error),
}

impl From<UploadError> for crate::common::ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Io(io) => crate::common::ApiError::Persistence(io.into()),
            other => crate::common::ApiError::Validation(other.to_string()),
        }
    }
}

/// Stores raw identity-document uploads and returns a relative path the
/// register action may persist on the user row.
///
/// Implementations enforce the acceptance rules (size cap, MIME allowlist)
/// before writing anything.
#[async_trait]
pub trait BaseUploadStore: Send + Sync {
    async fn store_id_document(
        &self,
        role: Role,
        content_type: &str,
        data: &[u8],
    ) -> Result<String, UploadError>;
}
