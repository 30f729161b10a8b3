//! Server dependencies for actions (using traits for testability)
//!
//! This module provides the central dependency container passed into every
//! domain action. External services sit behind trait abstractions so tests
//! can swap them.

use sqlx::PgPool;
use std::sync::Arc;

use super::traits::{BasePasswordHasher, BaseUploadStore};
use super::uploads::LocalUploadStore;
use crate::domains::auth::Argon2PasswordHasher;

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub password_hasher: Arc<dyn BasePasswordHasher>,
    pub uploads: Arc<dyn BaseUploadStore>,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        password_hasher: Arc<dyn BasePasswordHasher>,
        uploads: Arc<dyn BaseUploadStore>,
    ) -> Self {
        Self {
            db_pool,
            password_hasher,
            uploads,
        }
    }

    /// Dependencies wired for integration tests: the real hasher and an
    /// upload store rooted in the system temp directory.
    pub fn for_tests(db_pool: PgPool) -> Self {
        let upload_root = std::env::temp_dir().join("campusconnect-test-uploads");
        Self {
            db_pool,
            password_hasher: Arc::new(Argon2PasswordHasher::default()),
            uploads: Arc::new(LocalUploadStore::new(upload_root)),
        }
    }
}
