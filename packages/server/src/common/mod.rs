// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod error;
pub mod id;
pub mod pagination;
pub mod types;
pub mod utils;
pub mod validate;

pub use auth::{authorize, require_actor, Actor, AuthError, ResourceAction};
pub use entity_ids::*;
pub use error::{ApiError, ApiResult};
pub use id::{Id, V4, V7};
pub use pagination::{PageArgs, ValidatedPageArgs};
pub use types::*;
