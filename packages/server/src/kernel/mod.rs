//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod traits;
pub mod uploads;

pub use deps::ServerDeps;
pub use traits::{BasePasswordHasher, BaseUploadStore, UploadError};
pub use uploads::LocalUploadStore;
