//! Mentorship domain actions - business logic functions

mod mutations;
mod queries;

pub use mutations::*;
pub use queries::*;
