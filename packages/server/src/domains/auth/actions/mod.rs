//! Auth domain actions - business logic functions

mod mutations;

pub use mutations::*;
