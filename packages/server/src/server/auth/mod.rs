// Session issuance and lookup for the HTTP layer
pub mod session;

pub use session::{Session, SessionStore, SessionToken};
