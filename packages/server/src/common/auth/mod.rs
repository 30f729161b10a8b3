/// Authorization module for CampusConnect
///
/// A single pure policy function is consulted by every action that touches
/// the content store:
///
/// ```rust,ignore
/// use crate::common::auth::{authorize, ResourceAction};
///
/// // In an action, before any write:
/// authorize(actor, ResourceAction::SetBlogStatus {
///     author_id: blog.author_id,
///     to: status,
/// })?;
/// ```
///
/// The policy takes the actor context and the minimum resource facts as
/// values, so it stays deterministic and testable without a session or a
/// database.
mod actor;
mod errors;
mod policy;

pub use actor::Actor;
pub use errors::AuthError;
pub use policy::{authorize, require_actor, ResourceAction};
