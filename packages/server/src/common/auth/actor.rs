use crate::common::entity_ids::UserId;
use crate::common::types::{AccountStatus, Role};

/// The authenticated caller of an action.
///
/// Built by the session middleware from a fresh users-table read, so role
/// and status reflect the row at request time, not at login time. Policy
/// decisions take this by reference; unauthenticated requests carry no
/// actor at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
    pub status: AccountStatus,
}

impl Actor {
    pub fn new(id: UserId, role: Role, status: AccountStatus) -> Self {
        Self { id, role, status }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}
