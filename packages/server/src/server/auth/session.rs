use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::UserId;

/// Session token (random UUID)
pub type SessionToken = String;

/// Session data stored after a successful login
#[derive(Clone, Debug)]
pub struct Session {
    pub user_id: UserId,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// In-memory session store
///
/// Sessions expire `ttl_hours` after creation. Lookups treat expired
/// entries as absent; `cleanup_expired` reclaims them.
pub struct SessionStore {
    ttl_hours: i64,
    sessions: RwLock<HashMap<SessionToken, Session>>,
}

impl SessionStore {
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            ttl_hours,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a new session and return the token
    pub async fn create_session(&self, user_id: UserId) -> SessionToken {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id,
            created_at: chrono::Utc::now(),
        };
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        token
    }

    /// Get session by token
    pub async fn get_session(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(token)?;

        let now = chrono::Utc::now();
        let elapsed = now.signed_duration_since(session.created_at);
        if elapsed.num_hours() >= self.ttl_hours {
            // Session expired
            return None;
        }

        Some(session.clone())
    }

    /// Delete session (logout). Unknown tokens are a no-op.
    pub async fn delete_session(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Drop every session a user holds. Used on account deletion and
    /// deactivation so stale tokens stop resolving immediately.
    pub async fn delete_sessions_for(&self, user_id: UserId) {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| session.user_id != user_id);
    }

    /// Clean up expired sessions (run periodically)
    pub async fn cleanup_expired(&self) {
        let mut sessions = self.sessions.write().await;
        let now = chrono::Utc::now();

        let ttl_hours = self.ttl_hours;
        sessions.retain(|_, session| {
            now.signed_duration_since(session.created_at).num_hours() < ttl_hours
        });
    }
}
