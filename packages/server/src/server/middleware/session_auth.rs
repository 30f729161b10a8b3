use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::common::types::AccountStatus;
use crate::common::Actor;
use crate::domains::users::User;
use crate::server::app::AppState;

/// Authentication context resolved once per request.
///
/// `actor` is `None` for anonymous requests, unknown or expired tokens, and
/// tokens whose user row is gone or deactivated. `token` keeps the presented
/// credential around so logout can revoke exactly the session that
/// authenticated the request.
#[derive(Clone, Debug, Default)]
pub struct AuthContext {
    pub actor: Option<Actor>,
    pub token: Option<String>,
}

/// Middleware to resolve the session token to an actor
///
/// This middleware:
/// 1. Extracts the session token from the Authorization header
/// 2. Looks up the session in the SessionStore
/// 3. Re-reads the user row, so role and status changes apply immediately
/// 4. Stores an AuthContext in request extensions
///
/// Note: This middleware does NOT block requests - it only extracts auth
/// info. Authorization checks happen in the domain actions.
pub async fn session_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = resolve_context(bearer_token(&request), &state).await;
    request.extensions_mut().insert(context);

    next.run(request).await
}

// Takes the token rather than `&Request`: holding a `&Request<Body>` across
// the awaits would make the middleware future non-`Send` (`Body` is `!Sync`).
async fn resolve_context(token: Option<&str>, state: &AppState) -> AuthContext {
    let Some(token) = token else {
        return AuthContext::default();
    };

    let mut context = AuthContext {
        actor: None,
        token: Some(token.to_string()),
    };

    let Some(session) = state.sessions.get_session(token).await else {
        return context;
    };

    // Fresh read: a deleted or deactivated user stops acting immediately,
    // even while holding a live token.
    let user = match User::find_by_id(session.user_id, &state.deps.db_pool).await {
        Ok(found) => found,
        Err(err) => {
            warn!(error = %err, "Failed to resolve session user");
            None
        }
    };

    context.actor = user
        .filter(|user| user.status == AccountStatus::Active)
        .map(|user| user.actor());

    context
}

/// Extract the bearer token from the Authorization header
fn bearer_token(request: &Request) -> Option<&str> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    Some(auth_str.strip_prefix("Bearer ").unwrap_or(auth_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_auth(value: &str) -> Request {
        Request::builder()
            .header("authorization", value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_bearer_token_strips_prefix() {
        let request = request_with_auth("Bearer abc-123");
        assert_eq!(bearer_token(&request), Some("abc-123"));
    }

    #[test]
    fn test_bearer_token_accepts_bare_token() {
        let request = request_with_auth("abc-123");
        assert_eq!(bearer_token(&request), Some("abc-123"));
    }

    #[test]
    fn test_bearer_token_absent_without_header() {
        let request = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(bearer_token(&request), None);
    }
}
