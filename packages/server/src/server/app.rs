//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::auth::SessionStore;
use crate::server::middleware::session_auth_middleware;
use crate::server::routes::{actions_handler, health_handler, upload_id_document_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: ServerDeps,
    pub sessions: Arc<SessionStore>,
}

/// Body size cap. Leaves headroom over the stored-file limit for multipart
/// framing; JSON action bodies never come close.
const BODY_LIMIT_BYTES: usize = 6 * 1024 * 1024;

/// Time budget per request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the Axum application with all routes and middleware
pub fn build_app(
    deps: ServerDeps,
    sessions: Arc<SessionStore>,
    cors_allow_origin: Option<&str>,
) -> Router {
    let app_state = AppState { deps, sessions };

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/actions", post(actions_handler))
        .route("/api/uploads/id-document", post(upload_id_document_handler))
        // Middleware layers are applied in reverse order - last added runs first
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_auth_middleware,
        ))
        .layer(Extension(app_state))
        .layer(cors_layer(cors_allow_origin))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
}

/// Locked to the configured origin when one is set, permissive otherwise.
fn cors_layer(allow_origin: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    match allow_origin.and_then(|origin| origin.parse::<HeaderValue>().ok()) {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    }
}
