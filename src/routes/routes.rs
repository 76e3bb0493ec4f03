//! Route table for the fake GraceDB API.
//!
//! ## Structure
//! - `GET  /api/`                     — capability document
//! - `POST /api/events/`              — create event, returns `{"graceid": ...}`
//! - `POST /api/events/{graceid}/log` — add log entry, returns `{}`
//!   (also with a trailing `/`, which is what the advertised template uses)
//!
//! Every other path, and every other method on these paths, is a 404 with
//! an empty body.

use crate::{
    handlers::{
        api_handlers::{api_root, not_found},
        event_handlers::{create_event, create_log_entry},
    },
    state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Build the route table. Handlers receive `AppState`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/", get(api_root).fallback(not_found))
        .route("/api/events/", post(create_event).fallback(not_found))
        .route(
            "/api/events/{graceid}/log",
            post(create_log_entry).fallback(not_found),
        )
        .route(
            "/api/events/{graceid}/log/",
            post(create_log_entry).fallback(not_found),
        )
        .fallback(not_found)
}

/// Attach state and middleware, producing the service handed to `axum::serve`.
pub fn app(state: AppState) -> Router {
    with_middleware(routes(), state)
}

/// Wrap `router` in the body limit, panic isolation and request tracing,
/// then attach `state`.
///
/// A panicking handler becomes a 500 for that request only.
pub fn with_middleware(router: Router<AppState>, state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;
    router
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
