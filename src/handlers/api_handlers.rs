//! Handlers for the API root and for everything the server does not serve.
//!
//! - GET /api/  -> capability document
//! - anything else -> 404 with an empty body

use crate::{models::capabilities::Capabilities, state::AppState};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

/// `GET /api/`
///
/// Returns the fixed capability document. Only the embedded origin varies
/// between calls, so repeated requests through the same host are
/// byte-identical.
pub async fn api_root(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    let api_base = format!("{}/api/", state.origin_for(host));

    Json(Capabilities::for_base_url(
        &api_base,
        &state.config.server_version,
    ))
}

/// Routing miss: unknown path, or a known path with an unsupported method.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
