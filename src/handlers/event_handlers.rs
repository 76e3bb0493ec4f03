//! HTTP handlers for event uploads and event log entries.
//!
//! Upload bodies are multipart/form-data as sent by the GraceDB REST client:
//! form fields (`group`, `pipeline`, `search`, `labels`, ...) plus the event
//! file, typically gzipped LIGO_LW XML. Parts are decoded and logged, never
//! validated.

use crate::{
    errors::AppError,
    models::event::{CreatedEvent, UploadPart},
    state::AppState,
};
use axum::{
    Json,
    extract::{
        FromRequest, Multipart, Path, Request, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::header,
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, info, warn};

/// `POST /api/events/` — create a new event.
///
/// Any multipart decode failure is answered with a 400 and leaves the
/// registry untouched.
pub async fn create_event(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut multipart = multipart?;
    let parts = read_parts(&mut multipart, "event upload").await?;

    let graceid = state.registry.create_event(parts);
    Ok(Json(CreatedEvent { graceid }))
}

/// `POST /api/events/{graceid}/log` — attach a log entry to an event.
///
/// The identifier is not checked against the registry and nothing is
/// stored. A multipart body is decoded for logging only; if it cannot be
/// decoded the entry is still acknowledged.
pub async fn create_log_entry(
    State(state): State<AppState>,
    Path(graceid): Path<String>,
    request: Request,
) -> impl IntoResponse {
    if is_multipart(&request) {
        match Multipart::from_request(request, &state).await {
            Ok(mut multipart) => match read_parts(&mut multipart, "log entry").await {
                Ok(parts) => {
                    info!(graceid = %graceid, parts = parts.len(), "Log entry for {}", graceid);
                }
                Err(err) => warn!(graceid = %graceid, "Undecodable log entry body: {}", err),
            },
            Err(rejection) => {
                warn!(graceid = %graceid, "Undecodable log entry body: {}", rejection)
            }
        }
    } else {
        info!(graceid = %graceid, "Log entry for {} without multipart body", graceid);
    }

    if state.registry.get(&graceid).is_none() {
        debug!(graceid = %graceid, "Log entry targets an identifier this server never issued");
    }

    Json(json!({}))
}

/// Drain every part of `multipart`, logging its headers and content
/// preview at INFO and keeping only a summary of each.
async fn read_parts(
    multipart: &mut Multipart,
    kind: &str,
) -> Result<Vec<UploadPart>, MultipartError> {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        info!("//// Multipart POST data for {} ////", kind);
        info!(headers = ?field.headers(), "Part headers");

        let name = field.name().map(str::to_owned);
        let filename = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let content = field.bytes().await?;

        let part = UploadPart::new(name, filename, content_type, &content);
        log_part(&part);
        parts.push(part);
    }
    Ok(parts)
}

fn log_part(part: &UploadPart) {
    info!(
        name = part.name.as_deref().unwrap_or(""),
        filename = part.filename.as_deref().unwrap_or(""),
        content_type = part.content_type.as_deref().unwrap_or(""),
        size_bytes = part.size_bytes,
        "{}",
        part.preview_text()
    );
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/"))
}
