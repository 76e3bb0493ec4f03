//! Candidate events as the registry remembers them.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Number of leading content bytes kept from each uploaded part.
pub const PREVIEW_LEN: usize = 100;

/// Response body for a successful `POST /api/events/`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CreatedEvent {
    pub graceid: String,
}

/// Summary of one decoded part of a multipart upload.
///
/// Only the part headers and the first [`PREVIEW_LEN`] bytes survive; the
/// payload itself (usually gzipped LIGO_LW XML) is dropped.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UploadPart {
    /// Form field name, e.g. `graceid`, `group`, `eventFile`.
    pub name: Option<String>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub size_bytes: usize,
    pub preview: Vec<u8>,
}

impl UploadPart {
    pub fn new(
        name: Option<String>,
        filename: Option<String>,
        content_type: Option<String>,
        content: &Bytes,
    ) -> Self {
        let end = content.len().min(PREVIEW_LEN);
        Self {
            name,
            filename,
            content_type,
            size_bytes: content.len(),
            preview: content[..end].to_vec(),
        }
    }

    /// Preview rendered for logs, with non-UTF-8 bytes escaped.
    pub fn preview_text(&self) -> String {
        self.preview.escape_ascii().to_string()
    }
}

/// The opaque upload record stored per issued identifier.
#[derive(Serialize, Clone, Debug)]
pub struct EventRecord {
    pub graceid: String,
    pub created: DateTime<Utc>,
    pub parts: Vec<UploadPart>,
}
