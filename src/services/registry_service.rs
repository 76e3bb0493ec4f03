//! src/services/registry_service.rs
//!
//! EventRegistry — the in-memory list of candidate events issued by this
//! server. It lives for the lifetime of the process; nothing is persisted and
//! nothing is ever removed or modified once recorded.

use crate::models::event::{EventRecord, UploadPart};
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

/// Prefix of every identifier handed out by the registry.
pub const GRACEID_PREFIX: char = 'G';

/// Shared handle to the process-wide event list.
///
/// Clones share the same list. Identifier allocation and insertion happen
/// under a single lock, so ids stay unique and gap-free even when handlers
/// run concurrently.
#[derive(Clone, Debug, Default)]
pub struct EventRegistry {
    events: Arc<Mutex<Vec<EventRecord>>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new event and return its identifier, `G<n>` where `n` is the
    /// number of events created so far including this one.
    pub fn create_event(&self, parts: Vec<UploadPart>) -> String {
        let mut events = self.lock();
        let graceid = format!("{GRACEID_PREFIX}{}", events.len() + 1);

        events.push(EventRecord {
            graceid: graceid.clone(),
            created: Utc::now(),
            parts,
        });
        info!(graceid = %graceid, total = events.len(), "Created new event {}", graceid);

        graceid
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Identifiers in creation order.
    pub fn ids(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.graceid.clone()).collect()
    }

    pub fn get(&self, graceid: &str) -> Option<EventRecord> {
        self.lock().iter().find(|e| e.graceid == graceid).cloned()
    }

    // The list is append-only and a push either happens or it doesn't, so a
    // poisoned lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<EventRecord>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
