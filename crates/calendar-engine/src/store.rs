//! In-memory event store with validated commits.
//!
//! Creates and updates are accepted only when the resulting event passes
//! [`validate`]. A rejected commit reports its errors and leaves the store
//! untouched; there are no partial writes.

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{CalendarError, Result};
use crate::event::{Event, EventDraft, EventPatch};
use crate::validate::{validate, ValidationIssue};

/// Source of fresh event identifiers.
pub trait IdAllocator {
    fn next_id(&mut self) -> String;
}

/// `evt-<unix millis>-<9 random base36 chars>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdAllocator;

impl IdAllocator for TimestampIdAllocator {
    fn next_id(&mut self) -> String {
        const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        let mut rng = rand::thread_rng();
        let suffix: String = (0..9)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        format!("evt-{}-{}", Utc::now().timestamp_millis(), suffix)
    }
}

/// `evt-1`, `evt-2`, ... in allocation order.
#[derive(Debug, Default, Clone)]
pub struct SequentialIdAllocator {
    next: u64,
}

impl IdAllocator for SequentialIdAllocator {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("evt-{}", self.next)
    }
}

/// Result of a create, update, or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitOutcome {
    pub success: bool,
    pub errors: Vec<String>,
    /// Id of the event written or removed, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

impl CommitOutcome {
    fn from_result(result: Result<String>) -> Self {
        match result {
            Ok(id) => Self {
                success: true,
                errors: Vec::new(),
                event_id: Some(id),
            },
            Err(err) => {
                let errors = err.messages();
                warn!(?errors, "commit rejected");
                Self {
                    success: false,
                    errors,
                    event_id: None,
                }
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct EventStore<A: IdAllocator = TimestampIdAllocator> {
    events: Vec<Event>,
    ids: A,
    version: u64,
}

impl EventStore<TimestampIdAllocator> {
    pub fn new() -> Self {
        Self::with_allocator(TimestampIdAllocator)
    }

    /// A store holding `events` as loaded, without re-validating them.
    pub fn from_events(events: Vec<Event>) -> Self {
        let mut store = Self::new();
        store.events = events;
        store
    }
}

impl<A: IdAllocator> EventStore<A> {
    pub fn with_allocator(ids: A) -> Self {
        Self {
            events: Vec::new(),
            ids,
            version: 0,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Incremented on every successful commit.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Validate `draft` and, if it passes, store it under a fresh id.
    pub fn create(&mut self, draft: EventDraft) -> CommitOutcome {
        CommitOutcome::from_result(self.try_create(draft))
    }

    /// Apply `patch` to the event `id`, validating the merged result.
    pub fn update(&mut self, id: &str, patch: &EventPatch) -> CommitOutcome {
        CommitOutcome::from_result(self.try_update(id, patch))
    }

    /// Remove the event `id`.
    pub fn delete(&mut self, id: &str) -> CommitOutcome {
        CommitOutcome::from_result(self.try_delete(id))
    }

    fn try_create(&mut self, draft: EventDraft) -> Result<String> {
        check(&draft)?;
        let id = self.fresh_id();
        let event = draft.into_event(id.clone()).ok_or_else(missing_dates)?;
        self.events.push(event);
        self.version += 1;
        info!(%id, version = self.version, "event created");
        Ok(id)
    }

    fn try_update(&mut self, id: &str, patch: &EventPatch) -> Result<String> {
        let index = self.position(id)?;
        let merged = patch.apply_to(&self.events[index]);
        check(&merged)?;
        let event = merged.into_event(id.to_string()).ok_or_else(missing_dates)?;
        self.events[index] = event;
        self.version += 1;
        info!(%id, version = self.version, "event updated");
        Ok(id.to_string())
    }

    fn try_delete(&mut self, id: &str) -> Result<String> {
        let index = self.position(id)?;
        self.events.remove(index);
        self.version += 1;
        info!(%id, version = self.version, "event deleted");
        Ok(id.to_string())
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn check(draft: &EventDraft) -> Result<()> {
    let report = validate(draft);
    if report.valid {
        Ok(())
    } else {
        Err(CalendarError::Validation(report.errors))
    }
}

fn missing_dates() -> CalendarError {
    CalendarError::Validation(vec![
        ValidationIssue::StartRequired.to_string(),
        ValidationIssue::EndRequired.to_string(),
    ])
}
