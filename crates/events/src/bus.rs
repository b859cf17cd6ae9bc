//! Event bus abstraction for decoupled event emission.
//!
//! The session loop emits typed [`PipelineEvent`]s through this trait so
//! the core can run and be tested headless; a UI shell supplies its own
//! implementation and uses [`PipelineEvent::topic`] / [`payload`] to put
//! events on the wire.
//!
//! [`payload`]: PipelineEvent::payload

use std::sync::{Arc, Mutex};

use crate::{event_names, BufferEditedEvent, CommitEvent, SessionEndedEvent};

/// An event flowing out of the spelling pipeline.
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    /// A character was committed to the word buffer.
    Commit(CommitEvent),
    /// A delete-last command removed a character.
    Edit(BufferEditedEvent),
    /// The capture session ended.
    SessionEnded(SessionEndedEvent),
}

impl PipelineEvent {
    /// The wire topic for this event (see [`event_names`]).
    pub fn topic(&self) -> &'static str {
        match self {
            PipelineEvent::Commit(_) => event_names::SPELLER_COMMIT,
            PipelineEvent::Edit(_) => event_names::SPELLER_EDIT,
            PipelineEvent::SessionEnded(_) => event_names::SESSION_ENDED,
        }
    }

    /// The JSON payload for wire delivery.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            PipelineEvent::Commit(e) => crate::payload(e),
            PipelineEvent::Edit(e) => crate::payload(e),
            PipelineEvent::SessionEnded(e) => crate::payload(e),
        }
    }
}

/// Trait for delivering pipeline events to subscribers.
pub trait EventBus: Send + Sync {
    fn emit(&self, event: PipelineEvent);
}

/// Type alias for shared event bus reference.
pub type EventBusRef = Arc<dyn EventBus>;

/// In-memory event bus that captures everything for later inspection.
///
/// The test double for anything that emits events; the typed accessors
/// let tests assert on event fields without JSON plumbing.
#[derive(Default)]
pub struct InMemoryEventBus {
    events: Mutex<Vec<PipelineEvent>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured events, in emission order.
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Captured commit events, in emission order.
    pub fn commits(&self) -> Vec<CommitEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                PipelineEvent::Commit(c) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }

    /// Captured buffer-edit events, in emission order.
    pub fn edits(&self) -> Vec<BufferEditedEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                PipelineEvent::Edit(c) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }

    /// Captured session-ended events, in emission order.
    pub fn ended(&self) -> Vec<SessionEndedEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                PipelineEvent::SessionEnded(c) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }

    /// Remove and return all captured events.
    pub fn drain(&self) -> Vec<PipelineEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl EventBus for InMemoryEventBus {
    fn emit(&self, event: PipelineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// No-op event bus that discards all events.
pub struct NullEventBus;

impl EventBus for NullEventBus {
    fn emit(&self, _event: PipelineEvent) {}
}
