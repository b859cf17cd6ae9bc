//! Shared event contracts for the spelling pipeline.
//!
//! Defines the formal DTOs for events a frontend (or any other subscriber)
//! can observe, plus the `EventBus` trait that decouples the session loop
//! from whatever delivers those events. Shared types keep field names in
//! one place instead of scattered across emit sites.

mod bus;

pub use bus::{EventBus, EventBusRef, InMemoryEventBus, NullEventBus, PipelineEvent};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current wall-clock time in milliseconds, for event timestamps.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Serialize an event DTO into an emit payload.
///
/// The DTOs in this crate cannot fail to serialize; a null payload is the
/// harmless fallback if one ever does.
pub fn payload<T: Serialize>(event: &T) -> serde_json::Value {
    serde_json::to_value(event).unwrap_or(serde_json::Value::Null)
}

/// Event emitted when the speller commits a character.
///
/// Producers: session loop
/// Consumers: display frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitEvent {
    /// The character that was appended (a letter or the space separator).
    pub committed: char,
    /// The full buffer text after the commit.
    pub buffer: String,
    /// Timestamp in milliseconds since epoch.
    #[serde(default)]
    pub ts_ms: Option<i64>,
}

/// Event emitted when a delete-last command removes a character.
///
/// Producers: session loop
/// Consumers: display frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BufferEditedEvent {
    /// The character that was removed.
    pub removed: char,
    /// The full buffer text after the edit.
    pub buffer: String,
    #[serde(default)]
    pub ts_ms: Option<i64>,
}

/// Event emitted once when a session ends.
///
/// Producers: session loop
/// Consumers: display frontend, logging sinks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEndedEvent {
    pub session_id: Uuid,
    pub frames_processed: u64,
    pub final_text: String,
}

/// Event names as constants to prevent typos.
pub mod event_names {
    /// A character was committed to the word buffer.
    pub const SPELLER_COMMIT: &str = "speller:commit";
    /// The word buffer was edited by a delete command.
    pub const SPELLER_EDIT: &str = "speller:edit";
    /// The capture session ended.
    pub const SESSION_ENDED: &str = "session:ended";
}
