//! The per-frame capture session loop.
//!
//! One classification call and one speller step per frame, strictly
//! sequential. User commands (delete-last, terminate) arrive out-of-band
//! over a channel and are polled once per iteration, never mid-step.

mod command;
mod session;

pub use command::{command_channel, CommandReceiver, CommandSender, SessionCommand};
pub use session::{
    BlankFrameSource, EndReason, FrameSource, Session, SessionConfig, SessionOutcome, Snapshot,
};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("frame source failed: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
