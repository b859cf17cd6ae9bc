use handspell_classify::{observe, Frame, FrameClassifier};
use handspell_events::{
    BufferEditedEvent, CommitEvent, EventBusRef, PipelineEvent, SessionEndedEvent,
};
use handspell_speller::{Commit, Speller, STABILITY_THRESHOLD};
use serde::Serialize;
use uuid::Uuid;

use crate::command::{CommandReceiver, SessionCommand};
use crate::Result;

/// Blocking source of captured frames.
///
/// `Ok(None)` means the stream ended cleanly (camera unplugged, file
/// exhausted); an error means the capture itself failed.
pub trait FrameSource: Send {
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

/// Frame source producing a fixed number of blank frames.
///
/// Pairs with a scripted classifier for tests and replay, where frame
/// content is irrelevant.
pub struct BlankFrameSource {
    remaining: usize,
}

impl BlankFrameSource {
    pub fn new(count: usize) -> Self {
        Self { remaining: count }
    }
}

impl FrameSource for BlankFrameSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        Ok(Some(Frame::blank(1, 1)))
    }
}

/// Tunable session parameters.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Consecutive like observations beyond this count trigger a commit.
    pub stability_threshold: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stability_threshold: STABILITY_THRESHOLD,
        }
    }
}

/// Read-only view of session state, taken after a step completes.
///
/// Renderers consume snapshots; they never reach into the live state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// The committed word buffer text.
    pub text: String,
    /// The symbol currently being held, if any.
    pub tracked: Option<char>,
    /// Consecutive like observations counted toward the next commit.
    pub hold_count: u32,
    /// Frames processed so far this session.
    pub frames_processed: u64,
}

/// Why a session loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// A terminate command was received.
    Terminated,
    /// The frame source ran out of frames.
    SourceEnded,
    /// The frame source failed.
    SourceFailed,
}

/// Result of a completed session loop.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub reason: EndReason,
    pub final_text: String,
    pub frames_processed: u64,
}

/// A capture session: classifier, speller, and command intake.
///
/// Owns all mutable state. Strictly single-threaded; the loop in [`run`]
/// (or manual [`step`] calls) is the only writer, and readers see state
/// through [`snapshot`] only.
///
/// [`run`]: Session::run
/// [`step`]: Session::step
/// [`snapshot`]: Session::snapshot
pub struct Session {
    id: Uuid,
    speller: Speller,
    classifier: Box<dyn FrameClassifier>,
    commands: CommandReceiver,
    bus: EventBusRef,
    frames_processed: u64,
}

impl Session {
    pub fn new(
        classifier: Box<dyn FrameClassifier>,
        commands: CommandReceiver,
        bus: EventBusRef,
    ) -> Self {
        Self::with_config(SessionConfig::default(), classifier, commands, bus)
    }

    pub fn with_config(
        config: SessionConfig,
        classifier: Box<dyn FrameClassifier>,
        commands: CommandReceiver,
        bus: EventBusRef,
    ) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, threshold = config.stability_threshold, "session created");
        Self {
            id,
            speller: Speller::with_threshold(config.stability_threshold),
            classifier,
            commands,
            bus,
            frames_processed: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Process one frame: classify (fail-soft), step the speller, emit a
    /// commit event if a character landed.
    pub fn step(&mut self, frame: &Frame) -> Option<Commit> {
        let observation = observe(self.classifier.as_mut(), frame);
        let commit = self.speller.step(observation);
        self.frames_processed += 1;

        if let Some(c) = commit {
            self.bus.emit(PipelineEvent::Commit(CommitEvent {
                committed: c.as_char(),
                buffer: self.speller.text(),
                ts_ms: Some(handspell_events::now_ms()),
            }));
        }
        commit
    }

    /// Apply one command. Returns false when the session should end.
    pub fn apply_command(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::Terminate => {
                tracing::debug!(session = %self.id, "terminate requested");
                false
            }
            SessionCommand::DeleteLast => {
                if let Some(removed) = self.speller.delete_last() {
                    self.bus.emit(PipelineEvent::Edit(BufferEditedEvent {
                        removed,
                        buffer: self.speller.text(),
                        ts_ms: Some(handspell_events::now_ms()),
                    }));
                }
                true
            }
        }
    }

    /// Poll and apply all pending commands. Returns false on terminate.
    fn drain_commands(&mut self) -> bool {
        while let Some(command) = self.commands.try_next() {
            if !self.apply_command(command) {
                return false;
            }
        }
        true
    }

    /// Read-only view for display, valid until the next step.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            text: self.speller.text(),
            tracked: self.speller.tracked_symbol().map(|s| s.as_char()),
            hold_count: self.speller.hold_count(),
            frames_processed: self.frames_processed,
        }
    }

    /// Drive the session until a terminate command or the source ends.
    ///
    /// Each iteration: poll commands, pull one frame, step. Commands
    /// queued while a step runs take effect before the next frame.
    pub fn run(&mut self, source: &mut dyn FrameSource) -> SessionOutcome {
        let reason = loop {
            if !self.drain_commands() {
                break EndReason::Terminated;
            }
            match source.next_frame() {
                Ok(Some(frame)) => {
                    self.step(&frame);
                }
                Ok(None) => break EndReason::SourceEnded,
                Err(e) => {
                    tracing::warn!(session = %self.id, error = %e, "frame source failed");
                    break EndReason::SourceFailed;
                }
            }
        };

        let outcome = SessionOutcome {
            reason,
            final_text: self.speller.text(),
            frames_processed: self.frames_processed,
        };
        tracing::info!(
            session = %self.id,
            reason = ?outcome.reason,
            frames = outcome.frames_processed,
            text = %outcome.final_text,
            "session ended"
        );
        self.bus.emit(PipelineEvent::SessionEnded(SessionEndedEvent {
            session_id: self.id,
            frames_processed: self.frames_processed,
            final_text: outcome.final_text.clone(),
        }));
        outcome
    }
}
