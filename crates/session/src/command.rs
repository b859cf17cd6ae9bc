//! Out-of-band user commands.
//!
//! Key presses (or any other input surface) translate to discrete commands
//! delivered over a channel. The session polls the receiver non-blocking
//! once per frame, so each command is consumed exactly once and never
//! interrupts a step in progress.

use crossbeam_channel::{Receiver, Sender, TryRecvError};

/// A discrete user command for a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Remove the most recent committed character.
    DeleteLast,
    /// End the session.
    Terminate,
}

/// Create a command channel pair.
pub fn command_channel() -> (CommandSender, CommandReceiver) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (CommandSender { tx }, CommandReceiver { rx })
}

/// Sending half, held by the input surface.
#[derive(Clone)]
pub struct CommandSender {
    tx: Sender<SessionCommand>,
}

impl CommandSender {
    /// Send a command. Returns false if the session is gone.
    pub fn send(&self, command: SessionCommand) -> bool {
        match self.tx.send(command) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!(?command, "command channel closed");
                false
            }
        }
    }
}

/// Receiving half, owned by the session.
pub struct CommandReceiver {
    rx: Receiver<SessionCommand>,
}

impl CommandReceiver {
    /// Take the next pending command, if any. Never blocks.
    pub fn try_next(&self) -> Option<SessionCommand> {
        match self.rx.try_recv() {
            Ok(command) => Some(command),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_arrive_in_order() {
        let (tx, rx) = command_channel();
        assert!(tx.send(SessionCommand::DeleteLast));
        assert!(tx.send(SessionCommand::Terminate));

        assert_eq!(rx.try_next(), Some(SessionCommand::DeleteLast));
        assert_eq!(rx.try_next(), Some(SessionCommand::Terminate));
        assert_eq!(rx.try_next(), None);
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (tx, rx) = command_channel();
        drop(rx);
        assert!(!tx.send(SessionCommand::Terminate));
    }
}
