//! Headless replay: drive a spelling session from a script file.
//!
//! Each line of the script is one step:
//!
//! ```text
//! {"see":"A"}        classifier saw the symbol A this frame
//! {"see":null}       no hand detected this frame
//! {"key":"delete"}   user pressed delete-last
//! {"key":"quit"}     user ended the session
//! ```
//!
//! Run with: cargo run -p handspell-replay -- script.jsonl

use anyhow::{bail, Context};
use handspell_classify::{Frame, Observation, ScriptedClassifier, Symbol};
use handspell_events::InMemoryEventBus;
use handspell_session::{command_channel, Session, SessionCommand};
use serde::Deserialize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// Untagged variants are tried in order. Key must come first: its `key`
// field is required, so a frame line can never match it, while See's
// optional `see` field would happily swallow `{"key":...}` lines as
// absent-hand frames if it were tried first.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum ScriptEntry {
    Key { key: KeyCommand },
    See { see: Option<char> },
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum KeyCommand {
    Delete,
    Quit,
}

fn parse_script(input: &str) -> anyhow::Result<Vec<ScriptEntry>> {
    let mut entries = Vec::new();
    for (lineno, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let entry: ScriptEntry = serde_json::from_str(line)
            .with_context(|| format!("bad script entry on line {}", lineno + 1))?;
        if let ScriptEntry::See { see: Some(c) } = entry {
            if Symbol::new(c).is_none() {
                bail!("line {}: '{}' is not a recognized gesture class", lineno + 1, c);
            }
        }
        entries.push(entry);
    }
    Ok(entries)
}

/// The classifier observations, in script order.
fn observations(entries: &[ScriptEntry]) -> Vec<Observation> {
    entries
        .iter()
        .filter_map(|e| match *e {
            ScriptEntry::See { see } => Some(Observation::from(see.and_then(Symbol::new))),
            ScriptEntry::Key { .. } => None,
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,handspell=debug")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: handspell-replay <script.jsonl>")?;
    let input = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let entries = parse_script(&input)?;

    let classifier = ScriptedClassifier::from_observations(observations(&entries));
    let bus = Arc::new(InMemoryEventBus::new());
    let (_commands_tx, commands_rx) = command_channel();
    let mut session = Session::new(Box::new(classifier), commands_rx, bus.clone());

    tracing::info!(session = %session.id(), entries = entries.len(), "replaying {path}");

    let frame = Frame::blank(640, 480);
    for entry in &entries {
        match entry {
            ScriptEntry::See { .. } => {
                session.step(&frame);
            }
            ScriptEntry::Key { key: KeyCommand::Delete } => {
                session.apply_command(SessionCommand::DeleteLast);
            }
            ScriptEntry::Key { key: KeyCommand::Quit } => {
                session.apply_command(SessionCommand::Terminate);
                break;
            }
        }
        let snapshot = session.snapshot();
        tracing::debug!(
            text = %snapshot.text,
            tracked = ?snapshot.tracked,
            hold = snapshot.hold_count,
            "step"
        );
    }

    for event in bus.drain() {
        println!("{} {}", event.topic(), event.payload());
    }
    let snapshot = session.snapshot();
    println!(
        "final: {:?} ({} frames)",
        snapshot.text, snapshot.frames_processed
    );
    Ok(())
}
