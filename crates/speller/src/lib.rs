//! Gesture stabilization and word assembly.
//!
//! Turns the noisy per-frame stream of classified symbols into a stable
//! committed word:
//! - `Stabilizer`: debounces observations with a hold counter
//! - `WordBuffer`: the committed character sequence
//!
//! The `Speller` orchestrator wires the two together and applies the
//! word-boundary rule: sustained hand absence commits a separator, but
//! only while there is an unterminated word to separate.

mod constants;
mod stabilizer;
mod word_buffer;

pub use constants::STABILITY_THRESHOLD;
pub use stabilizer::Stabilizer;
pub use word_buffer::{WordBuffer, SEPARATOR};

use handspell_classify::{Observation, Symbol};

/// A character that just entered the word buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// A stabilized gesture symbol.
    Symbol(Symbol),
    /// A word separator inferred from sustained absence.
    Separator,
}

impl Commit {
    pub fn as_char(&self) -> char {
        match self {
            Commit::Symbol(s) => s.as_char(),
            Commit::Separator => SEPARATOR,
        }
    }
}

/// Per-session spelling state: one stabilizer, one word buffer.
///
/// Owns all mutable state of the core; callers hold one `Speller` per
/// capture session and feed it exactly one observation per frame.
#[derive(Default)]
pub struct Speller {
    stabilizer: Stabilizer,
    buffer: WordBuffer,
}

impl Speller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            stabilizer: Stabilizer::with_threshold(threshold),
            buffer: WordBuffer::new(),
        }
    }

    /// Advance the state machine by one frame.
    ///
    /// Returns the commit this observation produced, if any.
    pub fn step(&mut self, observation: Observation) -> Option<Commit> {
        let commit = match observation {
            Observation::Sign(symbol) => self
                .stabilizer
                .observe_symbol(symbol)
                .map(|s| {
                    self.buffer.push_symbol(s);
                    Commit::Symbol(s)
                }),
            Observation::Absent => {
                // Absence only counts while a word is waiting to be
                // terminated; otherwise the frame moves nothing.
                if self.buffer.wants_separator() && self.stabilizer.observe_absence() {
                    self.buffer.push_separator();
                    Some(Commit::Separator)
                } else {
                    None
                }
            }
        };

        if let Some(c) = commit {
            tracing::debug!(committed = %c.as_char(), buffer = %self.buffer, "commit");
        }
        commit
    }

    /// Remove the most recent committed character (user correction).
    ///
    /// Leaves the stabilizer untouched; a no-op on an empty buffer.
    pub fn delete_last(&mut self) -> Option<char> {
        let removed = self.buffer.pop();
        if let Some(c) = removed {
            tracing::debug!(removed = %c, buffer = %self.buffer, "delete last");
        }
        removed
    }

    /// The committed text so far.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &WordBuffer {
        &self.buffer
    }

    /// The symbol currently being held, if any.
    pub fn tracked_symbol(&self) -> Option<Symbol> {
        self.stabilizer.tracked()
    }

    pub fn hold_count(&self) -> u32 {
        self.stabilizer.hold_count()
    }

    pub fn threshold(&self) -> u32 {
        self.stabilizer.threshold()
    }

    /// Clear all state for a new session.
    pub fn reset(&mut self) {
        self.stabilizer.reset();
        self.buffer = WordBuffer::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    fn sign(c: char) -> Observation {
        Observation::Sign(sym(c))
    }

    fn feed(speller: &mut Speller, observations: &[Observation]) {
        for &o in observations {
            speller.step(o);
        }
    }

    #[test]
    fn test_seven_frames_commit_one_symbol() {
        let mut speller = Speller::new();
        let mut commits = 0;
        for _ in 0..7 {
            if speller.step(sign('A')).is_some() {
                commits += 1;
            }
        }
        assert_eq!(commits, 1);
        assert_eq!(speller.text(), "A");
        assert_eq!(speller.hold_count(), 0);
    }

    #[test]
    fn test_short_run_interrupted_commits_nothing() {
        let mut speller = Speller::new();
        feed(&mut speller, &[sign('A'); 3]);
        assert_eq!(speller.text(), "");
        // The early A's are discarded once B takes over.
        feed(&mut speller, &[sign('B'); 7]);
        assert_eq!(speller.text(), "B");
    }

    #[test]
    fn test_sustained_absence_appends_one_space() {
        let mut speller = Speller::new();
        feed(&mut speller, &[sign('A'); 7]);
        feed(&mut speller, &[Observation::Absent; 7]);
        assert_eq!(speller.text(), "A ");

        // Already terminated: further absence moves nothing.
        feed(&mut speller, &[Observation::Absent; 20]);
        assert_eq!(speller.text(), "A ");
        assert_eq!(speller.hold_count(), 0);
    }

    #[test]
    fn test_absence_on_empty_buffer_is_idempotent() {
        let mut speller = Speller::new();
        feed(&mut speller, &[Observation::Absent; 50]);
        assert_eq!(speller.text(), "");
        assert_eq!(speller.hold_count(), 0);
    }

    #[test]
    fn test_word_boundary_scenario() {
        let mut speller = Speller::new();
        feed(&mut speller, &[sign('A'); 7]);
        assert_eq!(speller.text(), "A");
        feed(&mut speller, &[Observation::Absent; 7]);
        assert_eq!(speller.text(), "A ");
        feed(&mut speller, &[sign('B'); 7]);
        assert_eq!(speller.text(), "A B");

        assert_eq!(speller.delete_last(), Some('B'));
        assert_eq!(speller.text(), "A ");
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let mut speller = Speller::new();
        assert_eq!(speller.delete_last(), None);
        assert_eq!(speller.text(), "");
    }

    #[test]
    fn test_delete_leaves_stabilizer_alone() {
        let mut speller = Speller::new();
        feed(&mut speller, &[sign('A'); 7]);
        feed(&mut speller, &[sign('A'); 3]);
        let hold_before = speller.hold_count();
        let tracked_before = speller.tracked_symbol();

        speller.delete_last();

        assert_eq!(speller.hold_count(), hold_before);
        assert_eq!(speller.tracked_symbol(), tracked_before);
    }

    #[test]
    fn test_held_symbol_recommits() {
        let mut speller = Speller::new();
        feed(&mut speller, &[sign('E'); 14]);
        assert_eq!(speller.text(), "EE");
    }

    #[test]
    fn test_mixed_run_crosses_threshold_in_absence_branch() {
        // The hold counter is shared between "symbol held" and "sustained
        // absence": a short run of C followed by absence commits the
        // separator on the 7th like observation overall.
        let mut speller = Speller::new();
        feed(&mut speller, &[sign('A'); 7]);
        feed(&mut speller, &[sign('C'); 3]);
        feed(&mut speller, &[Observation::Absent; 4]);
        assert_eq!(speller.text(), "A ");
    }

    #[test]
    fn test_custom_threshold() {
        let mut speller = Speller::with_threshold(2);
        feed(&mut speller, &[sign('Z'); 3]);
        assert_eq!(speller.text(), "Z");
    }

    #[test]
    fn test_reset_clears_all_state() {
        let mut speller = Speller::new();
        feed(&mut speller, &[sign('A'); 9]);
        speller.reset();
        assert_eq!(speller.text(), "");
        assert_eq!(speller.tracked_symbol(), None);
        assert_eq!(speller.hold_count(), 0);
    }
}
