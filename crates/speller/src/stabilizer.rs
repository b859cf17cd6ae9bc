//! Temporal debouncing of per-frame classifications.

use handspell_classify::Symbol;

use crate::constants::STABILITY_THRESHOLD;

/// Tracks how long the current symbol (or a sustained hand absence) has
/// been observed.
///
/// One shared counter covers both cases: matching the original pipeline, a
/// frame of absence extends the hold of whatever was last tracked rather
/// than starting a fresh count. The counter resets only when a *different*
/// symbol appears or a commit fires.
pub struct Stabilizer {
    tracked: Option<Symbol>,
    hold: u32,
    threshold: u32,
}

impl Default for Stabilizer {
    fn default() -> Self {
        Self::with_threshold(STABILITY_THRESHOLD)
    }
}

impl Stabilizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            tracked: None,
            hold: 0,
            threshold,
        }
    }

    /// The last concrete symbol seen, if any.
    pub fn tracked(&self) -> Option<Symbol> {
        self.tracked
    }

    /// Consecutive like observations counted so far.
    pub fn hold_count(&self) -> u32 {
        self.hold
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Feed one classified symbol. Returns the symbol when its hold just
    /// crossed the threshold and a character should be committed.
    pub fn observe_symbol(&mut self, symbol: Symbol) -> Option<Symbol> {
        if self.tracked == Some(symbol) {
            self.hold += 1;
        } else {
            self.tracked = Some(symbol);
            self.hold = 1;
        }

        let committed = if self.hold > self.threshold {
            self.hold = 0;
            Some(symbol)
        } else {
            None
        };
        debug_assert!(self.hold <= self.threshold);
        committed
    }

    /// Feed one hand-free frame. Returns true when sustained absence just
    /// crossed the threshold and a word separator should be committed.
    ///
    /// The caller decides whether absence counts at all; frames where the
    /// buffer is empty or already word-terminated never reach here.
    pub fn observe_absence(&mut self) -> bool {
        self.hold += 1;
        let committed = self.hold > self.threshold;
        if committed {
            self.hold = 0;
        }
        debug_assert!(self.hold <= self.threshold);
        committed
    }

    /// Forget everything tracked so far.
    pub fn reset(&mut self) {
        self.tracked = None;
        self.hold = 0;
    }
}
