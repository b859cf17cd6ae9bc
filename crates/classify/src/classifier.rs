//! The per-frame classification contract.
//!
//! The detection stack (palm detector, landmark regressor, gesture model)
//! lives behind [`FrameClassifier`]: one call per frame, one
//! symbol-or-nothing out. Everything downstream consumes the result through
//! [`observe`], which turns any upstream failure into an absent-hand
//! observation so a single bad frame never stops the session.

use std::collections::VecDeque;

use crate::symbol::{Observation, Symbol};
use crate::Result;

/// One captured color frame, RGB, row-major.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// An all-black frame, useful for tests and scripted replay.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 3) as usize],
        }
    }
}

/// Classifies a single frame into a gesture symbol.
///
/// `Ok(None)` means the frame was processed but no hand was found.
/// Implementations wrap whatever detection pipeline they carry; callers
/// only ever see this one method.
pub trait FrameClassifier: Send {
    /// Human-readable name of the classifier backend.
    fn name(&self) -> &str;

    /// Classify one frame (expected RGB, any resolution).
    fn classify(&mut self, frame: &Frame) -> Result<Option<Symbol>>;
}

/// Fail-soft adapter boundary.
///
/// Maps a classifier result to an [`Observation`]: failures are logged and
/// count as an absent hand for that frame, keeping the session alive.
pub fn observe(classifier: &mut dyn FrameClassifier, frame: &Frame) -> Observation {
    match classifier.classify(frame) {
        Ok(result) => Observation::from(result),
        Err(e) => {
            tracing::warn!(classifier = classifier.name(), error = %e, "frame classification failed");
            Observation::Absent
        }
    }
}

/// Classifier that replays a fixed result script, ignoring frame content.
///
/// Used by tests and the replay binary to drive the pipeline without any
/// model files. Past the end of the script every frame is hand-free.
pub struct ScriptedClassifier {
    script: VecDeque<Result<Option<Symbol>>>,
}

impl ScriptedClassifier {
    pub fn new(script: impl IntoIterator<Item = Result<Option<Symbol>>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Build a script from observations only (no error frames).
    pub fn from_observations(observations: impl IntoIterator<Item = Observation>) -> Self {
        Self::new(observations.into_iter().map(|o| Ok(o.symbol())))
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl FrameClassifier for ScriptedClassifier {
    fn name(&self) -> &str {
        "scripted"
    }

    fn classify(&mut self, _frame: &Frame) -> Result<Option<Symbol>> {
        self.script.pop_front().unwrap_or(Ok(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClassifyError;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    #[test]
    fn test_observe_maps_results() {
        let mut clf = ScriptedClassifier::new(vec![
            Ok(Some(sym('A'))),
            Ok(None),
            Err(ClassifyError::Inference("nan in landmarks".into())),
        ]);
        let frame = Frame::blank(4, 4);

        assert_eq!(observe(&mut clf, &frame), Observation::Sign(sym('A')));
        assert_eq!(observe(&mut clf, &frame), Observation::Absent);
        // Errors degrade to Absent, not a panic or propagation.
        assert_eq!(observe(&mut clf, &frame), Observation::Absent);
    }

    #[test]
    fn test_scripted_classifier_exhaustion_is_absent() {
        let mut clf = ScriptedClassifier::from_observations(vec![Observation::Sign(sym('B'))]);
        let frame = Frame::blank(2, 2);

        assert_eq!(clf.classify(&frame).unwrap(), Some(sym('B')));
        assert_eq!(clf.remaining(), 0);
        assert_eq!(clf.classify(&frame).unwrap(), None);
        assert_eq!(clf.classify(&frame).unwrap(), None);
    }

    #[test]
    fn test_blank_frame_dimensions() {
        let frame = Frame::blank(8, 4);
        assert_eq!(frame.pixels.len(), 8 * 4 * 3);
    }
}
