mod classifier;
mod symbol;

pub use classifier::{observe, Frame, FrameClassifier, ScriptedClassifier};
pub use symbol::{Observation, Symbol, ALPHABET};

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("model not loaded")]
    ModelNotLoaded,
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("invalid frame: {0}")]
    InvalidFrame(String),
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
