//! Error types for synthesis engines

use thiserror::Error;

/// Synthesis engine error types
#[derive(Debug, Error)]
pub enum TtsError {
    /// Engine is not available or not installed
    #[error("Synthesis engine not available: {0}")]
    EngineNotAvailable(String),

    /// Engine initialization (weight loading) failed
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// The engine failed on a chunk
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Invalid text input
    #[error("Invalid text input: {0}")]
    InvalidInput(String),

    /// IO error (reference audio access, engine state files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for synthesis operations
pub type TtsResult<T> = Result<T, TtsError>;
