//! Transcription abstraction layer for Narravox
//!
//! Voice cloning needs a transcript of the reference sample. When the caller
//! does not supply one, the pipeline falls back to automatic transcription
//! through the [`TranscriptionEngine`] capability defined here. Any backend
//! exposing "audio file in, text out" can implement it; the neural engines
//! themselves are external collaborators.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

pub mod plugins;

/// Transcription error types
#[derive(Debug, Error)]
pub enum SttError {
    /// Engine is not installed or usable on this system
    #[error("Transcription engine not available: {reason}")]
    NotAvailable { reason: String },

    /// Loading engine state failed
    #[error("Transcription engine initialization failed: {0}")]
    InitializationFailed(String),

    /// The engine ran but produced no usable transcript
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Reading the reference audio failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for transcription operations
pub type SttResult<T> = Result<T, SttError>;

/// Batch transcription interface: one complete reference sample in, one
/// transcript out.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Engine name/identifier for logs
    fn name(&self) -> &str;

    /// Check if the engine is usable on this system
    async fn is_available(&self) -> bool;

    /// Load engine state. Expensive; called once per process by the session.
    async fn initialize(&mut self) -> SttResult<()>;

    /// Transcribe the audio file at `audio` and return the raw transcript.
    /// Callers are responsible for trimming surrounding whitespace.
    async fn transcribe(&mut self, audio: &Path) -> SttResult<String>;
}
