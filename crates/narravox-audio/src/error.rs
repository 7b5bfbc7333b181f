//! Error types for audio assembly and encoding

use thiserror::Error;

/// Audio assembly and encoding errors
#[derive(Debug, Error)]
pub enum AudioError {
    /// Nothing to assemble
    #[error("No audio clips to assemble")]
    NoClips,

    /// Sample rate diverged across chunk results within one request
    #[error("Sample rate mismatch: chunk {index} produced {found} Hz, expected {expected} Hz")]
    RateMismatch {
        expected: u32,
        found: u32,
        index: usize,
    },

    /// WAV container encoding failed
    #[error("WAV encoding failed: {0}")]
    Encode(#[from] hound::Error),
}
