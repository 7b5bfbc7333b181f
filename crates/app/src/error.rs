//! Pipeline error taxonomy
//!
//! Every failure a request can hit is classified into one of these kinds
//! and converted into the structured failure response at the request
//! boundary. Nothing crosses that boundary as a panic.

use narravox_audio::AudioError;
use narravox_stt::SttError;
use narravox_tts::TtsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed request; reported before any engine work is performed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Automatic transcription of the reference sample failed
    #[error("Reference transcription failed: {0}")]
    Transcription(#[source] SttError),

    /// The engine failed on a chunk; the whole request aborts
    #[error("Synthesis failed on chunk {index}: {source}")]
    Synthesis {
        index: usize,
        #[source]
        source: TtsError,
    },

    /// Waveform assembly or encoding failed, including sample-rate drift
    #[error("Assembly failed: {0}")]
    Assembly(#[from] AudioError),

    /// Temporary-file handling failed
    #[error("Resource error: {0}")]
    Resource(#[from] std::io::Error),
}

impl PipelineError {
    /// Stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Validation(_) => "validation",
            PipelineError::Transcription(_) => "transcription",
            PipelineError::Synthesis { .. } => "synthesis",
            PipelineError::Assembly(_) => "assembly",
            PipelineError::Resource(_) => "resource",
        }
    }
}
