//! Request and response wire model
//!
//! Defaults are applied at this one boundary via serde; validation runs
//! before any engine work or temp-file creation.

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Character cap for plain (non-chunked) mode. Chunked cloning mode is
/// practically unbounded.
pub const MAX_PLAIN_TEXT_CHARS: usize = 10_000;

fn default_language() -> String {
    "Russian".to_string()
}

fn default_voice() -> String {
    "Vivian".to_string()
}

fn default_max_chunk_size() -> i64 {
    1_500
}

fn default_pause_duration() -> f64 {
    0.45
}

/// One synthesis request. Immutable for the duration of the request.
///
/// Presence of `ref_audio_base64` selects the chunked voice-cloning
/// pipeline; absence selects plain named-voice mode.
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisRequest {
    #[serde(default)]
    pub text: String,

    /// Passed through verbatim to the engine.
    #[serde(default = "default_language")]
    pub language: String,

    /// Named-voice mode only.
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Reference sample for voice cloning, base64-encoded audio bytes.
    #[serde(default)]
    pub ref_audio_base64: Option<String>,

    /// Transcript of the reference sample. Empty triggers automatic
    /// transcription.
    #[serde(default)]
    pub ref_text: String,

    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: i64,

    /// Inter-chunk silence in seconds.
    #[serde(default = "default_pause_duration")]
    pub pause_duration: f64,
}

impl SynthesisRequest {
    pub fn is_cloning(&self) -> bool {
        self.ref_audio_base64.is_some()
    }

    /// Reject malformed input before any resource is touched.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.text.trim().is_empty() {
            return Err(PipelineError::Validation(
                "'text' must be present and non-empty".to_string(),
            ));
        }
        if self.max_chunk_size <= 0 {
            return Err(PipelineError::Validation(format!(
                "'max_chunk_size' must be positive, got {}",
                self.max_chunk_size
            )));
        }
        if !self.pause_duration.is_finite() || self.pause_duration < 0.0 {
            return Err(PipelineError::Validation(format!(
                "'pause_duration' must be a non-negative number, got {}",
                self.pause_duration
            )));
        }
        match &self.ref_audio_base64 {
            Some(encoded) if encoded.trim().is_empty() => Err(PipelineError::Validation(
                "'ref_audio_base64' must not be empty for voice cloning".to_string(),
            )),
            Some(_) => Ok(()),
            None => {
                if self.text.chars().count() > MAX_PLAIN_TEXT_CHARS {
                    return Err(PipelineError::Validation(format!(
                        "'text' is too long for non-chunked mode (maximum {MAX_PLAIN_TEXT_CHARS} characters)"
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Success payload. Chunking-specific fields are present only for the
/// long-form cloning pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisResponse {
    pub audio_base64: String,
    pub sample_rate: u32,
    pub format: &'static str,
    pub text_length: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_text_used: Option<String>,
}

impl SynthesisResponse {
    pub fn plain(
        audio_base64: String,
        sample_rate: u32,
        text_length: usize,
        voice: String,
        language: String,
    ) -> Self {
        Self {
            audio_base64,
            sample_rate,
            format: "wav",
            text_length,
            voice: Some(voice),
            language: Some(language),
            chunks_count: None,
            total_chars: None,
            duration_seconds: None,
            ref_text_used: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn long_form(
        audio_base64: String,
        sample_rate: u32,
        text_length: usize,
        chunks_count: usize,
        total_chars: usize,
        duration_seconds: f64,
        ref_text_used: String,
    ) -> Self {
        Self {
            audio_base64,
            sample_rate,
            format: "wav",
            text_length,
            voice: None,
            language: None,
            chunks_count: Some(chunks_count),
            total_chars: Some(total_chars),
            duration_seconds: Some(duration_seconds),
            ref_text_used: Some(ref_text_used),
        }
    }
}

/// Failure payload. The process never crashes; one failing request never
/// prevents subsequent requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traceback: Option<String>,
}

impl ErrorResponse {
    pub fn from_error(err: &PipelineError) -> Self {
        Self {
            error: err.to_string(),
            traceback: Some(format!("{err:?}")),
        }
    }

    pub fn from_message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            traceback: None,
        }
    }
}
