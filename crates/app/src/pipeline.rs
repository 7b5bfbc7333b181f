//! Pipeline controller
//!
//! Validates the inbound request, sequences reference-voice resolution,
//! segmentation, orchestrated synthesis and assembly, and maps every
//! downstream failure into the classified error type.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::info;

use narravox_audio::{assemble, encode_wav};
use narravox_text::segment;
use narravox_tts::SynthesisOptions;

use crate::error::PipelineError;
use crate::orchestrator::synthesize_chunks;
use crate::reference::ReferenceVoice;
use crate::session::{EngineSession, TranscriberSession};
use crate::types::{SynthesisRequest, SynthesisResponse};

pub struct PipelineController {
    synthesis: Arc<EngineSession>,
    transcription: Arc<TranscriberSession>,
}

impl PipelineController {
    pub fn new(synthesis: Arc<EngineSession>, transcription: Arc<TranscriberSession>) -> Self {
        Self {
            synthesis,
            transcription,
        }
    }

    /// Process one request end to end. Every failure path surfaces here as
    /// a classified [`PipelineError`]; nothing panics across this boundary.
    pub async fn handle(&self, request: &SynthesisRequest) -> Result<SynthesisResponse, PipelineError> {
        request.validate()?;
        if request.is_cloning() {
            self.handle_long_form(request).await
        } else {
            self.handle_plain(request).await
        }
    }

    /// Plain named-voice mode: one engine call, no chunking.
    async fn handle_plain(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesisResponse, PipelineError> {
        let text_length = request.text.chars().count();
        info!(chars = text_length, voice = %request.voice, "plain synthesis request");

        let options = SynthesisOptions::named(&request.language, &request.voice);
        let clip = self
            .synthesis
            .synthesize(&request.text, &options)
            .await
            .map_err(|source| PipelineError::Synthesis { index: 0, source })?;

        let assembled = assemble(std::slice::from_ref(&clip), 0.0)?;
        let wav = encode_wav(&assembled)?;

        Ok(SynthesisResponse::plain(
            STANDARD.encode(&wav),
            assembled.sample_rate,
            text_length,
            request.voice.clone(),
            request.language.clone(),
        ))
    }

    /// Long-form cloning mode: resolve reference voice, segment, synthesize
    /// chunk by chunk, assemble with inter-chunk silence.
    async fn handle_long_form(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesisResponse, PipelineError> {
        let encoded = request.ref_audio_base64.as_deref().unwrap_or_default();
        let audio_bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
            PipelineError::Validation(format!("'ref_audio_base64' is not valid base64: {e}"))
        })?;

        let reference =
            ReferenceVoice::resolve(&audio_bytes, &request.ref_text, &self.transcription).await?;

        let chunks = segment(&request.text, request.max_chunk_size as usize);
        if chunks.is_empty() {
            return Err(PipelineError::Validation(
                "'text' contains no synthesizable content".to_string(),
            ));
        }
        let total_chars: usize = chunks.iter().map(|c| c.char_len()).sum();
        info!(
            chunks = chunks.len(),
            total_chars,
            max_chunk_size = request.max_chunk_size,
            "long-form cloning request"
        );

        let options = SynthesisOptions::cloned(
            &request.language,
            reference.audio_path(),
            reference.transcript(),
        );
        let clips = synthesize_chunks(&self.synthesis, &chunks, &options).await?;

        let assembled = assemble(&clips, request.pause_duration)?;
        let wav = encode_wav(&assembled)?;
        info!(
            duration_seconds = assembled.duration_seconds(),
            samples = assembled.samples.len(),
            "long-form synthesis complete"
        );

        Ok(SynthesisResponse::long_form(
            STANDARD.encode(&wav),
            assembled.sample_rate,
            request.text.chars().count(),
            chunks.len(),
            total_chars,
            assembled.duration_seconds(),
            reference.transcript().to_string(),
        ))
        // `reference` drops here: the temp file is removed whether the
        // request succeeded or bailed out above with `?`.
    }
}
