//! Per-chunk synthesis orchestration
//!
//! Chunks are processed strictly in index order, one at a time — the engine
//! runs on a fixed, memory-constrained device and concurrent calls within a
//! request would only contend for it. The first failure aborts the whole
//! request; no partial audio is ever returned.

use tracing::debug;

use narravox_audio::{AudioClip, AudioError};
use narravox_text::TextChunk;
use narravox_tts::SynthesisOptions;

use crate::error::PipelineError;
use crate::session::EngineSession;

/// Synthesize all chunks in order and validate the shared-sample-rate
/// invariant across results. A divergent rate is fatal; resampling would
/// only paper over an engine defect.
pub async fn synthesize_chunks(
    session: &EngineSession,
    chunks: &[TextChunk],
    options: &SynthesisOptions,
) -> Result<Vec<AudioClip>, PipelineError> {
    let mut clips = Vec::with_capacity(chunks.len());
    let mut expected_rate: Option<u32> = None;

    for chunk in chunks {
        debug!(chunk = chunk.index, chars = chunk.char_len(), "synthesizing chunk");
        let clip = session
            .synthesize(&chunk.content, options)
            .await
            .map_err(|source| PipelineError::Synthesis {
                index: chunk.index,
                source,
            })?;

        match expected_rate {
            None => expected_rate = Some(clip.sample_rate),
            Some(expected) if expected != clip.sample_rate => {
                return Err(PipelineError::Assembly(AudioError::RateMismatch {
                    expected,
                    found: clip.sample_rate,
                    index: chunk.index,
                }));
            }
            Some(_) => {}
        }
        clips.push(clip);
    }

    Ok(clips)
}
