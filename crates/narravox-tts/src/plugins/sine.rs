//! Tone-generator synthesis engine
//!
//! A stand-in engine that renders each chunk as a sine tone whose duration
//! scales with text length. Lets the worker binary and end-to-end tests
//! exercise the full pipeline without any neural runtime installed, the
//! same role a no-op plugin plays for a transcription pipeline.

use std::f32::consts::TAU;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{next_synthesis_id, AudioClip, SynthesisEngine, SynthesisOptions, TtsError, TtsResult};

const SAMPLE_RATE: u32 = 24_000;
const SECONDS_PER_CHAR: f32 = 0.06;
const FREQUENCY_HZ: f32 = 220.0;
const AMPLITUDE: f32 = 0.3;

pub struct SineSynthesisEngine {
    initialized: bool,
}

impl SineSynthesisEngine {
    pub fn new() -> Self {
        Self { initialized: false }
    }
}

impl Default for SineSynthesisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SynthesisEngine for SineSynthesisEngine {
    fn name(&self) -> &str {
        "sine"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn initialize(&mut self) -> TtsResult<()> {
        self.initialized = true;
        info!("sine synthesis engine initialized");
        Ok(())
    }

    async fn synthesize(&mut self, text: &str, options: &SynthesisOptions) -> TtsResult<AudioClip> {
        if !self.initialized {
            return Err(TtsError::InitializationFailed(
                "sine engine not initialized".to_string(),
            ));
        }
        if text.trim().is_empty() {
            return Err(TtsError::InvalidInput("empty chunk text".to_string()));
        }

        let synthesis_id = next_synthesis_id();
        let len = (text.chars().count() as f32 * SECONDS_PER_CHAR * SAMPLE_RATE as f32) as usize;
        let samples: Vec<f32> = (0..len)
            .map(|n| (TAU * FREQUENCY_HZ * n as f32 / SAMPLE_RATE as f32).sin() * AMPLITUDE)
            .collect();

        debug!(
            synthesis_id,
            chars = text.chars().count(),
            samples = samples.len(),
            voice = options.voice.label(),
            "sine synthesis"
        );

        Ok(AudioClip::new(samples, SAMPLE_RATE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_duration_proportional_to_text() {
        let mut engine = SineSynthesisEngine::new();
        engine.initialize().await.unwrap();
        let options = SynthesisOptions::named("English", "Vivian");
        let short = engine.synthesize("hi", &options).await.unwrap();
        let long = engine.synthesize("a much longer chunk", &options).await.unwrap();
        assert!(long.samples.len() > short.samples.len());
        assert_eq!(short.sample_rate, 24_000);
    }

    #[tokio::test]
    async fn rejects_empty_chunk_text() {
        let mut engine = SineSynthesisEngine::new();
        engine.initialize().await.unwrap();
        let options = SynthesisOptions::named("English", "Vivian");
        let err = engine.synthesize("   ", &options).await.unwrap_err();
        assert!(matches!(err, TtsError::InvalidInput(_)));
    }
}
