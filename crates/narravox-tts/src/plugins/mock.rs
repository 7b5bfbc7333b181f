//! Configurable mock synthesis engine for pipeline testing

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::{next_synthesis_id, AudioClip, SynthesisEngine, SynthesisOptions, TtsError, TtsResult};

/// Configuration for mock synthesis
#[derive(Debug, Clone)]
pub struct MockSynthesisConfig {
    /// Sample rate reported with every clip
    pub sample_rate: u32,

    /// Samples produced per input character
    pub samples_per_char: usize,

    /// Fail the Nth synthesize call (1-based)
    pub fail_on_call: Option<usize>,

    /// From the Nth call (1-based) onward, report this sample rate instead
    pub rate_override_from_call: Option<(usize, u32)>,
}

impl Default for MockSynthesisConfig {
    fn default() -> Self {
        Self {
            sample_rate: 24_000,
            samples_per_char: 100,
            fail_on_call: None,
            rate_override_from_call: None,
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    initialized: bool,
    initialize_calls: usize,
    synthesized_texts: Vec<String>,
}

/// Mock synthesis engine producing deterministic waveforms proportional to
/// input length, with call recording for orchestration tests.
#[derive(Debug, Clone)]
pub struct MockSynthesisEngine {
    config: MockSynthesisConfig,
    state: Arc<Mutex<MockState>>,
}

impl MockSynthesisEngine {
    pub fn new(config: MockSynthesisConfig) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Mock that fails on the `call` -th synthesize call (1-based).
    pub fn failing_on_call(call: usize) -> Self {
        Self::new(MockSynthesisConfig {
            fail_on_call: Some(call),
            ..Default::default()
        })
    }

    /// Mock whose sample rate diverges from the `call` -th call (1-based).
    pub fn rate_shifting_on_call(call: usize, rate: u32) -> Self {
        Self::new(MockSynthesisConfig {
            rate_override_from_call: Some((call, rate)),
            ..Default::default()
        })
    }

    /// Texts passed to `synthesize` so far, in call order.
    pub fn synthesized_texts(&self) -> Vec<String> {
        self.state.lock().synthesized_texts.clone()
    }

    /// Number of `synthesize` calls made so far.
    pub fn synthesize_calls(&self) -> usize {
        self.state.lock().synthesized_texts.len()
    }

    /// Number of `initialize` calls made so far.
    pub fn initialize_calls(&self) -> usize {
        self.state.lock().initialize_calls
    }
}

impl Default for MockSynthesisEngine {
    fn default() -> Self {
        Self::new(MockSynthesisConfig::default())
    }
}

#[async_trait]
impl SynthesisEngine for MockSynthesisEngine {
    fn name(&self) -> &str {
        "mock"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn initialize(&mut self) -> TtsResult<()> {
        let mut state = self.state.lock();
        state.initialized = true;
        state.initialize_calls += 1;
        Ok(())
    }

    async fn synthesize(&mut self, text: &str, options: &SynthesisOptions) -> TtsResult<AudioClip> {
        let call_number = {
            let mut state = self.state.lock();
            if !state.initialized {
                return Err(TtsError::InitializationFailed(
                    "mock engine not initialized".to_string(),
                ));
            }
            state.synthesized_texts.push(text.to_string());
            state.synthesized_texts.len()
        };

        let synthesis_id = next_synthesis_id();
        debug!(
            synthesis_id,
            call_number,
            voice = options.voice.label(),
            language = %options.language,
            "mock synthesis"
        );

        if self.config.fail_on_call == Some(call_number) {
            return Err(TtsError::SynthesisFailed(format!(
                "mock failure injected on call {call_number}"
            )));
        }

        let sample_rate = match self.config.rate_override_from_call {
            Some((from, rate)) if call_number >= from => rate,
            _ => self.config.sample_rate,
        };

        let len = text.chars().count() * self.config.samples_per_char;
        Ok(AudioClip::new(vec![0.1f32; len], sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn produces_length_proportional_clips() {
        let mut engine = MockSynthesisEngine::default();
        engine.initialize().await.unwrap();
        let options = SynthesisOptions::named("English", "Vivian");
        let clip = engine.synthesize("abcd", &options).await.unwrap();
        assert_eq!(clip.samples.len(), 400);
        assert_eq!(clip.sample_rate, 24_000);
        assert_eq!(engine.synthesized_texts(), vec!["abcd"]);
    }

    #[tokio::test]
    async fn injected_failure_hits_requested_call() {
        let mut engine = MockSynthesisEngine::failing_on_call(2);
        engine.initialize().await.unwrap();
        let options = SynthesisOptions::named("English", "Vivian");
        assert!(engine.synthesize("one", &options).await.is_ok());
        let err = engine.synthesize("two", &options).await.unwrap_err();
        assert!(matches!(err, TtsError::SynthesisFailed(_)));
    }

    #[tokio::test]
    async fn rate_override_applies_from_requested_call() {
        let mut engine = MockSynthesisEngine::rate_shifting_on_call(2, 22_050);
        engine.initialize().await.unwrap();
        let options = SynthesisOptions::named("English", "Vivian");
        assert_eq!(engine.synthesize("a", &options).await.unwrap().sample_rate, 24_000);
        assert_eq!(engine.synthesize("b", &options).await.unwrap().sample_rate, 22_050);
    }
}
