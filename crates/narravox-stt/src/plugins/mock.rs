//! Configurable mock transcriber for pipeline testing

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::{SttError, SttResult, TranscriptionEngine};

/// Configuration for mock transcriptions
#[derive(Debug, Clone)]
pub struct MockTranscriberConfig {
    /// Transcript to return for every call
    pub transcript: String,

    /// Fail every transcription call with this message instead
    pub fail_with: Option<String>,
}

impl Default for MockTranscriberConfig {
    fn default() -> Self {
        Self {
            transcript: "mock reference transcript".to_string(),
            fail_with: None,
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    initialized: bool,
    transcribe_calls: usize,
    initialize_calls: usize,
}

/// Mock transcription engine with call counting, for exercising the
/// resolve-once contract without neural dependencies.
#[derive(Debug, Clone)]
pub struct MockTranscriber {
    config: MockTranscriberConfig,
    state: Arc<Mutex<MockState>>,
}

impl MockTranscriber {
    pub fn new(config: MockTranscriberConfig) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Mock that returns `transcript` verbatim on every call.
    pub fn with_transcript(transcript: impl Into<String>) -> Self {
        Self::new(MockTranscriberConfig {
            transcript: transcript.into(),
            ..Default::default()
        })
    }

    /// Mock that fails every transcription call.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockTranscriberConfig {
            fail_with: Some(message.into()),
            ..Default::default()
        })
    }

    /// Number of `transcribe` calls made so far.
    pub fn transcribe_calls(&self) -> usize {
        self.state.lock().transcribe_calls
    }

    /// Number of `initialize` calls made so far.
    pub fn initialize_calls(&self) -> usize {
        self.state.lock().initialize_calls
    }
}

impl Default for MockTranscriber {
    fn default() -> Self {
        Self::new(MockTranscriberConfig::default())
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriber {
    fn name(&self) -> &str {
        "mock"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn initialize(&mut self) -> SttResult<()> {
        let mut state = self.state.lock();
        state.initialized = true;
        state.initialize_calls += 1;
        Ok(())
    }

    async fn transcribe(&mut self, audio: &Path) -> SttResult<String> {
        {
            let mut state = self.state.lock();
            if !state.initialized {
                return Err(SttError::InitializationFailed(
                    "mock transcriber not initialized".to_string(),
                ));
            }
            state.transcribe_calls += 1;
        }

        debug!(path = %audio.display(), "mock transcription");

        if let Some(message) = &self.config.fail_with {
            return Err(SttError::TranscriptionFailed(message.clone()));
        }
        Ok(self.config.transcript.clone())
    }
}
