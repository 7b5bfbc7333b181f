//! Process-wide engine sessions
//!
//! Engine state is expensive to load, so each engine lives behind a lazily
//! initialized, process-scoped session: created on first need, held for the
//! life of the process, no explicit teardown. Calls are serialized with an
//! async mutex — the hosting runtime may dispatch requests concurrently and
//! the engines themselves make no concurrency guarantees.

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tokio::sync::Mutex;
use tracing::info;

use narravox_audio::AudioClip;
use narravox_stt::{SttResult, TranscriptionEngine};
use narravox_tts::{SynthesisEngine, SynthesisOptions, TtsResult};

struct SynthesisInner {
    engine: Box<dyn SynthesisEngine>,
    initialized: bool,
}

/// Serialized handle to the synthesis engine.
pub struct EngineSession {
    inner: Mutex<SynthesisInner>,
}

impl EngineSession {
    pub fn new(engine: Box<dyn SynthesisEngine>) -> Self {
        Self {
            inner: Mutex::new(SynthesisInner {
                engine,
                initialized: false,
            }),
        }
    }

    /// Synthesize one chunk, initializing the engine on first use.
    pub async fn synthesize(&self, text: &str, options: &SynthesisOptions) -> TtsResult<AudioClip> {
        let mut inner = self.inner.lock().await;
        if !inner.initialized {
            info!(engine = inner.engine.name(), "initializing synthesis engine");
            inner.engine.initialize().await?;
            inner.initialized = true;
        }
        inner.engine.synthesize(text, options).await
    }
}

struct TranscriberInner {
    engine: Box<dyn TranscriptionEngine>,
    initialized: bool,
}

/// Serialized handle to the transcription engine.
pub struct TranscriberSession {
    inner: Mutex<TranscriberInner>,
}

impl TranscriberSession {
    pub fn new(engine: Box<dyn TranscriptionEngine>) -> Self {
        Self {
            inner: Mutex::new(TranscriberInner {
                engine,
                initialized: false,
            }),
        }
    }

    /// Transcribe a reference sample, initializing the engine on first use.
    pub async fn transcribe(&self, audio: &Path) -> SttResult<String> {
        let mut inner = self.inner.lock().await;
        if !inner.initialized {
            info!(engine = inner.engine.name(), "initializing transcription engine");
            inner.engine.initialize().await?;
            inner.initialized = true;
        }
        inner.engine.transcribe(audio).await
    }
}

static SYNTHESIS_SESSION: OnceCell<Arc<EngineSession>> = OnceCell::new();
static TRANSCRIBER_SESSION: OnceCell<Arc<TranscriberSession>> = OnceCell::new();

/// The process-wide synthesis session, created from `factory` on first need.
pub fn global_synthesis_session<F>(factory: F) -> Arc<EngineSession>
where
    F: FnOnce() -> Box<dyn SynthesisEngine>,
{
    SYNTHESIS_SESSION
        .get_or_init(|| Arc::new(EngineSession::new(factory())))
        .clone()
}

/// The process-wide transcription session, created from `factory` on first need.
pub fn global_transcriber_session<F>(factory: F) -> Arc<TranscriberSession>
where
    F: FnOnce() -> Box<dyn TranscriptionEngine>,
{
    TRANSCRIBER_SESSION
        .get_or_init(|| Arc::new(TranscriberSession::new(factory())))
        .clone()
}
