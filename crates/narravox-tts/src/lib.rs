//! Speech-synthesis abstraction layer for Narravox
//!
//! This crate provides the foundational types and traits for text-to-speech
//! synthesis: the engine trait, per-call options including voice cloning,
//! and error types. Concrete neural engines are external collaborators;
//! the built-in plugins exist so the pipeline runs and tests without them.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

pub mod error;
pub mod plugins;
pub mod types;

pub use error::{TtsError, TtsResult};
pub use narravox_audio::AudioClip;
pub use types::{SynthesisOptions, VoiceSelection};

/// Generates unique synthesis IDs
static SYNTHESIS_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique synthesis ID
pub fn next_synthesis_id() -> u64 {
    SYNTHESIS_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Core synthesis engine interface
///
/// One call synthesizes one bounded chunk of text into a waveform. Engines
/// are stateful (loaded model weights) and are initialized once by the
/// session that owns them; they are not required to be safe under
/// concurrent invocation — serialization is the caller's job.
#[async_trait]
pub trait SynthesisEngine: Send + Sync {
    /// Engine name/identifier for logs
    fn name(&self) -> &str;

    /// Check if the engine is usable on this system
    async fn is_available(&self) -> bool;

    /// Load engine state. Expensive; called once per process by the session.
    async fn initialize(&mut self) -> TtsResult<()>;

    /// Synthesize one chunk of text into a waveform.
    async fn synthesize(&mut self, text: &str, options: &SynthesisOptions) -> TtsResult<AudioClip>;
}
