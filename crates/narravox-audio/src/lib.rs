//! Audio assembly layer for Narravox
//!
//! Owns the sample-buffer types shared across the pipeline, the pure
//! concatenation of per-chunk waveforms with inter-chunk silence, and the
//! PCM-to-WAV container encoding.

pub mod assembler;
pub mod error;
pub mod wav;

pub use assembler::{assemble, AssembledAudio, AudioClip};
pub use error::AudioError;
pub use wav::encode_wav;
