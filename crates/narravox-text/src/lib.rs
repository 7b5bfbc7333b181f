//! Text segmentation for Narravox
//!
//! Splits unbounded input text into engine-sized chunks while respecting
//! sentence and clause boundaries. Segmentation is pure and deterministic:
//! the same input always produces the same chunk sequence.

pub mod segmenter;

pub use segmenter::{normalize, segment, TextChunk};
