//! Built-in transcription engines that need no neural dependencies

pub mod mock;

pub use mock::{MockTranscriber, MockTranscriberConfig};
