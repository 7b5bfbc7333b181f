//! Narravox worker library
//!
//! Wires the pipeline together: validated request in, structured response
//! out. The long-form path resolves a reference voice, segments the text,
//! drives the synthesis engine chunk by chunk, and stitches the waveforms
//! into one continuous WAV.

pub mod error;
pub mod orchestrator;
pub mod pipeline;
pub mod reference;
pub mod session;
pub mod types;

pub use error::PipelineError;
pub use pipeline::PipelineController;
pub use session::{
    global_synthesis_session, global_transcriber_session, EngineSession, TranscriberSession,
};
pub use types::{ErrorResponse, SynthesisRequest, SynthesisResponse, MAX_PLAIN_TEXT_CHARS};
