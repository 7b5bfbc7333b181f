//! Per-call synthesis options and voice selection

use std::path::PathBuf;

/// How the output voice is conditioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceSelection {
    /// One of the engine's built-in named voices.
    Named(String),
    /// Clone the voice from a reference sample. The transcript is resolved
    /// once per request and reused verbatim for every chunk.
    Cloned {
        audio_path: PathBuf,
        transcript: String,
    },
}

impl VoiceSelection {
    /// Short label for logs.
    pub fn label(&self) -> &str {
        match self {
            VoiceSelection::Named(name) => name,
            VoiceSelection::Cloned { .. } => "<cloned>",
        }
    }
}

/// Options for one synthesis call. Identical for every chunk of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Language name passed through verbatim to the engine.
    pub language: String,
    pub voice: VoiceSelection,
}

impl SynthesisOptions {
    pub fn named(language: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            voice: VoiceSelection::Named(voice.into()),
        }
    }

    pub fn cloned(
        language: impl Into<String>,
        audio_path: impl Into<PathBuf>,
        transcript: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            voice: VoiceSelection::Cloned {
                audio_path: audio_path.into(),
                transcript: transcript.into(),
            },
        }
    }
}
