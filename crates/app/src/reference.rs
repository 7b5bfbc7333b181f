//! Reference voice resolution
//!
//! Materializes the decoded reference audio to a scoped temp file and
//! resolves its transcript: the caller-supplied value verbatim, or exactly
//! one automatic transcription. Dropping the `ReferenceVoice` removes the
//! temp file on every exit path, including mid-pipeline failures.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use narravox_stt::SttError;

use crate::error::PipelineError;
use crate::session::TranscriberSession;

/// A reference sample plus its resolved transcript, immutable after
/// resolution and reused for every chunk of the request.
#[derive(Debug)]
pub struct ReferenceVoice {
    audio: NamedTempFile,
    transcript: String,
}

impl ReferenceVoice {
    /// Write the decoded reference audio to a temp file and resolve its
    /// transcript. The transcription engine is invoked at most once.
    pub async fn resolve(
        audio_bytes: &[u8],
        explicit_transcript: &str,
        transcriber: &TranscriberSession,
    ) -> Result<Self, PipelineError> {
        let mut audio = NamedTempFile::new()?;
        audio.write_all(audio_bytes)?;
        audio.flush()?;
        debug!(
            bytes = audio_bytes.len(),
            path = %audio.path().display(),
            "reference audio written"
        );

        let transcript = if !explicit_transcript.is_empty() {
            debug!("using caller-supplied reference transcript");
            explicit_transcript.to_string()
        } else {
            let raw = transcriber
                .transcribe(audio.path())
                .await
                .map_err(PipelineError::Transcription)?;
            let trimmed = raw.trim().to_string();
            if trimmed.is_empty() {
                // An empty transcript would corrupt cloning silently.
                return Err(PipelineError::Transcription(SttError::TranscriptionFailed(
                    "engine returned an empty transcript".to_string(),
                )));
            }
            info!(
                chars = trimmed.chars().count(),
                "reference transcript resolved by transcription"
            );
            trimmed
        };

        Ok(Self { audio, transcript })
    }

    pub fn audio_path(&self) -> &Path {
        self.audio.path()
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use narravox_stt::plugins::MockTranscriber;

    fn session(mock: MockTranscriber) -> Arc<TranscriberSession> {
        Arc::new(TranscriberSession::new(Box::new(mock)))
    }

    #[tokio::test]
    async fn explicit_transcript_is_used_verbatim() {
        let mock = MockTranscriber::with_transcript("should not be called");
        let handle = mock.clone();
        let voice = ReferenceVoice::resolve(b"audio", "  verbatim text  ", &session(mock))
            .await
            .unwrap();
        assert_eq!(voice.transcript(), "  verbatim text  ");
        assert_eq!(handle.transcribe_calls(), 0);
    }

    #[tokio::test]
    async fn empty_transcript_triggers_exactly_one_transcription() {
        let mock = MockTranscriber::with_transcript("  распознанный текст \n");
        let handle = mock.clone();
        let voice = ReferenceVoice::resolve(b"audio", "", &session(mock)).await.unwrap();
        assert_eq!(voice.transcript(), "распознанный текст");
        assert_eq!(handle.transcribe_calls(), 1);
    }

    #[tokio::test]
    async fn transcription_failure_is_classified() {
        let mock = MockTranscriber::failing("no speech found");
        let err = ReferenceVoice::resolve(b"audio", "", &session(mock)).await.unwrap_err();
        assert_eq!(err.kind(), "transcription");
    }

    #[tokio::test]
    async fn whitespace_only_transcript_is_an_error() {
        let mock = MockTranscriber::with_transcript("   \n ");
        let err = ReferenceVoice::resolve(b"audio", "", &session(mock)).await.unwrap_err();
        assert_eq!(err.kind(), "transcription");
    }

    #[tokio::test]
    async fn temp_file_is_removed_on_drop() {
        let mock = MockTranscriber::with_transcript("ok");
        let voice = ReferenceVoice::resolve(b"audio", "", &session(mock)).await.unwrap();
        let path = voice.audio_path().to_path_buf();
        assert!(path.exists());
        drop(voice);
        assert!(!path.exists());
    }
}
