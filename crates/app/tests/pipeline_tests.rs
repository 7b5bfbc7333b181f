//! End-to-end pipeline tests over the public handler surface, using the
//! configurable engine plugins instead of neural backends.

use std::io::Cursor;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::json;

use narravox_app::{
    EngineSession, ErrorResponse, PipelineController, SynthesisRequest, TranscriberSession,
};
use narravox_stt::plugins::MockTranscriber;
use narravox_tts::plugins::MockSynthesisEngine;

fn controller_with(
    engine: MockSynthesisEngine,
    transcriber: MockTranscriber,
) -> PipelineController {
    PipelineController::new(
        Arc::new(EngineSession::new(Box::new(engine))),
        Arc::new(TranscriberSession::new(Box::new(transcriber))),
    )
}

fn request(value: serde_json::Value) -> SynthesisRequest {
    serde_json::from_value(value).unwrap()
}

fn ref_audio() -> String {
    STANDARD.encode(b"fake reference audio bytes")
}

fn wav_sample_count(audio_base64: &str) -> u32 {
    let bytes = STANDARD.decode(audio_base64).unwrap();
    hound::WavReader::new(Cursor::new(bytes)).unwrap().len()
}

#[tokio::test]
async fn long_form_cloning_end_to_end() {
    let engine = MockSynthesisEngine::default(); // 100 samples/char @ 24 kHz
    let transcriber = MockTranscriber::with_transcript("  авто транскрипт  ");
    let engine_handle = engine.clone();
    let transcriber_handle = transcriber.clone();
    let controller = controller_with(engine, transcriber);

    let req = request(json!({
        "text": "One two. Three four. Five six.",
        "ref_audio_base64": ref_audio(),
        "max_chunk_size": 10,
        "pause_duration": 0.5,
    }));
    let resp = controller.handle(&req).await.unwrap();

    // Segmentation: ["One two.", "Three", "four.", "Five six."]
    assert_eq!(resp.chunks_count, Some(4));
    assert_eq!(resp.total_chars, Some(27));
    assert_eq!(resp.text_length, 30);
    assert_eq!(resp.format, "wav");
    assert_eq!(resp.sample_rate, 24_000);
    assert_eq!(resp.ref_text_used.as_deref(), Some("авто транскрипт"));

    // 27 chars * 100 samples + 3 gaps * 12000 samples.
    assert_eq!(wav_sample_count(&resp.audio_base64), 38_700);
    assert!((resp.duration_seconds.unwrap() - 38_700.0 / 24_000.0).abs() < 1e-9);

    assert_eq!(transcriber_handle.transcribe_calls(), 1);
    assert_eq!(
        engine_handle.synthesized_texts(),
        vec!["One two.", "Three", "four.", "Five six."]
    );
}

#[tokio::test]
async fn explicit_ref_text_skips_transcription_and_is_verbatim() {
    let transcriber = MockTranscriber::with_transcript("must not be used");
    let transcriber_handle = transcriber.clone();
    let controller = controller_with(MockSynthesisEngine::default(), transcriber);

    let req = request(json!({
        "text": "Short sentence.",
        "ref_audio_base64": ref_audio(),
        "ref_text": "  supplied verbatim  ",
    }));
    let resp = controller.handle(&req).await.unwrap();

    assert_eq!(resp.ref_text_used.as_deref(), Some("  supplied verbatim  "));
    assert_eq!(transcriber_handle.transcribe_calls(), 0);
}

#[tokio::test]
async fn single_chunk_request_has_no_silence() {
    let controller =
        controller_with(MockSynthesisEngine::default(), MockTranscriber::default());

    let req = request(json!({
        "text": "Just one small sentence.",
        "ref_audio_base64": ref_audio(),
        "pause_duration": 2.0,
    }));
    let resp = controller.handle(&req).await.unwrap();

    assert_eq!(resp.chunks_count, Some(1));
    // 24 chars * 100 samples, no gap despite the large pause setting.
    assert_eq!(wav_sample_count(&resp.audio_base64), 2_400);
}

#[tokio::test]
async fn transcription_failure_aborts_before_any_synthesis() {
    let engine = MockSynthesisEngine::default();
    let engine_handle = engine.clone();
    let controller = controller_with(engine, MockTranscriber::failing("no speech"));

    let req = request(json!({
        "text": "Some text to clone.",
        "ref_audio_base64": ref_audio(),
    }));
    let err = controller.handle(&req).await.unwrap_err();

    assert_eq!(err.kind(), "transcription");
    assert_eq!(engine_handle.synthesize_calls(), 0);
}

#[tokio::test]
async fn mid_sequence_synthesis_failure_returns_no_partial_audio() {
    let engine = MockSynthesisEngine::failing_on_call(2);
    let engine_handle = engine.clone();
    let controller = controller_with(engine, MockTranscriber::default());

    let req = request(json!({
        "text": "One two. Three four. Five six.",
        "ref_audio_base64": ref_audio(),
        "max_chunk_size": 10,
    }));
    let err = controller.handle(&req).await.unwrap_err();

    assert_eq!(err.kind(), "synthesis");
    // Aborted at the failing chunk; later chunks never attempted.
    assert_eq!(engine_handle.synthesize_calls(), 2);
}

#[tokio::test]
async fn sample_rate_drift_is_an_assembly_error() {
    let engine = MockSynthesisEngine::rate_shifting_on_call(2, 22_050);
    let controller = controller_with(engine, MockTranscriber::default());

    let req = request(json!({
        "text": "One two. Three four. Five six.",
        "ref_audio_base64": ref_audio(),
        "max_chunk_size": 10,
    }));
    let err = controller.handle(&req).await.unwrap_err();

    assert_eq!(err.kind(), "assembly");
}

#[tokio::test]
async fn plain_mode_is_single_call_without_chunk_fields() {
    let engine = MockSynthesisEngine::default();
    let engine_handle = engine.clone();
    let controller = controller_with(engine, MockTranscriber::default());

    let req = request(json!({ "text": "Hello plain mode." }));
    let resp = controller.handle(&req).await.unwrap();

    assert_eq!(resp.voice.as_deref(), Some("Vivian"));
    assert_eq!(resp.language.as_deref(), Some("Russian"));
    assert!(resp.chunks_count.is_none());
    assert!(resp.ref_text_used.is_none());
    assert_eq!(resp.text_length, 17);
    // The full text goes to the engine in one call, unsegmented.
    assert_eq!(engine_handle.synthesized_texts(), vec!["Hello plain mode."]);
}

#[tokio::test]
async fn validation_failures_happen_before_engine_work() {
    let engine = MockSynthesisEngine::default();
    let transcriber = MockTranscriber::default();
    let engine_handle = engine.clone();
    let transcriber_handle = transcriber.clone();
    let controller = controller_with(engine, transcriber);

    let bad_requests = vec![
        json!({ "text": "" }),
        json!({ "text": "hi", "max_chunk_size": 0 }),
        json!({ "text": "hi", "pause_duration": -1.0 }),
        json!({ "text": "hi", "ref_audio_base64": "" }),
        json!({ "text": "a".repeat(10_001) }),
    ];
    for value in bad_requests {
        let err = controller.handle(&request(value)).await.unwrap_err();
        assert_eq!(err.kind(), "validation");
    }

    assert_eq!(engine_handle.synthesize_calls(), 0);
    assert_eq!(transcriber_handle.transcribe_calls(), 0);
}

#[tokio::test]
async fn invalid_base64_is_a_validation_error() {
    let controller =
        controller_with(MockSynthesisEngine::default(), MockTranscriber::default());

    let req = request(json!({
        "text": "Clone me.",
        "ref_audio_base64": "@@not-base64@@",
    }));
    let err = controller.handle(&req).await.unwrap_err();
    assert_eq!(err.kind(), "validation");
}

#[tokio::test]
async fn failed_request_does_not_poison_the_next() {
    let engine = MockSynthesisEngine::failing_on_call(1);
    let controller = controller_with(engine, MockTranscriber::default());

    let failing = request(json!({
        "text": "This will fail.",
        "ref_audio_base64": ref_audio(),
    }));
    assert!(controller.handle(&failing).await.is_err());

    let recovering = request(json!({
        "text": "This will succeed.",
        "ref_audio_base64": ref_audio(),
    }));
    let resp = controller.handle(&recovering).await.unwrap();
    assert_eq!(resp.chunks_count, Some(1));
}

#[tokio::test]
async fn engine_initializes_once_across_requests() {
    let engine = MockSynthesisEngine::default();
    let engine_handle = engine.clone();
    let controller = controller_with(engine, MockTranscriber::default());

    for _ in 0..3 {
        let req = request(json!({ "text": "Hello again." }));
        controller.handle(&req).await.unwrap();
    }
    assert_eq!(engine_handle.initialize_calls(), 1);
}

#[tokio::test]
async fn cloning_mode_accepts_text_beyond_plain_cap() {
    let controller =
        controller_with(MockSynthesisEngine::default(), MockTranscriber::default());

    let sentence = "This sentence repeats to exceed the plain cap. ";
    let text: String = sentence.repeat(250); // ~11 750 chars
    let req = request(json!({
        "text": text,
        "ref_audio_base64": ref_audio(),
    }));
    let resp = controller.handle(&req).await.unwrap();
    assert!(resp.chunks_count.unwrap() > 1);
}

#[test]
fn error_response_carries_classified_message() {
    let err = narravox_app::PipelineError::Validation("'text' must be present".to_string());
    let resp = ErrorResponse::from_error(&err);
    assert!(resp.error.contains("'text' must be present"));
    assert!(resp.traceback.is_some());
    let value = serde_json::to_value(&resp).unwrap();
    assert!(value.get("error").is_some());
}
