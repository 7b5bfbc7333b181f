//! Narravox worker binary
//!
//! Stands in for the serverless runtime: one JSON request per stdin line,
//! one JSON response per stdout line. Logs go to stderr so stdout stays a
//! clean response stream. Engine selection is deliberately non-neural —
//! the real engines are external collaborators wired in by deployment.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use narravox_app::{
    global_synthesis_session, global_transcriber_session, ErrorResponse, PipelineController,
    SynthesisRequest,
};
use narravox_stt::plugins::MockTranscriber;
use narravox_stt::TranscriptionEngine;
use narravox_tts::plugins::{MockSynthesisEngine, SineSynthesisEngine};
use narravox_tts::SynthesisEngine;

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_synthesis_engine() -> Box<dyn SynthesisEngine> {
    match std::env::var("NARRAVOX_ENGINE").ok().as_deref() {
        Some("mock") => Box::new(MockSynthesisEngine::default()),
        _ => Box::new(SineSynthesisEngine::new()),
    }
}

fn build_transcription_engine() -> Box<dyn TranscriptionEngine> {
    Box::new(MockTranscriber::default())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    info!("starting narravox worker");

    let controller = PipelineController::new(
        global_synthesis_session(build_synthesis_engine),
        global_transcriber_session(build_transcription_engine),
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let output = match serde_json::from_str::<SynthesisRequest>(line) {
            Ok(request) => match controller.handle(&request).await {
                Ok(response) => serde_json::to_string(&response)?,
                Err(err) => {
                    warn!(kind = err.kind(), error = %err, "request failed");
                    serde_json::to_string(&ErrorResponse::from_error(&err))?
                }
            },
            Err(err) => {
                warn!(error = %err, "unparseable request");
                serde_json::to_string(&ErrorResponse::from_message(format!(
                    "invalid request: {err}"
                )))?
            }
        };
        println!("{output}");
    }

    info!("input closed, narravox worker stopping");
    Ok(())
}
