//! Deterministic waveform stitching
//!
//! Concatenates per-chunk waveforms into one continuous buffer with a fixed
//! silence gap between consecutive chunks. Pure over its inputs: identical
//! clips and pause always produce byte-identical output.

use tracing::debug;

use crate::error::AudioError;

/// Waveform produced by one engine call: mono f32 samples plus rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioClip {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// The final concatenated waveform of a request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AssembledAudio {
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Concatenate `clips` with `round(rate * pause_seconds)` samples of silence
/// strictly between consecutive clips — never before the first or after the
/// last. A single clip passes through unchanged.
///
/// All clips must share one sample rate; a divergent rate is a fatal
/// assembly error, not something to resample away.
pub fn assemble(clips: &[AudioClip], pause_seconds: f64) -> Result<AssembledAudio, AudioError> {
    let first = clips.first().ok_or(AudioError::NoClips)?;
    let sample_rate = first.sample_rate;

    for (index, clip) in clips.iter().enumerate() {
        if clip.sample_rate != sample_rate {
            return Err(AudioError::RateMismatch {
                expected: sample_rate,
                found: clip.sample_rate,
                index,
            });
        }
    }

    let gap_len = (sample_rate as f64 * pause_seconds).round() as usize;
    let total_len: usize =
        clips.iter().map(|c| c.samples.len()).sum::<usize>() + gap_len * (clips.len() - 1);

    let mut samples = Vec::with_capacity(total_len);
    for (index, clip) in clips.iter().enumerate() {
        if index > 0 {
            samples.extend(std::iter::repeat(0.0f32).take(gap_len));
        }
        samples.extend_from_slice(&clip.samples);
    }

    debug!(
        clips = clips.len(),
        gap_samples = gap_len,
        total_samples = samples.len(),
        sample_rate,
        "audio assembled"
    );

    Ok(AssembledAudio {
        samples,
        sample_rate,
    })
}
