//! PCM to WAV container encoding

use std::io::Cursor;

use crate::assembler::AssembledAudio;
use crate::error::AudioError;

/// Encode the assembled waveform as 16-bit mono PCM WAV bytes.
///
/// Samples outside [-1.0, 1.0] are clamped before quantization.
pub fn encode_wav(audio: &AssembledAudio) -> Result<Vec<u8>, AudioError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
    for &sample in &audio.samples {
        let quantized = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer.write_sample(quantized)?;
    }
    writer.finalize()?;

    Ok(cursor.into_inner())
}
