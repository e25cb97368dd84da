//! Decoding WAV recordings into mono signals.

use std::path::Path;

use crate::error::{Result, SedaError};
use crate::types::synthesis::{SampleBuffer, Signal};

/// Reads a WAV file as a mono [`Signal`].
///
/// Integer PCM of 8 to 32 bits is scaled by `2^(bits - 1)`; 32-bit float is
/// taken as-is. Multi-channel files are averaged down to one channel.
pub fn signal<P: AsRef<Path>>(path: P) -> Result<Signal> {
    let mut reader = hound::WavReader::open(path.as_ref())?;
    let spec = reader.spec();
    if spec.channels == 0 {
        return Err(SedaError::UnsupportedFormat("zero channels".to_string()));
    }

    let interleaved: SampleBuffer = match spec.sample_format {
        hound::SampleFormat::Float => {
            if spec.bits_per_sample != 32 {
                return Err(SedaError::UnsupportedFormat(format!(
                    "{}-bit float samples",
                    spec.bits_per_sample
                )));
            }
            reader.samples::<f32>().collect::<std::result::Result<_, _>>()?
        }
        hound::SampleFormat::Int => {
            if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                return Err(SedaError::UnsupportedFormat(format!(
                    "{}-bit integer samples",
                    spec.bits_per_sample
                )));
            }
            let scale = (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    let samples = downmix(&interleaved, spec.channels as usize);
    log::debug!(
        "read {} frames, {} channel(s) at {} Hz",
        samples.len(),
        spec.channels,
        spec.sample_rate
    );
    Signal::new(samples, spec.sample_rate)
}

/// Averages interleaved channels into one.
fn downmix(interleaved: &[f32], channels: usize) -> SampleBuffer {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_i16(path: &Path, channels: u16, data: &[i16]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in data {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_reads_pcm16_scaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        write_i16(&path, 1, &[0, 16384, -32768]);
        let signal = signal(&path).unwrap();
        assert_eq!(signal.sample_rate, 8000);
        assert_eq!(signal.samples, vec![0.0, 0.5, -1.0]);
    }

    #[test]
    fn test_stereo_is_averaged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_i16(&path, 2, &[16384, 0, -16384, -16384]);
        let signal = signal(&path).unwrap();
        assert_eq!(signal.samples, vec![0.25, -0.5]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(signal(dir.path().join("nope.wav")), Err(SedaError::Wav(_))));
    }

    #[test]
    fn test_downmix_drops_partial_frame() {
        assert_eq!(downmix(&[1.0, 0.0, 0.5], 2), vec![0.5]);
    }
}
