//! Writing rendered signals to mono WAV files.

use std::path::Path;

use crate::error::Result;
use crate::files;
use crate::types::synthesis::Signal;

/// Sample encoding of the written file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WavFormat {
  /// 16-bit integer PCM, clamped to [-1, 1].
  #[default]
  Pcm16,
  /// 32-bit IEEE float, written as-is.
  Float32,
}

pub fn signal<P: AsRef<Path>>(path: P, signal: &Signal, format: WavFormat) -> Result<()> {
  let path = path.as_ref();
  files::with_dir(path)?;
  let spec = match format {
    WavFormat::Pcm16 => hound::WavSpec {
      channels: 1,
      sample_rate: signal.sample_rate,
      bits_per_sample: 16,
      sample_format: hound::SampleFormat::Int,
    },
    WavFormat::Float32 => hound::WavSpec {
      channels: 1,
      sample_rate: signal.sample_rate,
      bits_per_sample: 32,
      sample_format: hound::SampleFormat::Float,
    },
  };

  let mut writer = hound::WavWriter::create(path, spec)?;
  match format {
    WavFormat::Pcm16 => {
      let scale = i16::MAX as f32;
      for &sample in &signal.samples {
        writer.write_sample((sample.clamp(-1.0, 1.0) * scale) as i16)?;
      }
    }
    WavFormat::Float32 => {
      for &sample in &signal.samples {
        writer.write_sample(sample)?;
      }
    }
  }
  writer.finalize()?;
  log::info!("wrote {} samples to {}", signal.len(), path.display());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_pcm16_header_and_clamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clamp.wav");
    let input = Signal::new(vec![0.0, 0.5, 2.0, -3.0], 22050).unwrap();
    signal(&path, &input, WavFormat::Pcm16).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 22050);
    assert_eq!(spec.bits_per_sample, 16);
    let written: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(written, vec![0, 16383, i16::MAX, -i16::MAX]);
  }

  #[test]
  fn test_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deeper/out.wav");
    let input = Signal::new(vec![0.25; 8], 8000).unwrap();
    signal(&path, &input, WavFormat::Float32).unwrap();
    assert!(path.exists());
  }
}
