//! Spectral decomposition of a recorded tone.
//!
//! A whole recording is transformed once; the fundamental is picked from the
//! low end of that frame and both the overtone profile and the ranked partial
//! table are measured relative to it.

pub mod fundamental;
pub mod harmonics;
pub mod partials;
pub mod spectrum;

pub use fundamental::Fundamental;
pub use spectrum::SpectralFrame;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::synth_config::SynthConfig;
use crate::types::synthesis::Signal;
use crate::types::timbre::{Adsr, HarmonicTable, PartialTable, SoundCharacter};

/// Everything one analysis pass learns about a recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
  pub fundamental: Fundamental,
  pub harmonics: HarmonicTable,
  pub partials: PartialTable,
}

impl Analysis {
  /// Pairs the measured timbre with an envelope for synthesis.
  pub fn into_character(self, adsr: Adsr) -> SoundCharacter {
    SoundCharacter {
      harmonics: self.harmonics,
      partials: self.partials,
      adsr,
    }
  }
}

/// Runs the full decomposition of one recording.
///
/// # Errors
/// Fails on empty or non-finite input, on silence, and when the fundamental
/// lands on the DC bin.
pub fn analyze(signal: &Signal, config: &SynthConfig) -> Result<Analysis> {
  let frame = spectrum::transform(signal)?;
  let fundamental = fundamental::estimate(&frame)?;
  let harmonics = harmonics::profile(&frame, &fundamental, config.harmonic_count);
  let partials = partials::rank(&frame, &fundamental, config)?;
  debug!(
    "analyzed {} samples at {} Hz: fundamental {:.2} Hz, {} partials",
    signal.len(),
    signal.sample_rate,
    fundamental.frequency,
    partials.len()
  );
  Ok(Analysis { fundamental, harmonics, partials })
}

/// Analyzes independent recordings on the rayon pool. Results keep input order.
pub fn analyze_batch(signals: &[Signal], config: &SynthConfig) -> Vec<Result<Analysis>> {
  signals.par_iter().map(|signal| analyze(signal, config)).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::SedaError;
  use std::f64::consts::TAU;

  fn sine(freq: f64, n: usize, sample_rate: u32) -> Signal {
    let samples = (0..n).map(|i| (TAU * freq * i as f64 / sample_rate as f64).sin() as f32).collect();
    Signal::new(samples, sample_rate).unwrap()
  }

  #[test]
  fn test_analyze_pure_sine() {
    let config = SynthConfig::default();
    let analysis = analyze(&sine(440.0, 44100, 44100), &config).unwrap();
    assert!((analysis.fundamental.frequency - 440.0).abs() <= 1.0);
    assert_eq!(analysis.harmonics.len(), 50);
    assert!(analysis.harmonics.ratios()[0] < 1e-3);
    assert!(analysis.partials.len() <= 2000);
    assert_eq!(analysis.partials.partials()[0].frequency_ratio, 1.0);
  }

  #[test]
  fn test_harmonic_count_is_configurable() {
    let config = SynthConfig::default().with_harmonic_count(8);
    let analysis = analyze(&sine(300.0, 4410, 44100), &config).unwrap();
    assert_eq!(analysis.harmonics.len(), 8);
  }

  #[test]
  fn test_analysis_errors_propagate() {
    let config = SynthConfig::default();
    let empty = Signal::new(vec![], 44100).unwrap();
    assert!(matches!(analyze(&empty, &config), Err(SedaError::EmptyInput)));
    let silent = Signal::new(vec![0.0; 44100], 44100).unwrap();
    assert!(matches!(analyze(&silent, &config), Err(SedaError::NoSignal)));
    let dc = Signal::new(vec![0.5; 44100], 44100).unwrap();
    assert!(matches!(analyze(&dc, &config), Err(SedaError::ZeroFundamentalFrequency)));
  }

  #[test]
  fn test_batch_keeps_order() {
    let config = SynthConfig::default().with_max_partials(8);
    let signals = vec![
      sine(200.0, 44100, 44100),
      Signal::new(vec![0.0; 100], 44100).unwrap(),
      sine(330.0, 44100, 44100),
    ];
    let results = analyze_batch(&signals, &config);
    assert_eq!(results.len(), 3);
    assert!((results[0].as_ref().unwrap().fundamental.frequency - 200.0).abs() <= 1.0);
    assert!(results[1].is_err());
    assert!((results[2].as_ref().unwrap().fundamental.frequency - 330.0).abs() <= 1.0);
  }

  #[test]
  fn test_into_character_keeps_tables() {
    let config = SynthConfig::default().with_max_partials(4);
    let analysis = analyze(&sine(250.0, 8820, 44100), &config).unwrap();
    let adsr = Adsr::new(0.1, 0.1, 0.5, 0.1).unwrap();
    let character = analysis.clone().into_character(adsr);
    assert_eq!(character.harmonics, analysis.harmonics);
    assert_eq!(character.partials, analysis.partials);
    assert_eq!(character.adsr, adsr);
  }
}
