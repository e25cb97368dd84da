pub mod synthesis {
  use crate::error::{Result, SedaError};

  pub type Freq = f32;
  pub type Ampl = f32;
  /// A floating point value value in [0, 1]
  pub type Range = f32;

  /// Sample values in -1 to 1
  pub type SampleBuffer = Vec<f32>;

  /// A mono sample buffer paired with the rate it was recorded or rendered at.
  #[derive(Debug, Clone, PartialEq)]
  pub struct Signal {
    pub samples: SampleBuffer,
    /// Sample rate in Hz.
    pub sample_rate: u32,
  }

  impl Signal {
    /// # Errors
    /// Returns `SedaError::InvalidSampleRate` if `sample_rate` is 0.
    pub fn new(samples: SampleBuffer, sample_rate: u32) -> Result<Self> {
      if sample_rate == 0 {
        return Err(SedaError::InvalidSampleRate { rate: sample_rate });
      }
      Ok(Signal { samples, sample_rate })
    }

    pub fn len(&self) -> usize {
      self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
      self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
      self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value, 0 for an empty buffer.
    pub fn peak(&self) -> f32 {
      self.samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
    }
  }
}

pub mod timbre {
  use super::synthesis::Range;
  use crate::error::{Result, SedaError};
  use serde::{Deserialize, Serialize};

  /// Number of overtones measured per analysis unless configured otherwise.
  pub const HARMONIC_COUNT: usize = 50;

  /// Upper bound on the ranked partial table unless configured otherwise.
  pub const MAX_PARTIALS: usize = 2000;

  /// One spectral component relative to the fundamental.
  #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
  pub struct Partial {
    /// Frequency / fundamental frequency.
    pub frequency_ratio: f32,
    /// Magnitude / fundamental magnitude.
    pub magnitude_ratio: f32,
  }

  impl Partial {
    pub fn new(frequency_ratio: f32, magnitude_ratio: f32) -> Self {
      Partial { frequency_ratio, magnitude_ratio }
    }
  }

  /// Magnitude ratios of the overtones of a fundamental.
  ///
  /// Index `i` holds the overtone at `(i + 2)` times the fundamental, so
  /// index 0 is the 2nd partial. Ratios are never negative but may exceed 1
  /// when an overtone is louder than the fundamental.
  #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
  #[serde(transparent)]
  pub struct HarmonicTable(Vec<f32>);

  impl HarmonicTable {
    pub fn new(ratios: Vec<f32>) -> Self {
      HarmonicTable(ratios)
    }

    /// A silent table of `len` overtones.
    pub fn zeros(len: usize) -> Self {
      HarmonicTable(vec![0.0; len])
    }

    /// Multiple of the fundamental represented by `index`.
    #[inline]
    pub fn order(index: usize) -> usize {
      index + 2
    }

    pub fn ratios(&self) -> &[f32] {
      &self.0
    }

    pub fn len(&self) -> usize {
      self.0.len()
    }

    pub fn is_empty(&self) -> bool {
      self.0.is_empty()
    }
  }

  impl Default for HarmonicTable {
    fn default() -> Self {
      HarmonicTable::zeros(HARMONIC_COUNT)
    }
  }

  /// Partials sorted by descending magnitude ratio.
  #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
  #[serde(transparent)]
  pub struct PartialTable(Vec<Partial>);

  impl PartialTable {
    /// Builds a table from arbitrary partials, restoring the descending
    /// magnitude order. Equal magnitudes keep their given order.
    pub fn new(mut partials: Vec<Partial>) -> Self {
      partials.sort_by(|a, b| b.magnitude_ratio.total_cmp(&a.magnitude_ratio));
      PartialTable(partials)
    }

    /// Wraps partials already known to be in descending order.
    pub(crate) fn from_sorted(partials: Vec<Partial>) -> Self {
      PartialTable(partials)
    }

    pub fn partials(&self) -> &[Partial] {
      &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Partial> {
      self.0.iter()
    }

    pub fn len(&self) -> usize {
      self.0.len()
    }

    pub fn is_empty(&self) -> bool {
      self.0.is_empty()
    }
  }

  /// Attack, decay and release in seconds; sustain as a level in [0, 1].
  #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
  pub struct Adsr {
    pub attack: f32,
    pub decay: f32,
    pub sustain: Range,
    pub release: f32,
  }

  impl Adsr {
    /// # Errors
    /// Returns `SedaError::InvalidEnvelope` for negative or non-finite
    /// durations, or a sustain level outside [0, 1].
    pub fn new(attack: f32, decay: f32, sustain: Range, release: f32) -> Result<Self> {
      let adsr = Adsr { attack, decay, sustain, release };
      adsr.validate()?;
      Ok(adsr)
    }

    /// No shaping: instant attack, full sustain, no release.
    pub fn flat() -> Self {
      Adsr { attack: 0.0, decay: 0.0, sustain: 1.0, release: 0.0 }
    }

    pub fn validate(&self) -> Result<()> {
      for (name, value) in [("attack", self.attack), ("decay", self.decay), ("release", self.release)] {
        if !value.is_finite() || value < 0.0 {
          return Err(SedaError::InvalidEnvelope { name, value });
        }
      }
      if !(0.0..=1.0).contains(&self.sustain) {
        return Err(SedaError::InvalidEnvelope { name: "sustain", value: self.sustain });
      }
      Ok(())
    }

    /// Combined attack, decay and release length in seconds.
    pub fn span_secs(&self) -> f32 {
      self.attack + self.decay + self.release
    }
  }

  impl Default for Adsr {
    fn default() -> Self {
      Adsr { attack: 0.01, decay: 0.1, sustain: 0.7, release: 0.2 }
    }
  }

  /// Timbre plus dynamics: everything synthesis needs besides pitch and length.
  #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
  pub struct SoundCharacter {
    pub harmonics: HarmonicTable,
    pub partials: PartialTable,
    pub adsr: Adsr,
  }
}
