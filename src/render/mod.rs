pub mod engrave;

use log::info;

use crate::analysis::{self, Analysis};
use crate::envelope::apply_adsr;
use crate::error::Result;
use crate::synth::{render_additive, Voicing};
use crate::synth_config::SynthConfig;
use crate::types::synthesis::{Freq, Signal};
use crate::types::timbre::{Adsr, SoundCharacter};

/// How a character is turned into a waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
  pub voicing: Voicing,
  /// Shape the normalized buffer with the character's ADSR.
  pub envelope: bool,
}

impl Default for RenderOptions {
  fn default() -> Self {
    RenderOptions { voicing: Voicing::Both, envelope: true }
  }
}

/// Scales the buffer so its loudest sample has magnitude 1. Silent buffers are untouched.
#[inline]
pub fn normalize(buffer: &mut [f32]) {
  if buffer.is_empty() {
    return;
  }

  let max_amplitude = buffer.iter().map(|&sample| sample.abs()).fold(0.0, f32::max);

  if max_amplitude > 0.0 {
    buffer.iter_mut().for_each(|sample| *sample /= max_amplitude);
  }
}

/// Rebuilds a tone from its character: oscillator bank, then normalization,
/// then (optionally) the envelope.
///
/// # Errors
/// `SedaError::InvalidEnvelope` for out-of-range ADSR values when the envelope
/// is applied, `SedaError::InvalidSampleRate` for a zero output rate.
pub fn compose(freq: Freq, character: &SoundCharacter, duration: f32, config: &SynthConfig, options: RenderOptions) -> Result<Signal> {
  if options.envelope {
    character.adsr.validate()?;
  }
  let mut signal = render_additive(freq, character, options.voicing, duration, config)?;
  normalize(&mut signal.samples);
  if options.envelope {
    apply_adsr(&mut signal.samples, &character.adsr, signal.sample_rate);
  }
  Ok(signal)
}

/// Analyzes a recording and renders it again at a new pitch and length.
///
/// Output uses the recording's sample rate. Analysis failures return before
/// any synthesis happens.
pub fn resynthesize(
  source: &Signal,
  freq: Freq,
  duration: f32,
  adsr: Adsr,
  config: &SynthConfig,
  options: RenderOptions,
) -> Result<(Analysis, Signal)> {
  let config = config.clone().with_sample_rate(source.sample_rate);
  let analysis = analysis::analyze(source, &config)?;
  info!(
    "source fundamental {:.2} Hz, rendering {:.3} s at {:.2} Hz",
    analysis.fundamental.frequency, duration, freq
  );
  let character = analysis.clone().into_character(adsr);
  let signal = compose(freq, &character, duration, &config, options)?;
  Ok((analysis, signal))
}
