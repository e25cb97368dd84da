use log::debug;

use super::fundamental::Fundamental;
use super::spectrum::SpectralFrame;
use crate::error::{Result, SedaError};
use crate::synth_config::SynthConfig;
use crate::types::timbre::{Partial, PartialTable};

/// Ranks every audible bin by magnitude and keeps the loudest ones.
///
/// The fundamental is placed first so it survives ties, then each bin in
/// `[config.min_frequency, config.max_frequency]` is collected. The list is
/// stably sorted by descending magnitude and cut to `config.max_partials`.
///
/// # Errors
/// `SedaError::ZeroFundamentalMagnitude` or `SedaError::ZeroFundamentalFrequency`
/// when the ratios would divide by zero.
pub fn rank(frame: &SpectralFrame, fundamental: &Fundamental, config: &SynthConfig) -> Result<PartialTable> {
  if fundamental.magnitude == 0.0 {
    return Err(SedaError::ZeroFundamentalMagnitude);
  }
  if fundamental.frequency == 0.0 {
    return Err(SedaError::ZeroFundamentalFrequency);
  }

  let audible = config.min_frequency..=config.max_frequency;
  let mut candidates: Vec<(f32, f32)> = Vec::with_capacity(frame.nyquist_bin() + 2);
  candidates.push((fundamental.frequency, fundamental.magnitude));
  for bin in 0..=frame.nyquist_bin() {
    let frequency = frame.bin_frequency(bin);
    if bin != fundamental.bin && audible.contains(&frequency) {
      candidates.push((frequency, frame.magnitude(bin)));
    }
  }

  candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
  candidates.truncate(config.max_partials);
  debug!("ranked {} partials", candidates.len());

  let partials = candidates
    .into_iter()
    .map(|(frequency, magnitude)| Partial::new(frequency / fundamental.frequency, magnitude / fundamental.magnitude))
    .collect();
  Ok(PartialTable::from_sorted(partials))
}
