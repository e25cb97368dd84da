//! Forward transform of a whole recording into one spectral frame.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::{Result, SedaError};
use crate::types::synthesis::Signal;

/// Complex coefficients of a real buffer, one per input sample.
///
/// Real input gives a conjugate-symmetric frame, so only bins up to
/// [`SpectralFrame::nyquist_bin`] carry information.
#[derive(Debug, Clone)]
pub struct SpectralFrame {
  bins: Vec<Complex<f32>>,
  sample_rate: u32,
}

impl SpectralFrame {
  pub fn bins(&self) -> &[Complex<f32>] {
    &self.bins
  }

  pub fn len(&self) -> usize {
    self.bins.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bins.is_empty()
  }

  pub fn sample_rate(&self) -> u32 {
    self.sample_rate
  }

  /// Index of the highest meaningful bin.
  pub fn nyquist_bin(&self) -> usize {
    self.bins.len() / 2
  }

  /// Bin spacing in Hz.
  pub fn resolution(&self) -> f32 {
    (self.sample_rate as f64 / self.bins.len() as f64) as f32
  }

  #[inline]
  pub fn magnitude(&self, bin: usize) -> f32 {
    self.bins[bin].norm()
  }

  #[inline]
  pub fn bin_frequency(&self, bin: usize) -> f32 {
    (bin as f64 * self.sample_rate as f64 / self.bins.len() as f64) as f32
  }

  /// Peak magnitude and its bin within `start..end`; the first bin wins ties.
  pub fn peak_in(&self, start: usize, end: usize) -> Option<(usize, f32)> {
    let end = end.min(self.bins.len());
    let mut peak: Option<(usize, f32)> = None;
    for bin in start..end {
      let mag = self.magnitude(bin);
      match peak {
        Some((_, best)) if mag <= best => {}
        _ => peak = Some((bin, mag)),
      }
    }
    peak
  }
}

/// Computes the DFT of the entire signal.
///
/// # Errors
/// `SedaError::EmptyInput` for a zero-length buffer and
/// `SedaError::NonFiniteInput` if any sample is NaN or infinite.
pub fn transform(signal: &Signal) -> Result<SpectralFrame> {
  if signal.is_empty() {
    return Err(SedaError::EmptyInput);
  }
  if signal.samples.iter().any(|s| !s.is_finite()) {
    return Err(SedaError::NonFiniteInput);
  }

  let mut planner = FftPlanner::new();
  let fft = planner.plan_fft_forward(signal.len());
  let mut bins: Vec<Complex<f32>> = signal.samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
  fft.process(&mut bins);

  Ok(SpectralFrame { bins, sample_rate: signal.sample_rate })
}
