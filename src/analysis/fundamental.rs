use log::debug;
use serde::{Deserialize, Serialize};

use super::spectrum::SpectralFrame;
use crate::error::{Result, SedaError};

/// Fraction of the frame searched for the fundamental: bins `[0, N / WINDOW_DIVISOR)`.
pub const WINDOW_DIVISOR: usize = 20;

/// The reference partial every ratio is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fundamental {
  pub bin: usize,
  pub frequency: f32,
  pub magnitude: f32,
}

/// Picks the loudest bin in the low-frequency window as the fundamental.
///
/// The index is taken from the windowed scan itself; when two bins share the
/// peak magnitude the lower one wins.
///
/// # Errors
/// `SedaError::NoSignal` when the window is empty or its peak is exactly zero.
pub fn estimate(frame: &SpectralFrame) -> Result<Fundamental> {
  let window_end = frame.len() / WINDOW_DIVISOR;
  let (bin, magnitude) = match frame.peak_in(0, window_end) {
    Some(peak) => peak,
    None => return Err(SedaError::NoSignal),
  };
  if magnitude == 0.0 {
    return Err(SedaError::NoSignal);
  }

  let frequency = frame.bin_frequency(bin);
  debug!("fundamental at bin {} ({:.2} Hz), magnitude {:.4}", bin, frequency, magnitude);
  Ok(Fundamental { bin, frequency, magnitude })
}
