use super::fundamental::Fundamental;
use super::spectrum::SpectralFrame;
use crate::types::timbre::HarmonicTable;

/// Bins searched on either side of each overtone's nominal position.
pub const SEARCH_RADIUS: usize = 5;

/// Measures the loudest bin near each multiple of the fundamental.
///
/// Entry `i` covers the overtone of order `i + 2`, searched over
/// `[order * bin - 5, order * bin + 5]` clipped to the lower half of the
/// frame, and is stored relative to the fundamental's magnitude. Windows
/// that fall past Nyquist contribute 0.
pub fn profile(frame: &SpectralFrame, fundamental: &Fundamental, count: usize) -> HarmonicTable {
  let half = frame.nyquist_bin();
  let ratios = (0..count)
    .map(|index| {
      let center = HarmonicTable::order(index).saturating_mul(fundamental.bin);
      let start = center.saturating_sub(SEARCH_RADIUS);
      let end = center.saturating_add(SEARCH_RADIUS + 1).min(half);
      match frame.peak_in(start, end) {
        Some((_, peak)) if fundamental.magnitude > 0.0 => peak / fundamental.magnitude,
        _ => 0.0,
      }
    })
    .collect();
  HarmonicTable::new(ratios)
}
