//! Attack/decay/sustain/release amplitude shaping.
//!
//! Segment lengths are floored to whole samples. When the segments do not
//! fit in the buffer the phases are tested in order (attack, decay, sustain,
//! release) and the first match wins, so a short buffer may never reach its
//! release.

use log::warn;

use crate::types::timbre::Adsr;

/// Whole samples covered by `secs` seconds, saturating at `u64::MAX`.
fn segment_len(secs: f32, sample_rate: u32) -> u64 {
    let n = (secs as f64 * sample_rate as f64).floor();
    if n.is_finite() && n > 0.0 {
        n as u64
    } else if n > 0.0 {
        u64::MAX
    } else {
        0
    }
}

/// Position within a segment as a fraction; a zero-length segment is already complete.
#[inline]
fn progress(offset: i128, len: u64) -> f32 {
    if len == 0 {
        1.0
    } else {
        (offset as f64 / len as f64) as f32
    }
}

/// Segment lengths of an envelope in samples.
///
/// Offsets are compared in 128-bit integers so that segments far longer
/// than any buffer neither overflow nor wrap.
struct Segments {
    attack: u64,
    decay: u64,
    release: u64,
    sustain: f32,
}

impl Segments {
    fn new(adsr: &Adsr, sample_rate: u32) -> Self {
        Segments {
            attack: segment_len(adsr.attack, sample_rate),
            decay: segment_len(adsr.decay, sample_rate),
            release: segment_len(adsr.release, sample_rate),
            sustain: adsr.sustain,
        }
    }

    fn span(&self) -> u128 {
        self.attack as u128 + self.decay as u128 + self.release as u128
    }

    /// Gain at sample `i` of a buffer of `total` samples.
    #[inline]
    fn gain(&self, i: usize, total: usize) -> f32 {
        let i = i as i128;
        let attack = self.attack as i128;
        let decay_end = attack + self.decay as i128;
        // May fall before the first sample.
        let release_start = total as i128 - self.release as i128;
        if i < attack {
            progress(i, self.attack)
        } else if i < decay_end {
            let p = progress(i - attack, self.decay);
            (1.0 - p) * (1.0 - self.sustain) + self.sustain
        } else if i < release_start {
            self.sustain
        } else {
            let q = progress(i - release_start, self.release);
            (1.0 - q) * self.sustain
        }
    }
}

/// Multiplies every sample by the envelope gain, in place.
pub fn apply_adsr(samples: &mut [f32], adsr: &Adsr, sample_rate: u32) {
    let total = samples.len();
    let segments = Segments::new(adsr, sample_rate);
    if segments.span() > total as u128 {
        warn!(
            "envelope segments ({} + {} + {} samples) exceed buffer of {} samples; later phases are cut short",
            segments.attack, segments.decay, segments.release, total
        );
    }

    for (i, sample) in samples.iter_mut().enumerate() {
        *sample *= segments.gain(i, total);
    }
}
