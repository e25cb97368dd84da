//! Additive oscillator bank.
//!
//! Every overtone and partial of a [`SoundCharacter`] becomes one sine
//! oscillator at a multiple of the requested fundamental. All oscillators
//! write the same sample indices, so the parallel path accumulates into
//! per-worker buffers and sums them afterwards.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use crate::error::Result;
use crate::synth_config::SynthConfig;
use crate::types::synthesis::{Freq, SampleBuffer, Signal};
use crate::types::timbre::{HarmonicTable, SoundCharacter};

/// Which tables of a [`SoundCharacter`] are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Voicing {
    /// Overtone profile only.
    Harmonics,
    /// Ranked partial table only.
    Partials,
    /// Superposition of both tables.
    #[default]
    Both,
}

impl FromStr for Voicing {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "harmonics" => Ok(Voicing::Harmonics),
            "partials" => Ok(Voicing::Partials),
            "both" => Ok(Voicing::Both),
            other => Err(format!("unknown voicing '{}', expected harmonics, partials or both", other)),
        }
    }
}

impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Voicing::Harmonics => "harmonics",
            Voicing::Partials => "partials",
            Voicing::Both => "both",
        };
        f.write_str(name)
    }
}

/// A single sine component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub frequency: f64,
    pub amplitude: f32,
}

impl Oscillator {
    /// Adds `amplitude * sin(2π f t)` onto every sample, with `t = j / sample_rate`.
    pub fn add_to(&self, buffer: &mut [f32], sample_rate: u32) {
        let cycles_per_sample = self.frequency / sample_rate as f64;
        for (j, sample) in buffer.iter_mut().enumerate() {
            // Wrapping the phase keeps precision for long buffers.
            let phase = (cycles_per_sample * j as f64).fract();
            *sample += self.amplitude * (TAU * phase).sin() as f32;
        }
    }
}

/// Expands a character into oscillators voiced at `freq`.
///
/// Overtone entry `i` plays at `freq * (i + 2)`; a partial plays at
/// `freq * frequency_ratio`. Silent components are dropped.
pub fn oscillators(freq: Freq, character: &SoundCharacter, voicing: Voicing) -> Vec<Oscillator> {
    let freq = freq as f64;
    let mut bank = Vec::new();
    if matches!(voicing, Voicing::Harmonics | Voicing::Both) {
        bank.extend(character.harmonics.ratios().iter().enumerate().map(|(i, &amp)| Oscillator {
            frequency: freq * HarmonicTable::order(i) as f64,
            amplitude: amp,
        }));
    }
    if matches!(voicing, Voicing::Partials | Voicing::Both) {
        bank.extend(character.partials.iter().map(|p| Oscillator {
            frequency: freq * p.frequency_ratio as f64,
            amplitude: p.magnitude_ratio,
        }));
    }
    bank.retain(|osc| osc.amplitude != 0.0 && osc.frequency != 0.0);
    bank
}

/// Number of samples rendered for `duration` seconds, floored; negative or
/// non-finite durations give 0.
pub fn sample_count(duration: f32, sample_rate: u32) -> usize {
    let n = (duration as f64 * sample_rate as f64).floor();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Sums the oscillator bank into a new, unnormalized buffer.
pub fn sum_oscillators(bank: &[Oscillator], n_samples: usize, sample_rate: u32, parallel: bool) -> SampleBuffer {
    if parallel {
        bank.par_iter()
            .fold(
                || vec![0f32; n_samples],
                |mut acc, osc| {
                    osc.add_to(&mut acc, sample_rate);
                    acc
                },
            )
            .reduce(
                || vec![0f32; n_samples],
                |mut a, b| {
                    a.iter_mut().zip(b).for_each(|(x, y)| *x += y);
                    a
                },
            )
    } else {
        let mut buffer = vec![0f32; n_samples];
        for osc in bank {
            osc.add_to(&mut buffer, sample_rate);
        }
        buffer
    }
}

/// Renders `duration` seconds of the character at fundamental `freq`.
///
/// A fundamental of 0 Hz gives silence and a zero duration gives an empty
/// buffer; neither is an error.
///
/// # Errors
/// `SedaError::InvalidSampleRate` when `config.sample_rate` is 0.
pub fn render_additive(freq: Freq, character: &SoundCharacter, voicing: Voicing, duration: f32, config: &SynthConfig) -> Result<Signal> {
    let n_samples = sample_count(duration, config.sample_rate);
    let bank = oscillators(freq, character, voicing);
    log::debug!("rendering {} oscillators over {} samples", bank.len(), n_samples);
    let samples = if config.sample_rate == 0 {
        Vec::new()
    } else {
        sum_oscillators(&bank, n_samples, config.sample_rate, config.parallel)
    };
    Signal::new(samples, config.sample_rate)
}
