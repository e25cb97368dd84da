//! Generation of conventional waveforms using time-domain
//!
//! Reference tones for exercising the analysis stages. Each renders
//! `floor(duration * sample_rate)` samples; a frequency at or below 0 Hz
//! renders silence.

use std::f64::consts::TAU;

use crate::error::Result;
use crate::synth::sample_count;
use crate::types::synthesis::{Freq, Signal};

fn render(freq: Freq, sample_rate: u32, duration: f32, form: impl Fn(f64) -> f64) -> Result<Signal> {
    let n = sample_count(duration, sample_rate);
    let samples = if freq > 0.0 {
        (0..n)
            .map(|i| {
                let t = i as f64 / sample_rate as f64;
                form(t * freq as f64) as f32
            })
            .collect()
    } else {
        vec![0.0; n]
    };
    Signal::new(samples, sample_rate)
}

/// Position within the cycle as `cycles - round(cycles)`, in [-0.5, 0.5).
#[inline]
fn centered(cycles: f64) -> f64 {
    cycles - (0.5 + cycles).floor()
}

pub fn sine(freq: Freq, sample_rate: u32, duration: f32) -> Result<Signal> {
    render(freq, sample_rate, duration, |cycles| (TAU * cycles.fract()).sin())
}

/// +1 for the first half of each period, -1 for the second.
pub fn square(freq: Freq, sample_rate: u32, duration: f32) -> Result<Signal> {
    render(freq, sample_rate, duration, |cycles| if cycles.fract() < 0.5 { 1.0 } else { -1.0 })
}

pub fn sawtooth(freq: Freq, sample_rate: u32, duration: f32) -> Result<Signal> {
    render(freq, sample_rate, duration, |cycles| 2.0 * centered(cycles))
}

pub fn triangle(freq: Freq, sample_rate: u32, duration: f32) -> Result<Signal> {
    render(freq, sample_rate, duration, |cycles| (2.0 * centered(cycles)).abs() * 2.0 - 1.0)
}
