#![allow(dead_code)]

use seda::{Signal, SynthConfig};
use std::f64::consts::TAU;

pub const SAMPLE_RATE: u32 = 44100;

/// Sum of sines given as (frequency Hz, amplitude) pairs.
pub fn tone(partials: &[(f64, f64)], n_samples: usize, sample_rate: u32) -> Signal {
    let samples = (0..n_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            partials.iter().map(|&(f, a)| a * (TAU * f * t).sin()).sum::<f64>() as f32
        })
        .collect();
    Signal::new(samples, sample_rate).unwrap()
}

/// A small partial budget keeps debug-build synthesis fast.
pub fn test_config() -> SynthConfig {
    SynthConfig::default()
        .with_sample_rate(SAMPLE_RATE)
        .with_max_partials(64)
}

pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}
