mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seda::analysis::{self, spectrum};
use seda::render::{compose, RenderOptions};
use seda::{Adsr, HarmonicTable, Partial, PartialTable, SedaError, Signal, SoundCharacter, Voicing};

#[test]
fn test_pure_sine_440_analysis() {
    let config = common::test_config();
    let input = common::tone(&[(440.0, 1.0)], 44100, common::SAMPLE_RATE);
    let result = analysis::analyze(&input, &config).unwrap();

    // One bin is 44100 / 44100 = 1 Hz wide.
    assert!((result.fundamental.frequency - 440.0).abs() <= 1.0);
    assert!(result.harmonics.ratios()[0] < 1e-3);
    assert_eq!(result.partials.partials()[0], Partial::new(1.0, 1.0));
}

#[test]
fn test_fundamental_within_one_bin_for_off_grid_tones() {
    let config = common::test_config();
    for &freq in &[110.5, 196.0, 329.63, 523.25] {
        let input = common::tone(&[(freq, 0.9)], 32768, common::SAMPLE_RATE);
        let frame = spectrum::transform(&input).unwrap();
        let result = analysis::analyze(&input, &config).unwrap();
        assert!(
            (result.fundamental.frequency as f64 - freq).abs() <= frame.resolution() as f64,
            "{} Hz estimated as {} Hz",
            freq,
            result.fundamental.frequency
        );
    }
}

#[test]
fn test_noise_keeps_table_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let raw: Vec<f32> = (0..4096).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let mean = raw.iter().sum::<f32>() / raw.len() as f32;
    let input = Signal::new(raw.iter().map(|s| s - mean).collect(), common::SAMPLE_RATE).unwrap();

    let config = seda::SynthConfig::default();
    let result = analysis::analyze(&input, &config).unwrap();

    assert!(result.harmonics.ratios().iter().all(|&r| r >= 0.0 && r.is_finite()));
    for pair in result.partials.partials().windows(2) {
        assert!(pair[0].magnitude_ratio >= pair[1].magnitude_ratio);
    }
    let frame = spectrum::transform(&input).unwrap();
    let audible = (0..=frame.nyquist_bin())
        .filter(|&b| (20.0..=20000.0).contains(&frame.bin_frequency(b)))
        .count();
    assert!(result.partials.len() <= audible.min(2000));
}

#[test]
fn test_resynthesized_partials_are_recovered() {
    let config = common::test_config();
    let character = SoundCharacter {
        harmonics: HarmonicTable::zeros(0),
        partials: PartialTable::new(vec![
            Partial::new(1.0, 1.0),
            Partial::new(2.0, 0.6),
            Partial::new(3.5, 0.35),
        ]),
        adsr: Adsr::flat(),
    };
    let options = RenderOptions { voicing: Voicing::Partials, envelope: false };
    let rendered = compose(200.0, &character, 1.0, &config, options).unwrap();

    let recovered = analysis::analyze(&rendered, &config).unwrap();
    let bin_ratio = 1.0 / 200.0;
    assert!((recovered.fundamental.frequency - 200.0).abs() <= 1.0);
    let top: Vec<Partial> = recovered.partials.partials()[..3].to_vec();
    for (got, want) in top.iter().zip(character.partials.iter()) {
        assert!((got.frequency_ratio - want.frequency_ratio).abs() <= bin_ratio + 1e-4);
        assert!((got.magnitude_ratio - want.magnitude_ratio).abs() < 1e-2);
    }
    // The 2nd partial is also the first overtone.
    assert!((recovered.harmonics.ratios()[0] - 0.6).abs() < 1e-2);
}

#[test]
fn test_silence_and_empty_input_fail() {
    let config = common::test_config();
    let empty = Signal::new(vec![], common::SAMPLE_RATE).unwrap();
    assert!(matches!(analysis::analyze(&empty, &config), Err(SedaError::EmptyInput)));
    let silent = Signal::new(vec![0.0; 8192], common::SAMPLE_RATE).unwrap();
    assert!(matches!(analysis::analyze(&silent, &config), Err(SedaError::NoSignal)));
}
