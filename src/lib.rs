//! Additive resynthesis of recorded tones.
//!
//! A recording of a single note is decomposed into a fundamental, an overtone
//! profile and a ranked table of partials. Those tables are then played back
//! through a bank of sine oscillators at any pitch and length, normalized and
//! shaped by an ADSR envelope.
//!
//! ```
//! use seda::{analysis, render, time_forms, Adsr, RenderOptions, SynthConfig};
//!
//! let config = SynthConfig::default().with_max_partials(32);
//! let note = time_forms::sawtooth(220.0, 44100, 1.0).unwrap();
//! let analysis = analysis::analyze(&note, &config).unwrap();
//! let character = analysis.into_character(Adsr::default());
//! let tone = render::compose(330.0, &character, 0.5, &config, RenderOptions::default()).unwrap();
//! assert_eq!(tone.len(), 22050);
//! ```

pub mod analysis;
pub mod envelope;
pub mod error;
pub mod files;
pub mod inp;
pub mod reader;
pub mod render;
pub mod synth;
pub mod synth_config;
pub mod time_forms;
pub mod types;

pub use analysis::{analyze, analyze_batch, Analysis, Fundamental, SpectralFrame};
pub use error::{Result, SedaError};
pub use render::{compose, normalize, resynthesize, RenderOptions};
pub use synth::Voicing;
pub use synth_config::SynthConfig;
pub use types::synthesis::{SampleBuffer, Signal};
pub use types::timbre::{Adsr, HarmonicTable, Partial, PartialTable, SoundCharacter};
