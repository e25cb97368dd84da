use crate::types::timbre::{HARMONIC_COUNT, MAX_PARTIALS};

/// Parameters shared by analysis and synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Lowest frequency retained by the partial ranker.
    pub min_frequency: f32,
    /// Highest frequency retained by the partial ranker.
    pub max_frequency: f32,
    /// Length cap of the ranked partial table.
    pub max_partials: usize,
    /// Overtones measured by the harmonic profiler.
    pub harmonic_count: usize,
    /// Sum oscillators on the rayon pool instead of the calling thread.
    pub parallel: bool,
}

impl SynthConfig {
    pub fn new(sample_rate: u32, min_frequency: f32, max_frequency: f32, max_partials: usize, harmonic_count: usize, parallel: bool) -> SynthConfig {
        SynthConfig {
            sample_rate,
            min_frequency,
            max_frequency,
            max_partials,
            harmonic_count,
            parallel,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_max_partials(mut self, max_partials: usize) -> Self {
        self.max_partials = max_partials;
        self
    }

    pub fn with_harmonic_count(mut self, harmonic_count: usize) -> Self {
        self.harmonic_count = harmonic_count;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig::new(44100, 20.0, 20000.0, MAX_PARTIALS, HARMONIC_COUNT, false)
    }
}
