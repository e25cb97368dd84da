use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use log::info;

use seda::inp::profile::{load_profile_from_file, save_profile_to_file, Profile};
use seda::render::engrave::{self, WavFormat};
use seda::{analysis, reader, render, Adsr, RenderOptions, SynthConfig, Voicing};

#[derive(Parser, Debug)]
#[command(name = "seda", version, about = "Analyze a recorded note and rebuild it from sine oscillators")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Measure a recording and store its profile as JSON.
    Analyze {
        input: PathBuf,
        profile: PathBuf,
        #[command(flatten)]
        analysis: AnalysisArgs,
        #[command(flatten)]
        envelope: EnvelopeArgs,
    },
    /// Render a stored profile at a new pitch and length.
    Synth {
        profile: PathBuf,
        output: PathBuf,
        #[arg(long)]
        freq: f32,
        #[arg(long)]
        duration: f32,
        /// Output rate; defaults to the analyzed recording's rate.
        #[arg(long)]
        sample_rate: Option<u32>,
        #[command(flatten)]
        envelope: EnvelopeArgs,
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Analyze a recording and render it again in one pass.
    Resynth {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        freq: f32,
        #[arg(long)]
        duration: f32,
        #[command(flatten)]
        analysis: AnalysisArgs,
        #[command(flatten)]
        envelope: EnvelopeArgs,
        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(Args, Debug)]
struct AnalysisArgs {
    /// Length cap of the ranked partial table.
    #[arg(long, env = "SEDA_MAX_PARTIALS", default_value_t = seda::types::timbre::MAX_PARTIALS)]
    max_partials: usize,
    /// Overtones measured above the fundamental.
    #[arg(long, env = "SEDA_HARMONICS", default_value_t = seda::types::timbre::HARMONIC_COUNT)]
    harmonics: usize,
}

#[derive(Args, Debug)]
struct EnvelopeArgs {
    #[arg(long)]
    attack: Option<f32>,
    #[arg(long)]
    decay: Option<f32>,
    #[arg(long)]
    sustain: Option<f32>,
    #[arg(long)]
    release: Option<f32>,
}

impl EnvelopeArgs {
    fn over(&self, base: Adsr) -> seda::Result<Adsr> {
        Adsr::new(
            self.attack.unwrap_or(base.attack),
            self.decay.unwrap_or(base.decay),
            self.sustain.unwrap_or(base.sustain),
            self.release.unwrap_or(base.release),
        )
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Tables to sum: harmonics, partials or both.
    #[arg(long, default_value_t = Voicing::Both)]
    voicing: Voicing,
    /// Skip ADSR shaping.
    #[arg(long)]
    no_envelope: bool,
    /// Sum oscillators on all cores.
    #[arg(long, env = "SEDA_PARALLEL")]
    parallel: bool,
    /// Write 32-bit float instead of 16-bit PCM.
    #[arg(long)]
    float: bool,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        RenderOptions {
            voicing: self.voicing,
            envelope: !self.no_envelope,
        }
    }

    fn format(&self) -> WavFormat {
        if self.float {
            WavFormat::Float32
        } else {
            WavFormat::Pcm16
        }
    }
}

fn config_for(analysis: &AnalysisArgs, sample_rate: u32) -> SynthConfig {
    SynthConfig::default()
        .with_sample_rate(sample_rate)
        .with_max_partials(analysis.max_partials)
        .with_harmonic_count(analysis.harmonics)
}

fn run(cli: Cli) -> seda::Result<()> {
    match cli.command {
        Command::Analyze { input, profile, analysis: args, envelope } => {
            let source = reader::signal(&input)?;
            let config = config_for(&args, source.sample_rate);
            let measured = analysis::analyze(&source, &config)?;
            info!(
                "{}: fundamental {:.2} Hz, {} partials",
                input.display(),
                measured.fundamental.frequency,
                measured.partials.len()
            );
            let adsr = envelope.over(Adsr::default())?;
            save_profile_to_file(&profile, &Profile::from_analysis(measured, source.sample_rate, adsr))?;
            println!("{}", profile.display());
        }
        Command::Synth { profile, output, freq, duration, sample_rate, envelope, render: args } => {
            let mut profile = load_profile_from_file(&profile)?;
            profile.character.adsr = envelope.over(profile.character.adsr)?;
            let config = SynthConfig::default()
                .with_sample_rate(sample_rate.unwrap_or(profile.sample_rate))
                .with_parallel(args.parallel);
            let tone = render::compose(freq, &profile.character, duration, &config, args.options())?;
            engrave::signal(&output, &tone, args.format())?;
            println!("{}", output.display());
        }
        Command::Resynth { input, output, freq, duration, analysis: a_args, envelope, render: r_args } => {
            let source = reader::signal(&input)?;
            let config = config_for(&a_args, source.sample_rate).with_parallel(r_args.parallel);
            let adsr = envelope.over(Adsr::default())?;
            let (_, tone) = render::resynthesize(&source, freq, duration, adsr, &config, r_args.options())?;
            engrave::signal(&output, &tone, r_args.format())?;
            println!("{}", output.display());
        }
    }
    Ok(())
}

fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("seda: {}", err);
        process::exit(1);
    }
}
