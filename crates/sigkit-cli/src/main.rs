//! sigkit CLI: waveform synthesis, time-domain operators and spectra.
//!
//! This is the demo harness around the `lib-dsp` signal kernel.

mod config;
mod orchestrator;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lib_dsp::generator::WaveformGenerator;
use lib_types::units::{Hertz, Seconds};
use lib_types::waveform::SampleBuffer;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "sigkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Shape {
    Sine,
    Square,
}

/// Waveform parameters shared by several subcommands.
#[derive(clap::Args, Clone, Copy, Debug)]
struct SignalArgs {
    /// Frequency (Hz)
    #[arg(long, default_value = "5.0")]
    frequency: f64,

    /// Duration (s)
    #[arg(long, default_value = "1.0")]
    duration: f64,

    /// Sample rate (Hz)
    #[arg(long, default_value = "500.0")]
    sample_rate: f64,
}

impl SignalArgs {
    fn generator(&self) -> Result<WaveformGenerator> {
        WaveformGenerator::new(Hertz(self.frequency), Seconds(self.duration), Hertz(self.sample_rate))
            .context("Invalid signal parameters")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full demo: generate, shift, scale, spectra, series comparison
    Demo {
        /// Path to a TOML or JSON demo configuration (defaults if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for results
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
    },

    /// Generate a sine or square wave
    Generate {
        #[arg(long, value_enum, default_value = "sine")]
        shape: Shape,

        #[command(flatten)]
        signal: SignalArgs,

        /// Output CSV path (prints a summary only if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the strongest bins of a waveform's amplitude spectrum
    Spectrum {
        #[arg(long, value_enum, default_value = "square")]
        shape: Shape,

        #[command(flatten)]
        signal: SignalArgs,

        /// Highest frequency considered (Hz)
        #[arg(long)]
        max_freq: Option<f64>,

        /// Number of bins to list
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// Compare the truncated Fourier series with the sampled square wave
    Series {
        #[command(flatten)]
        signal: SignalArgs,

        /// Odd harmonics summed
        #[arg(long, default_value = "15")]
        terms: usize,

        /// Square-wave level
        #[arg(long, default_value = "1.0")]
        amplitude: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match cli.command {
        Commands::Demo { config, output } => {
            run_demo(config.as_deref(), &output, cli.format)?;
        }
        Commands::Generate { shape, signal, output } => {
            generate(shape, &signal, output.as_deref(), cli.format)?;
        }
        Commands::Spectrum { shape, signal, max_freq, top } => {
            spectrum(shape, &signal, max_freq, top, cli.format)?;
        }
        Commands::Series { signal, terms, amplitude } => {
            series(&signal, terms, amplitude, cli.format)?;
        }
    }

    Ok(())
}

fn run_demo(config_path: Option<&Path>, output_dir: &Path, format: OutputFormat) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from {:?}", path);
            config::load_config(path)?
        }
        None => {
            let config = config::DemoConfig::default();
            config::validate_config(&config)?;
            config
        }
    };
    let waveforms = config.output.waveforms;
    let spectra = config.output.spectra;

    let results = orchestrator::Orchestrator::new(config).run()?;

    // Create output directory
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;

    output::write_results(&results, output_dir, format, waveforms, spectra)?;
    output::print_results(&results);

    tracing::info!("Results written to {:?}", output_dir);
    Ok(())
}

fn synthesize(shape: Shape, signal: &SignalArgs) -> Result<SampleBuffer> {
    let gen = signal.generator()?;
    Ok(match shape {
        Shape::Sine => gen.sine(),
        Shape::Square => gen.square(),
    })
}

fn generate(shape: Shape, signal: &SignalArgs, output: Option<&Path>, format: OutputFormat) -> Result<()> {
    tracing::info!("Generating {:?} wave at {} Hz", shape, signal.frequency);

    let buffer = synthesize(shape, signal)?;
    let label = match shape {
        Shape::Sine => "sine",
        Shape::Square => "square",
    };

    println!("{}", output::waveform_summary(&buffer, label, format)?);

    if let Some(path) = output {
        output::write_waveform(path, &buffer, label)?;
        tracing::info!("Wrote {} waveform to {:?}", label, path);
    }

    Ok(())
}

fn spectrum(shape: Shape, signal: &SignalArgs, max_freq: Option<f64>, top: usize, format: OutputFormat) -> Result<()> {
    let buffer = synthesize(shape, signal)?;
    let mut spectrum = lib_dsp::analyze_buffer(&buffer).context("Failed to compute spectrum")?;
    if let Some(max) = max_freq {
        spectrum = spectrum.band(max);
    }

    let bins = spectrum.strongest(top);
    match format {
        OutputFormat::Text => {
            println!("{:?} spectrum ({} bins, df={:.4} Hz):", shape, spectrum.len(), spectrum.bin_width().unwrap_or(0.0));
            for (freq, amp) in &bins {
                println!("  {:>10.3} Hz  {:.6}", freq, amp);
            }
        }
        OutputFormat::Json => {
            let json: Vec<_> = bins
                .iter()
                .map(|(freq, amp)| serde_json::json!({ "frequency_hz": freq, "amplitude": amp }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Csv => {
            println!("frequency_hz,amplitude");
            for (freq, amp) in &bins {
                println!("{},{}", freq, amp);
            }
        }
    }

    Ok(())
}

fn series(signal: &SignalArgs, terms: usize, amplitude: f64, format: OutputFormat) -> Result<()> {
    use lib_dsp::fourier::FourierSynthesizer;
    use lib_dsp::measure::mean_absolute_error;
    use lib_types::series::HarmonicSeriesSpec;

    let gen = signal.generator()?;
    let square = gen.square();
    let spec = HarmonicSeriesSpec::for_frequency(gen.frequency(), terms, amplitude);
    let synth = FourierSynthesizer::new(spec).context("Invalid series parameters")?;

    let approx = synth.synthesize(&gen.time_axis());
    let reference: Vec<f64> = square.samples.iter().map(|v| v * amplitude).collect();
    let error = mean_absolute_error(&reference, &approx)?;
    let overshoot = approx.iter().cloned().fold(f64::MIN, f64::max);

    match format {
        OutputFormat::Text => {
            println!("Fourier series: {} odd harmonics (highest order {})", terms, spec.highest_order());
            println!("  Mean abs error: {:.4}", error);
            println!("  Peak value:     {:.4}", overshoot);
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "n_terms": terms,
                "highest_order": spec.highest_order(),
                "mean_abs_error": error,
                "peak": overshoot,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Csv => {
            println!("n_terms,mean_abs_error,peak");
            println!("{},{},{}", terms, error, overshoot);
        }
    }

    Ok(())
}
