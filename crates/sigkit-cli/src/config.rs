//! Demo configuration loading and validation.

use anyhow::{Context, Result};
use lib_types::series::HarmonicSeriesSpec;
use lib_types::units::{Hertz, Seconds};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level demo configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Run name/description.
    #[serde(default = "default_name")]
    pub name: String,

    /// Waveform parameters.
    #[serde(default)]
    pub signal: SignalParams,

    /// Time-domain operations applied to the waveforms.
    #[serde(default)]
    pub operations: OperationParams,

    /// Fourier-series comparison.
    #[serde(default)]
    pub series: SeriesParams,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            signal: SignalParams::default(),
            operations: OperationParams::default(),
            series: SeriesParams::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_name() -> String { "sigkit demo".to_string() }

/// Sine/square generation parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignalParams {
    /// Sampling rate (Hz).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,

    /// Signal duration (s).
    #[serde(default = "default_duration")]
    pub duration: f64,

    /// Fundamental frequency (Hz).
    #[serde(default = "default_frequency")]
    pub frequency: f64,
}

fn default_sample_rate() -> f64 { 500.0 }
fn default_duration() -> f64 { 1.0 }
fn default_frequency() -> f64 { 5.0 }

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            duration: default_duration(),
            frequency: default_frequency(),
        }
    }
}

/// Shift applied to the sine, scale applied to the square.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OperationParams {
    /// Delay of the sine wave (s); negative advances.
    #[serde(default = "default_shift_seconds")]
    pub shift_seconds: f64,

    /// Time-scale factor of the square wave.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
}

fn default_shift_seconds() -> f64 { 0.2 }
fn default_scale_factor() -> f64 { 0.5 }

impl Default for OperationParams {
    fn default() -> Self {
        Self {
            shift_seconds: default_shift_seconds(),
            scale_factor: default_scale_factor(),
        }
    }
}

/// Fourier-series parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeriesParams {
    /// Odd harmonics summed.
    #[serde(default = "default_n_terms")]
    pub n_terms: usize,

    /// Square-wave level.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
}

fn default_n_terms() -> usize { 15 }
fn default_amplitude() -> f64 { 1.0 }

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            n_terms: default_n_terms(),
            amplitude: default_amplitude(),
        }
    }
}

/// Output configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Upper frequency of the written spectra (Hz).
    #[serde(default = "default_spectrum_max_hz")]
    pub spectrum_max_hz: f64,

    /// Write the time-domain waveforms.
    #[serde(default = "default_true")]
    pub waveforms: bool,

    /// Write the spectra.
    #[serde(default = "default_true")]
    pub spectra: bool,
}

fn default_spectrum_max_hz() -> f64 { 50.0 }
fn default_true() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            spectrum_max_hz: default_spectrum_max_hz(),
            waveforms: true,
            spectra: true,
        }
    }
}

/// Load configuration from a file.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content, path.extension().map_or(false, |e| e == "json"))?;
    validate_config(&config)?;

    Ok(config)
}

fn parse_config(content: &str, is_json: bool) -> Result<DemoConfig> {
    if is_json {
        serde_json::from_str(content).with_context(|| "Failed to parse config as JSON")
    } else {
        // Assume TOML
        toml::from_str(content).with_context(|| "Failed to parse config as TOML")
    }
}

/// Validate configuration.
///
/// The kernel rejects these too; checking here reports the offending key.
pub fn validate_config(config: &DemoConfig) -> Result<()> {
    let signal = &config.signal;
    for (key, value) in [
        ("signal.sample_rate", signal.sample_rate),
        ("signal.duration", signal.duration),
        ("signal.frequency", signal.frequency),
        ("operations.scale_factor", config.operations.scale_factor),
    ] {
        if !(value.is_finite() && value > 0.0) {
            anyhow::bail!("{} must be positive, got {}", key, value);
        }
    }

    let nyquist = Hertz(signal.sample_rate).nyquist();
    if signal.frequency > nyquist.0 {
        tracing::warn!(
            "signal.frequency={} Hz is above Nyquist ({} Hz); waveforms will alias",
            signal.frequency,
            nyquist.0
        );
    }

    if !config.operations.shift_seconds.is_finite() {
        anyhow::bail!("operations.shift_seconds must be finite");
    }

    if config.series.n_terms == 0 {
        anyhow::bail!("series.n_terms must be at least 1");
    }

    if config.output.spectrum_max_hz < 0.0 {
        anyhow::bail!(
            "output.spectrum_max_hz must be non-negative, got {}",
            config.output.spectrum_max_hz
        );
    }

    Ok(())
}

impl DemoConfig {
    pub fn frequency(&self) -> Hertz {
        Hertz(self.signal.frequency)
    }

    pub fn duration(&self) -> Seconds {
        Seconds(self.signal.duration)
    }

    pub fn sample_rate(&self) -> Hertz {
        Hertz(self.signal.sample_rate)
    }

    pub fn series_spec(&self) -> HarmonicSeriesSpec {
        HarmonicSeriesSpec::for_frequency(self.frequency(), self.series.n_terms, self.series.amplitude)
    }
}
