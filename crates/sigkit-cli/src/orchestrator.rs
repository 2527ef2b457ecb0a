//! Demo pipeline orchestration.

use crate::config::DemoConfig;
use anyhow::{Context, Result};
use lib_dsp::fourier::FourierSynthesizer;
use lib_dsp::generator::WaveformGenerator;
use lib_dsp::measure::{estimate_frequency, mean_absolute_error};
use lib_dsp::spectral::SpectralAnalyzer;
use lib_dsp::time_ops::{shift_seconds, time_scale};
use lib_types::spectrum::Spectrum;
use lib_types::units::Seconds;
use lib_types::waveform::SampleBuffer;

/// Runs generate -> shift/scale -> spectra -> series comparison.
pub struct Orchestrator {
    config: DemoConfig,
}

impl Orchestrator {
    /// Create a new orchestrator.
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    /// Run the demo pipeline.
    pub fn run(&self) -> Result<DemoResults> {
        tracing::info!("Starting demo: {}", self.config.name);

        let generator = WaveformGenerator::new(
            self.config.frequency(),
            self.config.duration(),
            self.config.sample_rate(),
        )
        .context("Invalid signal parameters")?;

        let sine = generator.sine();
        let square = generator.square();
        tracing::info!(
            "Generated {} Hz sine and square: {} samples at {} Hz",
            generator.frequency().0,
            generator.sample_count(),
            generator.sample_rate().0
        );

        let (sine_shifted, square_scaled) = self.apply_operations(&sine, &square)?;
        let (sine_spectrum, square_spectrum) = self.compute_spectra(&sine, &square)?;
        let comparison = self.compare_series(&square)?;

        let sine_frequency_estimate =
            estimate_frequency(&sine).context("Failed to estimate sine frequency")?;

        tracing::info!("Demo complete");
        Ok(DemoResults {
            sine,
            square,
            sine_shifted,
            square_scaled,
            sine_spectrum,
            square_spectrum,
            series: comparison.0,
            series_error: comparison.1,
            sine_frequency_estimate,
        })
    }

    /// Shift the sine and scale the square.
    fn apply_operations(&self, sine: &SampleBuffer, square: &SampleBuffer) -> Result<(SampleBuffer, SampleBuffer)> {
        let ops = &self.config.operations;

        let shifted = shift_seconds(sine, Seconds(ops.shift_seconds))
            .context("Failed to shift sine wave")?;
        tracing::info!(
            "Shifted sine by {} s ({} samples)",
            ops.shift_seconds,
            (ops.shift_seconds * sine.sample_rate.0).trunc()
        );

        let scaled = time_scale(square, ops.scale_factor)
            .context("Failed to scale square wave")?;
        tracing::info!(
            "Scaled square by {}: {} -> {} samples",
            ops.scale_factor,
            square.len(),
            scaled.len()
        );

        Ok((shifted, scaled))
    }

    /// Amplitude spectra of the unmodified waveforms, cut to the display band.
    fn compute_spectra(&self, sine: &SampleBuffer, square: &SampleBuffer) -> Result<(Spectrum, Spectrum)> {
        let max_hz = self.config.output.spectrum_max_hz;
        let mut analyzer = SpectralAnalyzer::new();

        let sine_spectrum = analyzer
            .analyze(sine)
            .context("Failed to compute sine spectrum")?
            .band(max_hz);
        let square_spectrum = analyzer
            .analyze(square)
            .context("Failed to compute square spectrum")?
            .band(max_hz);

        if let Some((f, a)) = sine_spectrum.peak() {
            tracing::info!("Sine spectrum peak: {:.2} Hz, amplitude {:.4}", f, a);
        }
        if let Some((f, a)) = square_spectrum.peak() {
            tracing::info!("Square spectrum peak: {:.2} Hz, amplitude {:.4}", f, a);
        }

        Ok((sine_spectrum, square_spectrum))
    }

    /// Evaluate the Fourier series on the square wave's time axis.
    fn compare_series(&self, square: &SampleBuffer) -> Result<(Vec<f64>, f64)> {
        let synth = FourierSynthesizer::new(self.config.series_spec())
            .context("Invalid series parameters")?;

        let series = synth.synthesize(&square.time_axis());
        let error = mean_absolute_error(&square.samples, &series)
            .context("Failed to compare series with square wave")?;

        tracing::info!(
            "Fourier series ({} odd harmonics) mean absolute error: {:.4}",
            synth.spec().n_terms,
            error
        );

        Ok((series, error))
    }
}

/// Demo results.
#[derive(Debug)]
pub struct DemoResults {
    pub sine: SampleBuffer,
    pub square: SampleBuffer,

    /// Sine after the configured time shift.
    pub sine_shifted: SampleBuffer,

    /// Square after the configured time scale.
    pub square_scaled: SampleBuffer,

    pub sine_spectrum: Spectrum,
    pub square_spectrum: Spectrum,

    /// Fourier series sampled on the square wave's time axis.
    pub series: Vec<f64>,

    /// Mean absolute error between square wave and series.
    pub series_error: f64,

    /// Zero-crossing frequency estimate of the sine.
    pub sine_frequency_estimate: f64,
}
