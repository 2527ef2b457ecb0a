//! Single-sided amplitude spectra of real signals.
//!
//! The transform runs over the full buffer as given: no window, no zero
//! padding. Magnitudes are divided by `N` (not `N/2`), so a unit sine shows
//! up as a 0.5 peak regardless of buffer length.

use crate::error::{DspError, DspResult};
use crate::fft::{rfft_frequencies, FftEngine};
use lib_types::spectrum::Spectrum;
use lib_types::units::Hertz;
use lib_types::waveform::SampleBuffer;

/// Amplitude spectrum analyzer with a reusable FFT planner.
#[derive(Default)]
pub struct SpectralAnalyzer {
    engine: FftEngine,
}

impl SpectralAnalyzer {
    pub fn new() -> Self {
        Self {
            engine: FftEngine::new(),
        }
    }

    /// Amplitude spectrum of raw samples taken at `sample_rate`.
    pub fn amplitude_spectrum(&mut self, samples: &[f64], sample_rate: Hertz) -> DspResult<Spectrum> {
        if samples.is_empty() {
            return Err(DspError::invalid("amplitude spectrum of an empty buffer"));
        }
        if !sample_rate.is_positive() {
            return Err(DspError::invalid(format!(
                "sample_rate must be positive, got {}",
                sample_rate.0
            )));
        }

        let n = samples.len();
        let coefficients = self.engine.rfft(samples)?;
        let scale = 1.0 / n as f64;
        let amplitudes: Vec<f64> = coefficients.iter().map(|c| c.norm() * scale).collect();
        let frequencies = rfft_frequencies(n, sample_rate);

        tracing::debug!(
            "Amplitude spectrum: {} samples -> {} bins, df={:.4} Hz",
            n,
            amplitudes.len(),
            sample_rate.0 / n as f64
        );

        Ok(Spectrum {
            frequencies,
            amplitudes,
        })
    }

    /// Amplitude spectrum of a buffer at its own sample rate.
    pub fn analyze(&mut self, buffer: &SampleBuffer) -> DspResult<Spectrum> {
        self.amplitude_spectrum(&buffer.samples, buffer.sample_rate)
    }
}

/// Compute the single-sided amplitude spectrum of `samples`.
pub fn amplitude_spectrum(samples: &[f64], sample_rate: Hertz) -> DspResult<Spectrum> {
    SpectralAnalyzer::new().amplitude_spectrum(samples, sample_rate)
}

/// Compute the single-sided amplitude spectrum of a buffer.
pub fn analyze_buffer(buffer: &SampleBuffer) -> DspResult<Spectrum> {
    SpectralAnalyzer::new().analyze(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_sine, generate_square};
    use lib_types::units::Seconds;

    #[test]
    fn test_sine_peak_is_half() {
        let sine = generate_sine(Hertz(5.0), Seconds(1.0), Hertz(500.0)).unwrap();
        let spectrum = analyze_buffer(&sine).unwrap();

        assert_eq!(spectrum.len(), 251);
        let (f, a) = spectrum.peak().unwrap();
        assert!((f - 5.0).abs() < 1e-9);
        assert!((a - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_square_has_odd_harmonics() {
        let square = generate_square(Hertz(5.0), Seconds(1.0), Hertz(500.0)).unwrap();
        let spectrum = analyze_buffer(&square).unwrap();

        // Odd harmonics fall off roughly as 2/(pi*n); even ones are near zero.
        let a1 = spectrum.amplitude_at(5.0).unwrap();
        let a2 = spectrum.amplitude_at(10.0).unwrap();
        let a3 = spectrum.amplitude_at(15.0).unwrap();
        assert!((a1 - 2.0 / std::f64::consts::PI).abs() < 0.02);
        assert!((a3 - 2.0 / (3.0 * std::f64::consts::PI)).abs() < 0.02);
        assert!(a2 < 0.01);
    }

    #[test]
    fn test_dc_normalized_by_n() {
        let spectrum = amplitude_spectrum(&[2.0; 10], Hertz(10.0)).unwrap();
        assert_eq!(spectrum.len(), 6);
        assert!((spectrum.amplitudes[0] - 2.0).abs() < 1e-12);
        assert!((spectrum.frequencies[5] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_odd_length_stops_below_nyquist() {
        let spectrum = amplitude_spectrum(&[0.0, 1.0, 0.0, -1.0, 0.0], Hertz(10.0)).unwrap();
        assert_eq!(spectrum.len(), 3);
        assert!(*spectrum.frequencies.last().unwrap() < 5.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            amplitude_spectrum(&[], Hertz(10.0)),
            Err(DspError::InvalidParameter(_))
        ));
        assert!(matches!(
            amplitude_spectrum(&[1.0, 2.0], Hertz(0.0)),
            Err(DspError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_analyzer_reuse_across_lengths() {
        let mut analyzer = SpectralAnalyzer::new();
        for n in [8usize, 9, 64, 100] {
            let spectrum = analyzer.amplitude_spectrum(&vec![1.0; n], Hertz(100.0)).unwrap();
            assert_eq!(spectrum.len(), n / 2 + 1);
        }
    }
}
