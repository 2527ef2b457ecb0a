//! Parameters of a truncated odd-harmonic Fourier series.

use crate::units::{Hertz, Seconds};
use serde::{Deserialize, Serialize};

/// Square-wave Fourier series truncated to `n_terms` odd harmonics.
///
/// ```text
/// y(t) = (4A/pi) * sum_{k=1..n_terms} sin((2k-1) * w0 * t) / (2k-1),   w0 = 2*pi / period
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarmonicSeriesSpec {
    /// Fundamental period. Must be positive.
    pub period: Seconds,

    /// Number of odd harmonics summed. Must be at least 1.
    pub n_terms: usize,

    /// Level of the ideal square wave being approximated.
    pub amplitude: f64,
}

impl HarmonicSeriesSpec {
    pub fn new(period: Seconds, n_terms: usize, amplitude: f64) -> Self {
        Self { period, n_terms, amplitude }
    }

    /// Series whose fundamental is `frequency`.
    pub fn for_frequency(frequency: Hertz, n_terms: usize, amplitude: f64) -> Self {
        Self::new(frequency.to_period(), n_terms, amplitude)
    }

    /// Fundamental angular frequency, `2*pi / period`.
    #[inline]
    pub fn omega0(&self) -> f64 {
        self.period.to_frequency().angular()
    }

    /// Highest harmonic order included (`2 * n_terms - 1`).
    #[inline]
    pub fn highest_order(&self) -> usize {
        (2 * self.n_terms).saturating_sub(1)
    }
}

impl Default for HarmonicSeriesSpec {
    fn default() -> Self {
        Self {
            period: Seconds(1.0),
            n_terms: 10,
            amplitude: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_frequency() {
        let spec = HarmonicSeriesSpec::for_frequency(Hertz(5.0), 15, 1.0);
        assert!((spec.period.0 - 0.2).abs() < 1e-12);
        assert!((spec.omega0() - 10.0 * std::f64::consts::PI).abs() < 1e-9);
        assert_eq!(spec.highest_order(), 29);
    }

    #[test]
    fn test_defaults() {
        let spec = HarmonicSeriesSpec::default();
        assert_eq!(spec.n_terms, 10);
        assert_eq!(spec.amplitude, 1.0);
    }
}
