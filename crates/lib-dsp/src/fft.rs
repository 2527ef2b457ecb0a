//! Real-input FFT using realfft.
//!
//! This module provides a thin wrapper around realfft with:
//! - Planner caching for repeated transforms
//! - Support for any transform length (not only powers of two)
//! - The matching single-sided frequency axis

use crate::error::{DspError, DspResult};
use lib_types::units::Hertz;
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// FFT engine with a cached real-input planner.
pub struct FftEngine {
    real_planner: RealFftPlanner<f64>,
}

impl FftEngine {
    /// Create a new FFT engine.
    pub fn new() -> Self {
        Self {
            real_planner: RealFftPlanner::new(),
        }
    }

    /// Perform forward real-to-complex FFT.
    ///
    /// Input: N real samples
    /// Output: N/2 + 1 complex samples (Hermitian symmetry exploited), unnormalized
    pub fn rfft(&mut self, data: &[f64]) -> DspResult<Vec<Complex64>> {
        let len = data.len();
        if len == 0 {
            return Err(DspError::invalid("cannot transform an empty signal"));
        }

        let r2c = self.plan_forward(len);
        let mut input = data.to_vec();
        let mut output = r2c.make_output_vec();

        r2c.process(&mut input, &mut output)
            .map_err(|e| DspError::Transform(e.to_string()))?;

        Ok(output)
    }

    /// Get a cached forward plan for length `len`.
    pub fn plan_forward(&mut self, len: usize) -> Arc<dyn RealToComplex<f64>> {
        self.real_planner.plan_fft_forward(len)
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of single-sided bins for an `n`-point real transform.
#[inline]
pub fn rfft_len(n: usize) -> usize {
    n / 2 + 1
}

/// Bin frequencies `k * fs / n` for `k in 0..=n/2`.
pub fn rfft_frequencies(n: usize, sample_rate: Hertz) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let df = sample_rate.0 / n as f64;
    (0..rfft_len(n)).map(|k| k as f64 * df).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rfft_single_tone() {
        let mut engine = FftEngine::new();

        let n = 64;
        let signal: Vec<f64> = (0..n)
            .map(|i| {
                let t = i as f64 / n as f64;
                (2.0 * PI * 4.0 * t).sin()
            })
            .collect();

        let spectrum = engine.rfft(&signal).unwrap();
        assert_eq!(spectrum.len(), 33);

        // All energy in bin 4, magnitude N/2.
        assert!((spectrum[4].norm() - 32.0).abs() < 1e-9);
        for (k, c) in spectrum.iter().enumerate() {
            if k != 4 {
                assert!(c.norm() < 1e-9, "leakage in bin {k}: {}", c.norm());
            }
        }
    }

    #[test]
    fn test_rfft_odd_length() {
        let mut engine = FftEngine::new();
        let signal = vec![1.0; 7];

        let spectrum = engine.rfft(&signal).unwrap();
        assert_eq!(spectrum.len(), 4);
        assert!((spectrum[0].re - 7.0).abs() < 1e-12);
        assert!(spectrum[1..].iter().all(|c| c.norm() < 1e-12));
    }

    #[test]
    fn test_empty_rejected() {
        let mut engine = FftEngine::new();
        assert!(matches!(engine.rfft(&[]), Err(DspError::InvalidParameter(_))));
    }

    #[test]
    fn test_frequencies() {
        assert_eq!(rfft_frequencies(8, Hertz(8.0)), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(rfft_frequencies(5, Hertz(10.0)), vec![0.0, 2.0, 4.0]);
        assert!(rfft_frequencies(0, Hertz(10.0)).is_empty());
    }
}
