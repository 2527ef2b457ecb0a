//! Truncated Fourier-series synthesis of an ideal square wave.
//!
//! The series sums only odd harmonics:
//!
//! ```text
//! y(t) = (4A/pi) * sum_{k=1..n_terms} sin((2k-1) * w0 * t) / (2k-1),   w0 = 2*pi / period
//! ```
//!
//! More terms shrink the mean deviation from the ideal square wave, but the
//! Gibbs overshoot near each discontinuity (about 9% of the jump) stays.

use crate::error::{DspError, DspResult};
use crate::generator::evaluate_indexed;
use lib_types::series::HarmonicSeriesSpec;
use lib_types::units::Seconds;
use lib_types::waveform::TimeAxis;
use std::f64::consts::PI;

/// Evaluator for a validated [`HarmonicSeriesSpec`].
#[derive(Clone, Copy, Debug)]
pub struct FourierSynthesizer {
    spec: HarmonicSeriesSpec,
    omega0: f64,
    gain: f64,
}

impl FourierSynthesizer {
    /// Fails with [`DspError::InvalidParameter`] if the period is not
    /// positive or no terms are requested.
    pub fn new(spec: HarmonicSeriesSpec) -> DspResult<Self> {
        if !spec.period.is_positive() {
            return Err(DspError::invalid(format!(
                "period must be positive, got {}",
                spec.period.0
            )));
        }
        if spec.n_terms < 1 {
            return Err(DspError::invalid("n_terms must be at least 1"));
        }
        if !spec.amplitude.is_finite() {
            return Err(DspError::invalid(format!(
                "amplitude must be finite, got {}",
                spec.amplitude
            )));
        }

        Ok(Self {
            spec,
            omega0: spec.omega0(),
            gain: 4.0 * spec.amplitude / PI,
        })
    }

    pub fn spec(&self) -> &HarmonicSeriesSpec {
        &self.spec
    }

    /// Odd harmonic orders `1, 3, ..., 2n-1` paired with their sine
    /// coefficients `4A / (pi * order)`.
    pub fn harmonics(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        (1..=self.spec.n_terms).map(move |k| {
            let order = 2 * k - 1;
            (order, self.gain / order as f64)
        })
    }

    /// Series value at a single instant `t` (seconds).
    pub fn evaluate(&self, t: f64) -> f64 {
        let sum: f64 = (1..=self.spec.n_terms)
            .map(|k| {
                let order = (2 * k - 1) as f64;
                (order * self.omega0 * t).sin() / order
            })
            .sum();
        self.gain * sum
    }

    /// Series value at every coordinate of `t`, in order.
    pub fn synthesize(&self, t: &TimeAxis) -> Vec<f64> {
        tracing::debug!(
            "Fourier series: {} terms (highest order {}) at {} points",
            self.spec.n_terms,
            self.spec.highest_order(),
            t.len()
        );
        evaluate_indexed(t.len(), |i| self.evaluate(t.times[i]))
    }
}

/// Evaluate the `n_terms`-term square-wave series at every time in `t`.
pub fn fourier_series_square(
    t: &TimeAxis,
    period: Seconds,
    n_terms: usize,
    amplitude: f64,
) -> DspResult<Vec<f64>> {
    let synth = FourierSynthesizer::new(HarmonicSeriesSpec::new(period, n_terms, amplitude))?;
    Ok(synth.synthesize(t))
}
