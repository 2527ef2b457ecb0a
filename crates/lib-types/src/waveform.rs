//! Time-domain sample buffers and time axes.
//!
//! # Sample Semantics
//!
//! Samples in a `SampleBuffer` are point measurements at uniformly spaced
//! instants. For a buffer with `N` samples at rate `fs`, the sample times are:
//!
//! ```text
//! t[k] = k / fs,  for k = 0, 1, ..., N-1
//! ```
//!
//! `duration()` returns `N / fs`, the half-open span `[0, N/fs)`; the instant
//! `duration()` itself is never sampled.

use crate::units::{Hertz, Seconds};
use serde::{Deserialize, Serialize};

/// A uniformly-sampled, real-valued signal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleBuffer {
    /// Sample values.
    pub samples: Vec<f64>,

    /// Samples per second. Always positive.
    pub sample_rate: Hertz,
}

impl SampleBuffer {
    /// Create a buffer from samples.
    ///
    /// The caller guarantees `sample_rate > 0`; use [`SampleBuffer::try_new`]
    /// for unchecked input.
    pub fn new(samples: Vec<f64>, sample_rate: Hertz) -> Self {
        debug_assert!(sample_rate.is_positive(), "sample rate must be positive");
        Self { samples, sample_rate }
    }

    /// Create a buffer, rejecting non-positive or non-finite sample rates.
    pub fn try_new(samples: Vec<f64>, sample_rate: Hertz) -> Result<Self, &'static str> {
        if !sample_rate.is_positive() {
            return Err("sample_rate must be positive and finite");
        }
        Ok(Self { samples, sample_rate })
    }

    /// Create a zero-valued buffer of specified length.
    pub fn zeros(len: usize, sample_rate: Hertz) -> Self {
        Self::new(vec![0.0; len], sample_rate)
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time step between consecutive samples.
    #[inline]
    pub fn dt(&self) -> Seconds {
        self.sample_rate.to_period()
    }

    /// Span covered by the buffer, `N / fs`.
    #[inline]
    pub fn duration(&self) -> Seconds {
        Seconds(self.samples.len() as f64 / self.sample_rate.0)
    }

    /// Time coordinate of sample `index`.
    #[inline]
    pub fn time_at(&self, index: usize) -> Seconds {
        Seconds(index as f64 / self.sample_rate.0)
    }

    /// The time coordinates of every sample, `k / fs`.
    pub fn time_axis(&self) -> TimeAxis {
        TimeAxis::uniform(self.samples.len(), self.sample_rate)
    }

    /// Iterate `(time, value)` pairs.
    pub fn iter_timed(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let fs = self.sample_rate.0;
        self.samples
            .iter()
            .enumerate()
            .map(move |(k, &v)| (k as f64 / fs, v))
    }

    /// Peak-to-peak amplitude. Zero for an empty buffer.
    pub fn peak_to_peak(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let (min, max) = self.samples.iter().fold((f64::MAX, f64::MIN), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
        max - min
    }

    /// Root mean square value.
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = self.samples.iter().map(|v| v * v).sum();
        (sum_sq / self.samples.len() as f64).sqrt()
    }
}

/// Ordered time coordinates (seconds) at which a signal is evaluated.
///
/// Coordinates are non-decreasing but need not be uniformly spaced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    pub times: Vec<f64>,
}

impl TimeAxis {
    /// `n` uniformly spaced instants `k / fs`.
    pub fn uniform(n: usize, sample_rate: Hertz) -> Self {
        let fs = sample_rate.0;
        Self {
            times: (0..n).map(|k| k as f64 / fs).collect(),
        }
    }

    /// Build from arbitrary coordinates, rejecting non-finite values and
    /// any decrease between neighbours.
    pub fn try_from_vec(times: Vec<f64>) -> Result<Self, &'static str> {
        if times.iter().any(|t| !t.is_finite()) {
            return Err("time coordinates must be finite");
        }
        if times.windows(2).any(|w| w[1] < w[0]) {
            return Err("time coordinates must be non-decreasing");
        }
        Ok(Self { times })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_basics() {
        let buf = SampleBuffer::new(vec![0.0, 0.5, 1.0, 0.5, 0.0], Hertz(10.0));

        assert_eq!(buf.len(), 5);
        assert!((buf.duration().0 - 0.5).abs() < 1e-12);
        assert!((buf.dt().0 - 0.1).abs() < 1e-12);
        assert!((buf.peak_to_peak() - 1.0).abs() < 1e-12);
        assert!((buf.time_at(3).0 - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_try_new_rejects_bad_rate() {
        assert!(SampleBuffer::try_new(vec![1.0], Hertz(0.0)).is_err());
        assert!(SampleBuffer::try_new(vec![1.0], Hertz(-44100.0)).is_err());
        assert!(SampleBuffer::try_new(vec![1.0], Hertz(f64::NAN)).is_err());
        assert!(SampleBuffer::try_new(vec![], Hertz(8000.0)).is_ok());
    }

    #[test]
    fn test_time_axis_matches_buffer() {
        let buf = SampleBuffer::zeros(4, Hertz(4.0));
        let axis = buf.time_axis();
        assert_eq!(axis.times, vec![0.0, 0.25, 0.5, 0.75]);

        let timed: Vec<(f64, f64)> = buf.iter_timed().collect();
        assert_eq!(timed[2], (0.5, 0.0));
    }

    #[test]
    fn test_time_axis_validation() {
        assert!(TimeAxis::try_from_vec(vec![0.0, 0.1, 0.1, 0.7]).is_ok());
        assert!(TimeAxis::try_from_vec(vec![0.0, 0.2, 0.1]).is_err());
        assert!(TimeAxis::try_from_vec(vec![0.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_empty_buffer_metrics() {
        let buf = SampleBuffer::zeros(0, Hertz(1.0));
        assert_eq!(buf.peak_to_peak(), 0.0);
        assert_eq!(buf.rms(), 0.0);
        assert!(buf.time_axis().is_empty());
    }
}
