//! Sampled sine and square wave generation.
//!
//! Both waveforms share one time base: `N = floor(duration * sample_rate)`
//! samples at `t = k / sample_rate`, a half-open interval that never
//! contains `t = duration`.

use crate::error::{DspError, DspResult};
use lib_types::units::{Hertz, Seconds};
use lib_types::waveform::{SampleBuffer, TimeAxis};
use rayon::prelude::*;

/// Buffers at least this long are evaluated on the rayon pool.
pub(crate) const PARALLEL_THRESHOLD: usize = 1 << 14;

/// Evaluate `f(k)` for `k in 0..n`, in index order.
pub(crate) fn evaluate_indexed<F>(n: usize, f: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    if n >= PARALLEL_THRESHOLD {
        (0..n).into_par_iter().map(f).collect()
    } else {
        (0..n).map(f).collect()
    }
}

/// Sign of `x` with an exact zero mapped to zero.
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Validated frequency/duration/rate triple for periodic waveform synthesis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveformGenerator {
    frequency: Hertz,
    duration: Seconds,
    sample_rate: Hertz,
    sample_count: usize,
}

impl WaveformGenerator {
    /// Create a generator.
    ///
    /// Fails with [`DspError::InvalidParameter`] if any argument is not
    /// strictly positive and finite, or if the time base holds no samples.
    pub fn new(frequency: Hertz, duration: Seconds, sample_rate: Hertz) -> DspResult<Self> {
        if !frequency.is_positive() {
            return Err(DspError::invalid(format!(
                "frequency must be positive, got {}",
                frequency.0
            )));
        }
        if !duration.is_positive() {
            return Err(DspError::invalid(format!(
                "duration must be positive, got {}",
                duration.0
            )));
        }
        if !sample_rate.is_positive() {
            return Err(DspError::invalid(format!(
                "sample_rate must be positive, got {}",
                sample_rate.0
            )));
        }

        let count = (duration * sample_rate).floor();
        if !count.is_finite() {
            return Err(DspError::invalid("duration * sample_rate overflows"));
        }
        if count < 1.0 {
            return Err(DspError::invalid(format!(
                "duration {} s at {} Hz yields no samples",
                duration.0, sample_rate.0
            )));
        }

        Ok(Self {
            frequency,
            duration,
            sample_rate,
            sample_count: count as usize,
        })
    }

    #[inline]
    pub fn frequency(&self) -> Hertz {
        self.frequency
    }

    #[inline]
    pub fn duration(&self) -> Seconds {
        self.duration
    }

    #[inline]
    pub fn sample_rate(&self) -> Hertz {
        self.sample_rate
    }

    /// Number of samples every waveform from this generator will hold.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// The sample instants `k / sample_rate`.
    pub fn time_axis(&self) -> TimeAxis {
        TimeAxis::uniform(self.sample_count, self.sample_rate)
    }

    /// Phase `2*pi*f*t` of sample `k`.
    #[inline]
    fn phase(&self, k: usize) -> f64 {
        self.frequency.angular() * (k as f64 / self.sample_rate.0)
    }

    /// `sin(2*pi*f*t)` at every sample instant.
    pub fn sine(&self) -> SampleBuffer {
        tracing::debug!(
            "Generating {} Hz sine: {} samples at {} Hz",
            self.frequency.0,
            self.sample_count,
            self.sample_rate.0
        );
        let samples = evaluate_indexed(self.sample_count, |k| self.phase(k).sin());
        SampleBuffer::new(samples, self.sample_rate)
    }

    /// Sign of the sine at every sample instant: `+1`, `-1`, or `0` where the
    /// sine evaluates to exactly zero.
    pub fn square(&self) -> SampleBuffer {
        tracing::debug!(
            "Generating {} Hz square: {} samples at {} Hz",
            self.frequency.0,
            self.sample_count,
            self.sample_rate.0
        );
        let samples = evaluate_indexed(self.sample_count, |k| sign(self.phase(k).sin()));
        SampleBuffer::new(samples, self.sample_rate)
    }
}

/// Generate a sampled sine wave.
pub fn generate_sine(frequency: Hertz, duration: Seconds, sample_rate: Hertz) -> DspResult<SampleBuffer> {
    Ok(WaveformGenerator::new(frequency, duration, sample_rate)?.sine())
}

/// Generate a sampled square wave (sign of the matching sine).
pub fn generate_square(frequency: Hertz, duration: Seconds, sample_rate: Hertz) -> DspResult<SampleBuffer> {
    Ok(WaveformGenerator::new(frequency, duration, sample_rate)?.square())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_is_floor() {
        let gen = WaveformGenerator::new(Hertz(5.0), Seconds(1.0), Hertz(500.0)).unwrap();
        assert_eq!(gen.sample_count(), 500);

        let gen = WaveformGenerator::new(Hertz(5.0), Seconds(0.0105), Hertz(1000.0)).unwrap();
        assert_eq!(gen.sample_count(), 10);
    }

    #[test]
    fn test_endpoint_excluded() {
        // 4 samples over one period: t = 0, 1/4, 1/2, 3/4, never t = 1.
        let sine = generate_sine(Hertz(1.0), Seconds(1.0), Hertz(4.0)).unwrap();
        assert_eq!(sine.len(), 4);
        assert!(sine.samples[0].abs() < 1e-12);
        assert!((sine.samples[1] - 1.0).abs() < 1e-12);
        assert!((sine.samples[3] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_keeps_zero_at_origin() {
        let square = generate_square(Hertz(5.0), Seconds(1.0), Hertz(1000.0)).unwrap();
        assert_eq!(square.samples[0], 0.0);
        assert_eq!(square.samples[1], 1.0);
        assert_eq!(square.samples[150], -1.0);
    }

    #[test]
    fn test_square_follows_sine_sign() {
        let gen = WaveformGenerator::new(Hertz(7.0), Seconds(0.5), Hertz(800.0)).unwrap();
        let sine = gen.sine();
        let square = gen.square();
        for (s, q) in sine.samples.iter().zip(square.samples.iter()) {
            assert_eq!(*q, sign(*s));
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            (0.0, 1.0, 100.0),
            (-5.0, 1.0, 100.0),
            (5.0, 0.0, 100.0),
            (5.0, -1.0, 100.0),
            (5.0, 1.0, 0.0),
            (5.0, 1.0, -100.0),
            (f64::NAN, 1.0, 100.0),
            // floor(0.001 * 100) == 0
            (5.0, 0.001, 100.0),
        ];
        for (f, d, fs) in cases {
            let result = generate_sine(Hertz(f), Seconds(d), Hertz(fs));
            assert!(
                matches!(result, Err(DspError::InvalidParameter(_))),
                "expected InvalidParameter for f={f}, d={d}, fs={fs}"
            );
            assert!(generate_square(Hertz(f), Seconds(d), Hertz(fs)).is_err());
        }
    }

    #[test]
    fn test_parallel_path_matches_serial() {
        let n = PARALLEL_THRESHOLD + 3;
        let f = |k: usize| (k as f64 * 0.001).sin();
        let parallel = evaluate_indexed(n, f);
        let serial: Vec<f64> = (0..n).map(f).collect();
        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_time_axis_matches_buffer() {
        let gen = WaveformGenerator::new(Hertz(2.0), Seconds(0.25), Hertz(40.0)).unwrap();
        assert_eq!(gen.time_axis(), gen.sine().time_axis());
    }
}
