//! Scalar measurements on kernel output.

use crate::error::{DspError, DspResult};
use lib_types::waveform::SampleBuffer;

/// Count sign-bit changes between adjacent samples.
///
/// `+0.0` counts as non-negative and `-0.0` as negative.
pub fn zero_crossings(samples: &[f64]) -> usize {
    samples
        .windows(2)
        .filter(|w| w[0].is_sign_negative() != w[1].is_sign_negative())
        .count()
}

/// Estimate the fundamental frequency from zero crossings:
/// two crossings per period over the buffer's duration.
pub fn estimate_frequency(buffer: &SampleBuffer) -> DspResult<f64> {
    if buffer.is_empty() {
        return Err(DspError::invalid("frequency estimate of an empty buffer"));
    }
    let crossings = zero_crossings(&buffer.samples);
    Ok(crossings as f64 / (2.0 * buffer.duration().0))
}

/// Mean absolute difference between two equally long signals.
pub fn mean_absolute_error(a: &[f64], b: &[f64]) -> DspResult<f64> {
    if a.len() != b.len() {
        return Err(DspError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    if a.is_empty() {
        return Err(DspError::invalid("mean absolute error of empty signals"));
    }
    let total: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum();
    Ok(total / a.len() as f64)
}
