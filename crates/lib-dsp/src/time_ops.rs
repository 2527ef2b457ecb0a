//! Time-domain shift and scale operators.
//!
//! Shifting is zero-filled, never circular: samples pushed past either edge
//! are discarded. Scaling is nearest-index decimation/repetition with no
//! interpolation or anti-aliasing.

use crate::error::{DspError, DspResult};
use lib_types::units::Seconds;
use lib_types::waveform::SampleBuffer;

/// Largest output length [`time_scale`] will allocate.
pub const MAX_SCALED_LEN: usize = 1 << 28;

/// Shift raw samples by `shift` positions, keeping the length.
///
/// Positive `shift` delays (zeros prepended, tail dropped); negative
/// advances (head dropped, zeros appended).
pub fn shift_samples(samples: &[f64], shift: isize) -> Vec<f64> {
    let n = samples.len();
    let offset = shift.unsigned_abs();
    if offset >= n {
        return vec![0.0; n];
    }

    let mut shifted = Vec::with_capacity(n);
    if shift > 0 {
        shifted.resize(offset, 0.0);
        shifted.extend_from_slice(&samples[..n - offset]);
    } else {
        shifted.extend_from_slice(&samples[offset..]);
        shifted.resize(n, 0.0);
    }
    shifted
}

/// Delay (positive) or advance (negative) a buffer by whole samples.
pub fn time_shift(buffer: &SampleBuffer, shift_samples_by: isize) -> SampleBuffer {
    if shift_samples_by.unsigned_abs() >= buffer.len() && !buffer.is_empty() {
        tracing::debug!(
            "Shift of {} samples clears a {}-sample buffer",
            shift_samples_by,
            buffer.len()
        );
    }
    SampleBuffer::new(shift_samples(&buffer.samples, shift_samples_by), buffer.sample_rate)
}

/// Shift a buffer by a time offset, truncated toward zero to whole samples.
pub fn shift_seconds(buffer: &SampleBuffer, offset: Seconds) -> DspResult<SampleBuffer> {
    let samples = (offset * buffer.sample_rate).trunc();
    if !samples.is_finite() || samples.abs() > isize::MAX as f64 {
        return Err(DspError::invalid(format!(
            "shift of {} s is not representable in samples",
            offset.0
        )));
    }
    Ok(time_shift(buffer, samples as isize))
}

/// Source indices gathered by [`time_scale`] for a buffer of length `len`.
///
/// Positions `i / scale_factor` are generated for
/// `i in 0..ceil(len * scale_factor)`, those below `len` are kept and each
/// is truncated to an integer index.
pub fn scale_indices(len: usize, scale_factor: f64) -> DspResult<Vec<usize>> {
    if !(scale_factor.is_finite() && scale_factor > 0.0) {
        return Err(DspError::invalid(format!(
            "scale_factor must be positive, got {}",
            scale_factor
        )));
    }

    let step = 1.0 / scale_factor;
    let bound = len as f64;
    let count = (bound / step).ceil();
    if !count.is_finite() || count > MAX_SCALED_LEN as f64 {
        return Err(DspError::invalid(format!(
            "scale_factor {} is too large for {} samples (limit {} output samples)",
            scale_factor, len, MAX_SCALED_LEN
        )));
    }

    Ok((0..count as usize)
        .map(|i| i as f64 * step)
        .take_while(|&pos| pos < bound)
        .map(|pos| pos as usize)
        .collect())
}

/// Stretch (`scale_factor > 1`) or compress (`< 1`) a buffer in time.
///
/// The sample rate is kept, so a stretched buffer plays back slower.
pub fn time_scale(buffer: &SampleBuffer, scale_factor: f64) -> DspResult<SampleBuffer> {
    let indices = scale_indices(buffer.len(), scale_factor)?;

    tracing::debug!(
        "Time scale x{}: {} -> {} samples",
        scale_factor,
        buffer.len(),
        indices.len()
    );

    let samples = indices.into_iter().map(|i| buffer.samples[i]).collect();
    Ok(SampleBuffer::new(samples, buffer.sample_rate))
}
