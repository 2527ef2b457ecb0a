//! # lib-dsp
//!
//! Signal kernel for the sigkit toolkit.
//!
//! This crate provides the algorithmic core. Every operation is a pure
//! function of its arguments:
//!
//! - **Generation**: sampled sine and square waves over a half-open time base
//! - **Time-domain operators**: zero-filled shift and nearest-index scaling
//! - **Spectra**: single-sided amplitude spectrum via realfft, normalized by N
//! - **Fourier series**: truncated odd-harmonic synthesis of a square wave
//! - **Measurements**: zero crossings, frequency estimate, mean absolute error

pub mod error;
pub mod fft;
pub mod generator;
pub mod time_ops;
pub mod spectral;
pub mod fourier;
pub mod measure;

pub use error::{DspError, DspResult};
pub use fft::FftEngine;
pub use generator::{generate_sine, generate_square, WaveformGenerator};
pub use time_ops::{scale_indices, shift_seconds, time_scale, time_shift};
pub use spectral::{amplitude_spectrum, analyze_buffer, SpectralAnalyzer};
pub use fourier::{fourier_series_square, FourierSynthesizer};
pub use measure::{estimate_frequency, mean_absolute_error, zero_crossings};
