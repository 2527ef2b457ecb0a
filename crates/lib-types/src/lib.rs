//! # lib-types
//!
//! Core value types for the sigkit signal toolkit.
//!
//! This crate provides the plain data passed between kernel operations:
//! - Physical units (sample rates, frequencies, durations)
//! - Sample buffers and time axes for time-domain signals
//! - Amplitude spectra for frequency-domain results
//! - Harmonic series parameters for analytic square-wave synthesis

pub mod units;
pub mod waveform;
pub mod spectrum;
pub mod series;

pub use units::*;
pub use waveform::*;
pub use spectrum::*;
pub use series::*;
