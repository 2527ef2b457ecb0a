//! Physical units with type safety.
//!
//! These newtypes keep sample rates, frequencies and durations from being
//! mixed up at call sites (e.g., passing a duration where a rate is expected).

use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Time duration in seconds.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Convert to frequency (reciprocal).
    #[inline]
    pub fn to_frequency(&self) -> Hertz {
        Hertz(1.0 / self.0)
    }

    /// True for a finite, strictly positive duration.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

/// Duration times rate: the (fractional) number of samples spanned.
impl Mul<Hertz> for Seconds {
    type Output = f64;
    fn mul(self, rhs: Hertz) -> f64 {
        self.0 * rhs.0
    }
}

/// Frequency (or sample rate) in Hertz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Hertz(pub f64);

impl Hertz {
    /// Convert to period (reciprocal).
    #[inline]
    pub fn to_period(&self) -> Seconds {
        Seconds(1.0 / self.0)
    }

    /// Angular frequency (omega = 2 * pi * f).
    #[inline]
    pub fn angular(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.0
    }

    /// Nyquist frequency for a sample rate (half the rate).
    #[inline]
    pub fn nyquist(&self) -> Self {
        Self(self.0 / 2.0)
    }

    /// True for a finite, strictly positive frequency.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reciprocals() {
        let f = Hertz(5.0);
        assert!((f.to_period().0 - 0.2).abs() < 1e-12);
        assert!((Seconds(0.2).to_frequency().0 - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_seconds_times_rate_is_sample_count() {
        let n = Seconds(1.0) * Hertz(500.0);
        assert_eq!(n.floor() as usize, 500);
    }

    #[test]
    fn test_positivity() {
        assert!(Hertz(1.0).is_positive());
        assert!(!Hertz(0.0).is_positive());
        assert!(!Hertz(-3.0).is_positive());
        assert!(!Seconds(f64::NAN).is_positive());
        assert!(!Seconds(f64::INFINITY).is_positive());
    }

    #[test]
    fn test_angular_and_nyquist() {
        assert!((Hertz(5.0).angular() - 10.0 * std::f64::consts::PI).abs() < 1e-12);
        assert!((Hertz(0.5).angular() - std::f64::consts::PI).abs() < 1e-12);
        assert!((Hertz(500.0).nyquist().0 - 250.0).abs() < 1e-12);
    }
}
