//! Frequency-domain amplitude data.

use serde::{Deserialize, Serialize};

/// Single-sided amplitude spectrum of a real signal.
///
/// For an `N`-sample input at rate `fs` there are `floor(N/2) + 1` bins,
/// bin `k` sitting at `k * fs / N` Hz.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// Bin centre frequencies (Hz), ascending from 0.
    pub frequencies: Vec<f64>,

    /// Non-negative magnitudes, one per bin.
    pub amplitudes: Vec<f64>,
}

impl Spectrum {
    /// Pair up frequencies and amplitudes.
    pub fn new(frequencies: Vec<f64>, amplitudes: Vec<f64>) -> Result<Self, &'static str> {
        if frequencies.len() != amplitudes.len() {
            return Err("frequency and amplitude vectors must have equal length");
        }
        Ok(Self { frequencies, amplitudes })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Spacing between adjacent bins, or `None` with fewer than two bins.
    pub fn bin_width(&self) -> Option<f64> {
        match self.frequencies.as_slice() {
            [f0, f1, ..] => Some(f1 - f0),
            _ => None,
        }
    }

    /// `(frequency, amplitude)` pairs in ascending frequency order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.amplitudes.iter().copied())
    }

    /// Strongest bin above DC.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.iter()
            .skip(1)
            .fold(None, |best: Option<(f64, f64)>, (f, a)| match best {
                Some((_, best_a)) if best_a >= a => best,
                _ => Some((f, a)),
            })
    }

    /// Amplitude of the bin nearest to `freq`.
    pub fn amplitude_at(&self, freq: f64) -> Option<f64> {
        let width = self.bin_width()?;
        let idx = (freq / width).round();
        if idx < 0.0 {
            return None;
        }
        self.amplitudes.get(idx as usize).copied()
    }

    /// Bins with frequency at most `max_freq`.
    pub fn band(&self, max_freq: f64) -> Self {
        let count = self.frequencies.iter().take_while(|&&f| f <= max_freq).count();
        Self {
            frequencies: self.frequencies[..count].to_vec(),
            amplitudes: self.amplitudes[..count].to_vec(),
        }
    }

    /// The `n` strongest bins, strongest first.
    pub fn strongest(&self, n: usize) -> Vec<(f64, f64)> {
        let mut bins: Vec<(f64, f64)> = self.iter().collect();
        bins.sort_by(|a, b| b.1.total_cmp(&a.1));
        bins.truncate(n);
        bins
    }
}
