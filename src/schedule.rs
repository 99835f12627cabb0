//! The sequence of `(size, repeats)` pairs a benchmark run walks through.
//!
//! Sizes shrink (or follow an explicit list) while the repeat count grows, so
//! every round spends a comparable amount of wall-clock time in the FFT. Size
//! lists that grow pair with a growth factor below 1.

use crate::config::{BenchConfig, SizePlan};

/// One measurement round
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Round {
    /// Zero-based round number `q`
    pub index: usize,
    /// Transform length `s` for this round
    pub size: usize,
    /// How many times the FFT is invoked (`k`)
    pub repeats: usize,
}

/// Iterator over the rounds of a run
#[derive(Debug, Clone)]
pub struct Schedule<'a> {
    plan: &'a SizePlan,
    signal_len: usize,
    total: usize,
    growth: f64,
    index: usize,
    repeats: usize,
}

impl<'a> Schedule<'a> {
    pub fn new(config: &'a BenchConfig) -> Self {
        Self {
            plan: &config.sizes,
            signal_len: config.signal_len,
            total: config.round_count(),
            growth: config.repeat_growth,
            index: 0,
            repeats: config.initial_repeats,
        }
    }
}

/// `floor(k * growth)`, never below 1
#[inline]
pub fn next_repeats(repeats: usize, growth: f64) -> usize {
    ((repeats as f64 * growth).floor() as usize).max(1)
}

impl Iterator for Schedule<'_> {
    type Item = Round;

    fn next(&mut self) -> Option<Round> {
        if self.index >= self.total {
            return None;
        }

        let size = match self.plan {
            SizePlan::Halving => self.signal_len.checked_shr(self.index as u32).unwrap_or(0),
            SizePlan::Explicit(sizes) => sizes[self.index],
        };
        let round = Round {
            index: self.index,
            size,
            repeats: self.repeats,
        };

        self.index += 1;
        self.repeats = next_repeats(self.repeats, self.growth);
        Some(round)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Schedule<'_> {}
