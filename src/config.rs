/// Settings for a single benchmark run.
///
/// [`BenchConfig::default`] reproduces the classic run: a 4 194 304 point
/// signal, 22 rounds of halving sizes, 4 repeats in the first round growing by
/// a factor of 1.7 each round, and an unseeded input signal.
///
/// All fields are public so callers can start from the defaults and override
/// what they need with struct update syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Length of the shared source signal
    pub signal_len: usize,
    /// Number of measurement rounds (ignored by [`SizePlan::Explicit`])
    pub rounds: usize,
    /// FFT repeat count for the first round
    pub initial_repeats: usize,
    /// Factor applied to the repeat count after every round, then truncated
    ///
    /// Factors below 1 shrink the count, for size lists that grow; the count
    /// never drops below 1.
    pub repeat_growth: f64,
    /// How the per-round transform sizes are chosen
    pub sizes: SizePlan,
    /// What to do once a round's size becomes degenerate
    pub tail: TailPolicy,
    /// Seed for the input signal; `None` draws from OS entropy
    pub seed: Option<u64>,
}

/// Default length of the source signal (2^22)
pub const DEFAULT_SIGNAL_LEN: usize = 4_194_304;
/// Default number of rounds
pub const DEFAULT_ROUNDS: usize = 22;
/// Default repeat count for the first round
pub const DEFAULT_INITIAL_REPEATS: usize = 4;
/// Default repeat growth factor
pub const DEFAULT_REPEAT_GROWTH: f64 = 1.7;

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            signal_len: DEFAULT_SIGNAL_LEN,
            rounds: DEFAULT_ROUNDS,
            initial_repeats: DEFAULT_INITIAL_REPEATS,
            repeat_growth: DEFAULT_REPEAT_GROWTH,
            sizes: SizePlan::default(),
            tail: TailPolicy::default(),
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Default configuration over a signal of `signal_len` points
    pub fn with_signal_len(signal_len: usize) -> Self {
        Self {
            signal_len,
            ..Self::default()
        }
    }

    /// The number of rounds the schedule will produce
    pub fn round_count(&self) -> usize {
        match &self.sizes {
            SizePlan::Halving => self.rounds,
            SizePlan::Explicit(sizes) => sizes.len(),
        }
    }

    /// Check that the configuration can drive a run.
    pub fn validate(&self) -> crate::Result<()> {
        let invalid = |msg: String| Err(crate::BenchError::InvalidConfig(msg));

        if self.signal_len == 0 {
            return invalid("signal length must be positive".into());
        }
        if self.initial_repeats == 0 {
            return invalid("initial repeat count must be positive".into());
        }
        if !self.repeat_growth.is_finite() || self.repeat_growth <= 0.0 {
            return invalid(format!(
                "repeat growth must be a finite positive factor, got {}",
                self.repeat_growth
            ));
        }
        match &self.sizes {
            SizePlan::Halving => {
                if self.rounds == 0 {
                    return invalid("round count must be positive".into());
                }
            }
            SizePlan::Explicit(sizes) => {
                if sizes.is_empty() {
                    return invalid("explicit size list is empty".into());
                }
                let min = match self.tail {
                    TailPolicy::StopBelowTwo => 2,
                    TailPolicy::Unbounded => 1,
                };
                if let Some(&bad) = sizes.iter().find(|&&s| s < min || s > self.signal_len) {
                    return invalid(format!(
                        "explicit size {bad} must lie in {min}..={}",
                        self.signal_len
                    ));
                }
            }
        }
        Ok(())
    }
}

/// How transform sizes are picked for each round.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SizePlan {
    #[default]
    /// Round `q` transforms the leading `signal_len >> q` samples
    Halving,
    /// Rounds transform the listed sizes, in order
    ///
    /// Useful for timing non-power-of-two lengths.
    Explicit(Vec<usize>),
}

/// Behaviour once the round size drops below 2, where `log2(s) <= 0` makes
/// the throughput estimate meaningless.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TailPolicy {
    #[default]
    /// Stop the run before the first round with a size below 2
    StopBelowTwo,
    /// Keep halving and print whatever the arithmetic produces
    Unbounded,
}
