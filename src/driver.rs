//! The timing loop.
//!
//! Each round copies the leading `s` samples of the shared signal into a
//! fresh buffer, calls the FFT `k` times on it and turns the average call time
//! into an MFlops estimate. One line per round goes to the output writer.

use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

use num_complex::Complex64;
use tracing::{debug, info, warn};
use utilities::gen_normal_signal;

use crate::config::{BenchConfig, TailPolicy};
use crate::estimate;
use crate::report::{format_line, Measurement, Report};
use crate::schedule::{Round, Schedule};
use crate::subject::FftSubject;
use crate::{BenchError, Result};

/// Generate the shared source signal described by `config`
pub fn prepare_signal(config: &BenchConfig) -> Vec<Complex64> {
    gen_normal_signal(config.signal_len, config.seed)
}

/// Run every round of `config` against `subject`, writing one result line per
/// round to `out`.
///
/// `signal` must hold at least `config.signal_len` samples; it is never
/// modified.
pub fn run<S, W>(
    config: &BenchConfig,
    subject: &mut S,
    signal: &[Complex64],
    mut out: W,
) -> Result<Report>
where
    S: FftSubject + ?Sized,
    W: Write,
{
    config.validate()?;
    if signal.len() < config.signal_len {
        return Err(BenchError::SignalTooShort {
            expected: config.signal_len,
            actual: signal.len(),
        });
    }

    let rounds: Vec<Round> = Schedule::new(config)
        .take_while(|round| runs(config.tail, round))
        .collect();

    if let Some(round) = rounds.iter().find(|r| !subject.supports(r.size)) {
        return Err(BenchError::UnsupportedLength {
            subject: subject.name().to_string(),
            len: round.size,
        });
    }

    info!(
        subject = subject.name(),
        signal_len = config.signal_len,
        rounds = rounds.len(),
        "starting FFT benchmark"
    );

    let mut report = Report::with_rounds(config.round_count());
    for round in rounds {
        let measurement = measure(subject, &signal[..round.size], round);
        writeln!(out, "{}", format_line(measurement.size, measurement.mflops))?;
        report.record(measurement);
    }
    out.flush()?;

    if report.measurements.len() < config.round_count() {
        warn!(
            executed = report.measurements.len(),
            configured = config.round_count(),
            "stopped before sizes dropped below 2"
        );
    }
    info!(subject = subject.name(), "benchmark finished");

    Ok(report)
}

fn runs(tail: TailPolicy, round: &Round) -> bool {
    match tail {
        TailPolicy::StopBelowTwo => round.size >= 2,
        TailPolicy::Unbounded => true,
    }
}

/// Time `round.repeats` transforms of a private copy of `source`.
fn measure<S>(subject: &mut S, source: &[Complex64], round: Round) -> Measurement
where
    S: FftSubject + ?Sized,
{
    let z = source.to_vec();

    let now = Instant::now();
    for _ in 0..round.repeats {
        black_box(subject.fft(black_box(&z)));
    }
    let elapsed = now.elapsed();

    let seconds_per_call = elapsed.as_secs_f64() / round.repeats as f64;
    let mflops = estimate::mflops(round.size, seconds_per_call);

    debug!(
        round = round.index,
        size = round.size,
        repeats = round.repeats,
        elapsed_us = elapsed.as_micros() as u64,
        mflops,
        "round complete"
    );
    if !mflops.is_finite() {
        warn!(round = round.index, size = round.size, mflops, "throughput estimate is not finite");
    }

    Measurement {
        index: round.index,
        size: round.size,
        repeats: round.repeats,
        elapsed,
        seconds_per_call,
        mflops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizePlan;
    use crate::subject::RustFftSubject;

    /// Counts calls and returns zeros instantly
    #[derive(Default)]
    struct Counting {
        calls: Vec<usize>,
    }

    impl FftSubject for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn fft(&mut self, input: &[Complex64]) -> Vec<Complex64> {
            self.calls.push(input.len());
            vec![Complex64::default(); input.len()]
        }
    }

    struct PowersOfTwo;

    impl FftSubject for PowersOfTwo {
        fn name(&self) -> &str {
            "powers-of-two"
        }

        fn supports(&self, len: usize) -> bool {
            len.is_power_of_two()
        }

        fn fft(&mut self, input: &[Complex64]) -> Vec<Complex64> {
            input.to_vec()
        }
    }

    #[test]
    fn calls_fft_k_times_per_round() {
        let config = BenchConfig {
            rounds: 4,
            ..BenchConfig::with_signal_len(64)
        };
        let signal = prepare_signal(&config);
        let mut subject = Counting::default();

        let report = run(&config, &mut subject, &signal, Vec::new()).unwrap();

        let mut expected = Vec::new();
        for (size, k) in [(64, 4), (32, 6), (16, 10), (8, 17)] {
            expected.extend(std::iter::repeat(size).take(k));
        }
        assert_eq!(subject.calls, expected);
        assert_eq!(report.repeats(), vec![4, 6, 10, 17]);
    }

    #[test]
    fn source_signal_is_untouched() {
        let config = BenchConfig {
            rounds: 3,
            seed: Some(3),
            ..BenchConfig::with_signal_len(256)
        };
        let signal = prepare_signal(&config);
        let snapshot = signal.clone();

        run(&config, &mut RustFftSubject::new(), &signal, std::io::sink()).unwrap();
        assert_eq!(signal, snapshot);
    }

    #[test]
    fn stops_before_degenerate_sizes() {
        let config = BenchConfig {
            rounds: 6,
            ..BenchConfig::with_signal_len(8)
        };
        let signal = prepare_signal(&config);
        let mut out = Vec::new();

        let report = run(&config, &mut Counting::default(), &signal, &mut out).unwrap();

        assert_eq!(report.sizes(), vec![8, 4, 2]);
        assert_eq!(report.mflops.len(), 6);
        assert_eq!(&report.mflops[..3], &[0.0, 0.0, 0.0]);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[test]
    fn unbounded_tail_prints_degenerate_rounds() {
        let config = BenchConfig {
            rounds: 5,
            tail: TailPolicy::Unbounded,
            ..BenchConfig::with_signal_len(8)
        };
        let signal = prepare_signal(&config);
        let mut out = Vec::new();

        let report = run(&config, &mut Counting::default(), &signal, &mut out).unwrap();

        assert_eq!(report.sizes(), vec![8, 4, 2, 1, 0]);
        // log2(1) == 0, and 0 * log2(0) is NaN
        assert_eq!(report.mflops[1], 0.0);
        assert!(report.mflops[0].is_nan());

        let text = String::from_utf8(out).unwrap();
        let last = text.lines().last().unwrap();
        assert_eq!(last, "size =        0   Mflops =          NaN");
    }

    #[test]
    fn rejects_short_signal() {
        let config = BenchConfig::with_signal_len(64);
        let signal = vec![Complex64::default(); 32];
        let err = run(&config, &mut Counting::default(), &signal, std::io::sink()).unwrap_err();
        assert!(matches!(
            err,
            BenchError::SignalTooShort {
                expected: 64,
                actual: 32
            }
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = BenchConfig {
            initial_repeats: 0,
            ..BenchConfig::with_signal_len(64)
        };
        let signal = prepare_signal(&config);
        let err = run(&config, &mut Counting::default(), &signal, std::io::sink()).unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig(_)));
    }

    #[test]
    fn unsupported_length_fails_before_any_output() {
        let config = BenchConfig {
            sizes: SizePlan::Explicit(vec![16, 12]),
            ..BenchConfig::with_signal_len(16)
        };
        let signal = prepare_signal(&config);
        let mut out = Vec::new();

        let err = run(&config, &mut PowersOfTwo, &signal, &mut out).unwrap_err();
        assert!(matches!(err, BenchError::UnsupportedLength { len: 12, .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn explicit_sizes_run_in_order() {
        let config = BenchConfig {
            sizes: SizePlan::Explicit(vec![6, 9, 12, 15]),
            ..BenchConfig::with_signal_len(16)
        };
        let signal = prepare_signal(&config);

        let report = run(&config, &mut RustFftSubject::new(), &signal, std::io::sink()).unwrap();
        assert_eq!(report.sizes(), vec![6, 9, 12, 15]);
        assert!(report.mflops.iter().all(|m| *m > 0.0));
    }
}
