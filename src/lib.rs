//! Complex FFT throughput benchmark.
//!
//! A run generates one standard-normal complex signal, then walks a schedule of
//! shrinking transform sizes with growing repeat counts. Every round times the
//! FFT on a copy of the signal's leading samples and reports an estimated
//! MFlops figure, `5 N log2(N) / t / 1e6`.
//!
//! ```no_run
//! use fftperf::{driver, BenchConfig, RustFftSubject};
//!
//! let config = BenchConfig::default();
//! let signal = driver::prepare_signal(&config);
//! let report = driver::run(&config, &mut RustFftSubject::new(), &signal, std::io::stdout())?;
//! println!("{:?}", report.mflops);
//! # Ok::<(), fftperf::BenchError>(())
//! ```

pub mod config;
pub mod driver;
mod error;
pub mod estimate;
pub mod report;
pub mod schedule;
pub mod subject;

pub use config::{BenchConfig, SizePlan, TailPolicy};
pub use error::{BenchError, Result};
pub use report::{Measurement, Report};
#[cfg(feature = "phastft")]
pub use subject::PhastFtSubject;
pub use subject::{Backend, FftSubject, RustFftSubject};
