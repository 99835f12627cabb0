//! The FFT implementations whose throughput is being measured.
//!
//! The driver only sees [`FftSubject`], so library backends and test stubs
//! are interchangeable.

use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use rustfft::FftPlanner;

use crate::BenchError;

/// A forward complex FFT under measurement.
pub trait FftSubject {
    /// Human readable name, used in logs and errors
    fn name(&self) -> &str;

    /// Whether this subject can transform a slice of `len` points
    fn supports(&self, _len: usize) -> bool {
        true
    }

    /// Full-length forward DFT of `input`, returned as a fresh buffer of the same length.
    ///
    /// `input` is left untouched.
    fn fft(&mut self, input: &[Complex64]) -> Vec<Complex64>;
}

impl<S: FftSubject + ?Sized> FftSubject for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn supports(&self, len: usize) -> bool {
        (**self).supports(len)
    }

    fn fft(&mut self, input: &[Complex64]) -> Vec<Complex64> {
        (**self).fft(input)
    }
}

/// RustFFT's forward transform.
///
/// Plans are cached by the planner, so only the first call at a given length
/// pays for twiddle computation.
pub struct RustFftSubject {
    planner: FftPlanner<f64>,
}

impl RustFftSubject {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }
}

impl Default for RustFftSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl FftSubject for RustFftSubject {
    fn name(&self) -> &str {
        "RustFFT"
    }

    fn fft(&mut self, input: &[Complex64]) -> Vec<Complex64> {
        let mut output = input.to_vec();
        if output.is_empty() {
            return output;
        }
        let fft = self.planner.plan_fft_forward(output.len());
        fft.process(&mut output);
        output
    }
}

/// PhastFT's forward transform on split real/imaginary buffers.
#[cfg(feature = "phastft")]
#[derive(Default)]
pub struct PhastFtSubject;

#[cfg(feature = "phastft")]
impl FftSubject for PhastFtSubject {
    fn name(&self) -> &str {
        "PhastFT"
    }

    fn supports(&self, len: usize) -> bool {
        len >= 2 && len.is_power_of_two()
    }

    fn fft(&mut self, input: &[Complex64]) -> Vec<Complex64> {
        use phastft::{fft_64, planner::Direction};

        let (mut reals, mut imags): (Vec<f64>, Vec<f64>) =
            input.iter().map(|z| (z.re, z.im)).unzip();
        fft_64(&mut reals, &mut imags, Direction::Forward);
        reals
            .into_iter()
            .zip(imags)
            .map(|(re, im)| Complex64::new(re, im))
            .collect()
    }
}

/// The FFT libraries this binary can time
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    RustFft,
    PhastFt,
}

impl Backend {
    /// Construct the subject for this backend.
    ///
    /// Fails when the backend was not compiled in.
    pub fn subject(self) -> crate::Result<Box<dyn FftSubject>> {
        match self {
            Backend::RustFft => Ok(Box::new(RustFftSubject::new())),
            #[cfg(feature = "phastft")]
            Backend::PhastFt => Ok(Box::new(PhastFtSubject)),
            #[cfg(not(feature = "phastft"))]
            Backend::PhastFt => Err(BenchError::InvalidConfig(
                "the phastft backend requires building with `--features phastft`".into(),
            )),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::RustFft => write!(f, "rustfft"),
            Backend::PhastFt => write!(f, "phastft"),
        }
    }
}

impl FromStr for Backend {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rustfft" => Ok(Backend::RustFft),
            "phastft" => Ok(Backend::PhastFt),
            other => Err(BenchError::InvalidConfig(format!(
                "unknown backend '{other}' (expected rustfft or phastft)"
            ))),
        }
    }
}
