//! Analytic throughput estimate for a complex FFT.
//!
//! A radix-2 complex FFT of length `N` is commonly charged `5 N log2(N)` real
//! floating-point operations. Dividing that count by the measured time per
//! transform gives an MFlops figure comparable across libraries and sizes,
//! even for lengths that are not powers of two.

/// Estimated real floating-point operation count of a length-`size` complex FFT.
///
/// Not clamped: `size == 1` gives `0.0` and `size == 0` gives NaN.
pub fn flop_count(size: usize) -> f64 {
    let s = size as f64;
    5.0 * s * s.log2()
}

/// Millions of floating-point operations per second for one transform of
/// length `size` that took `seconds_per_call` seconds.
pub fn mflops(size: usize, seconds_per_call: f64) -> f64 {
    flop_count(size) / seconds_per_call / 1e6
}
