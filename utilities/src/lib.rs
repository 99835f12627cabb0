use num_complex::Complex64;
use num_traits::Float;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Build the rng used for signal generation.
///
/// A fixed `seed` gives a reproducible stream; `None` seeds from OS entropy.
pub fn signal_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fill `signal` with complex samples whose real and imaginary parts are drawn
/// independently from the standard normal distribution (mean 0, variance 1).
pub fn fill_normal_signal<R: Rng>(signal: &mut [Complex64], rng: &mut R) {
    for z in signal.iter_mut() {
        z.re = rng.sample(StandardNormal);
        z.im = rng.sample(StandardNormal);
    }
}

/// Generate a random, complex, standard-normal signal of length `len`
pub fn gen_normal_signal(len: usize, seed: Option<u64>) -> Vec<Complex64> {
    let mut rng = signal_rng(seed);
    let mut signal = vec![Complex64::default(); len];
    fill_normal_signal(&mut signal, &mut rng);
    signal
}
