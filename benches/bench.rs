use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use fftperf::{estimate, FftSubject, RustFftSubject};
use utilities::gen_normal_signal;

const LENGTHS: &[usize] = &[
    6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22,
];

const NON_POWERS_OF_TWO: &[usize] = &[
    6, 9, 12, 15, 18, 24, 36, 80, 100, 108, 210, 504, 1000, 1960, 4725, 8000, 10368, 27000,
    75600, 165375,
];

fn bench_subject<S: FftSubject>(c: &mut Criterion, group_name: &str, mut subject: S, lens: &[usize]) {
    let mut group = c.benchmark_group(group_name);

    for &len in lens {
        if !subject.supports(len) {
            continue;
        }
        // one "element" per estimated flop, so elem/s reads as flops/s
        group.throughput(Throughput::Elements(estimate::flop_count(len) as u64));

        let id = format!("{} FFT Forward", subject.name());
        group.bench_function(BenchmarkId::new(id, len), |b| {
            b.iter_batched(
                || gen_normal_signal(len, None),
                |signal| subject.fft(&signal),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn benchmark_forward_radix2(c: &mut Criterion) {
    let lens: Vec<usize> = LENGTHS.iter().map(|n| 1 << n).collect();
    bench_subject(c, "Forward f64 radix-2", RustFftSubject::new(), &lens);

    #[cfg(feature = "phastft")]
    bench_subject(c, "Forward f64 radix-2", fftperf::PhastFtSubject, &lens);
}

fn benchmark_forward_mixed_radix(c: &mut Criterion) {
    bench_subject(
        c,
        "Forward f64 non-powers of two",
        RustFftSubject::new(),
        NON_POWERS_OF_TWO,
    );
}

criterion_group!(benches, benchmark_forward_radix2, benchmark_forward_mixed_radix);
criterion_main!(benches);
