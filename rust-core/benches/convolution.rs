//! Convolution performance benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dspmini::filters::{conv_discrete_with, ConvolutionMethod};
use dspmini::signal::DiscreteSignal;

fn bench_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolution");

    let kernel = DiscreteSignal::new(0, (0..128).map(|i| (-i as f64 * 0.1).exp()).collect())
        .expect("non-empty kernel");

    for signal_len in [256, 1024, 4096].iter() {
        let signal = DiscreteSignal::new(
            -(*signal_len as i64) / 2,
            (0..*signal_len).map(|i| (i as f64 * 0.01).sin()).collect(),
        )
        .expect("non-empty signal");

        group.bench_with_input(
            BenchmarkId::new("direct", signal_len),
            &(&signal, &kernel),
            |b, (s, k)| {
                b.iter(|| conv_discrete_with(black_box(s), black_box(k), ConvolutionMethod::Direct).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("fft", signal_len),
            &(&signal, &kernel),
            |b, (s, k)| {
                b.iter(|| conv_discrete_with(black_box(s), black_box(k), ConvolutionMethod::Fft).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_convolution);
criterion_main!(benches);
