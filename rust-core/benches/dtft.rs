//! DTFT evaluation benchmarks: sequential vs chunked parallel summation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dspmini::signal::DiscreteSignal;
use dspmini::spectrum::{DtftConfig, DtftEvaluator};

fn bench_dtft(c: &mut Criterion) {
    let mut group = c.benchmark_group("dtft");

    let sequential = DtftEvaluator::new(DtftConfig {
        min_parallel_work: usize::MAX,
        ..DtftConfig::default()
    });
    let parallel = DtftEvaluator::new(DtftConfig {
        min_parallel_work: 0,
        ..DtftConfig::default()
    });

    for signal_len in [16, 128, 1024].iter() {
        let signal = DiscreteSignal::new(
            -(*signal_len as i64) / 2,
            (0..*signal_len).map(|i| (i as f64 * 0.2).cos()).collect(),
        )
        .expect("non-empty signal");

        group.bench_with_input(BenchmarkId::new("sequential", signal_len), &signal, |b, s| {
            b.iter(|| sequential.evaluate(black_box(s), None, None));
        });

        group.bench_with_input(BenchmarkId::new("parallel", signal_len), &signal, |b, s| {
            b.iter(|| parallel.evaluate(black_box(s), None, None));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dtft);
criterion_main!(benches);
