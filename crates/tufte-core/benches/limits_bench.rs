use criterion::{criterion_group, criterion_main, black_box, BatchSize, BenchmarkId, Criterion};
use tufte_core::{combined_range, nearest_tick_bounds, ticks::locate};

fn gen_series(count: usize, n: usize) -> Vec<Vec<f64>> {
    (0..count)
        .map(|s| {
            (0..n)
                .map(|i| (i as f64 * 0.01 + s as f64).sin() * 10.0 + (i as f64 * 0.0001))
                .collect()
        })
        .collect()
}

fn bench_limits(c: &mut Criterion) {
    let mut group = c.benchmark_group("spine_limits");
    for &n in &[10_000usize, 100_000usize] {
        for &count in &[1usize, 4usize] {
            let data = gen_series(count, n);
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_s{count}")), &data, |b, d| {
                b.iter_batched(
                    || d.clone(),
                    |d| {
                        let range = combined_range(&d).expect("non-empty");
                        let ticks = locate(range, 6);
                        let _ = black_box(nearest_tick_bounds(range, &ticks));
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_limits);
criterion_main!(benches);
