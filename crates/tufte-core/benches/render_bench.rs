use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tufte_core::render::RenderOptions;
use tufte_core::{Graph, Series};

fn build_graph(n: usize) -> Graph {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)).collect();
    let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };
    let mut graph = Graph::line().with_options(opts);
    graph.add(Series::new(x, y)).expect("valid series");
    graph.limit_spines().expect("limit");
    graph
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("line_{n}"), |b| {
            let graph = build_graph(n);
            b.iter(|| -> Result<()> {
                let bytes = graph.render_to_png_bytes()?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
