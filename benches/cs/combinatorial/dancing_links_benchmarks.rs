use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dlx::cs::combinatorial::puzzles::{domino_tiling, langford, random_instance_seeded};
use dlx::{SearchConfig, Strategy};

fn bench_langford(c: &mut Criterion) {
    let mut group = c.benchmark_group("langford");
    for n in [7, 8] {
        let dlx = langford(n).unwrap().build().unwrap();
        group.bench_with_input(BenchmarkId::new("count", n), &dlx, |b, dlx| {
            let mut dlx = dlx.clone();
            b.iter(|| black_box(dlx.count()));
        });
    }
    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("domino_tiling_6x6");
    let dlx = domino_tiling(6, 6).unwrap().build().unwrap();
    for strategy in [Strategy::Recursive, Strategy::Iterative] {
        let config = SearchConfig::default().with_strategy(strategy);
        group.bench_function(format!("{:?}", strategy), |b| {
            let mut dlx = dlx.clone();
            b.iter(|| black_box(dlx.count_with(&config).solutions));
        });
    }
    group.finish();
}

fn bench_enumerate_vs_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_60x120");
    let dlx = random_instance_seeded(42, 60, 120, 0.08).unwrap().build().unwrap();
    group.bench_function("count", |b| {
        let mut dlx = dlx.clone();
        b.iter(|| black_box(dlx.count()));
    });
    group.bench_function("enumerate", |b| {
        let mut dlx = dlx.clone();
        b.iter(|| {
            let mut rows = 0;
            dlx.enumerate(|solution| rows += solution.len());
            black_box(rows)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_langford,
    bench_strategies,
    bench_enumerate_vs_count
);
criterion_main!(benches);
