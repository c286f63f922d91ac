use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use transduce::consumers::Collect;
use transduce::drivers::{consume, push_pipeline, transduce};
use transduce::reducers;
use transduce::transducers::{filtering, mapping, taking};

fn bench_pull_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pull_pipeline");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("map_sum", size), size, |b, &size| {
            b.iter(|| {
                let pipeline = mapping(|x: i64| black_box(x * 2));
                transduce(
                    &pipeline,
                    reducers::from_fn(|acc: i64, x: i64| acc + x),
                    0,
                    0..size,
                )
            });
        });

        group.bench_with_input(
            BenchmarkId::new("filter_map_take", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let pipeline = transduce::compose!(
                        filtering(|x: &i64| x % 2 == 0),
                        mapping(|x: i64| black_box(x * 3)),
                        taking((size / 4) as usize),
                    );
                    transduce(&pipeline, reducers::append(), Vec::new(), 0..size)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("iterator_baseline", size), size, |b, &size| {
            b.iter(|| {
                (0..size)
                    .map(|x: i64| black_box(x * 2))
                    .sum::<i64>()
            });
        });
    }

    group.finish();
}

fn bench_push_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pipeline");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("map_collect", size), size, |b, &size| {
            b.iter(|| {
                let mut out = Vec::new();
                let pipeline = mapping(|x: i64| black_box(x * 2));
                let mut push = push_pipeline(&pipeline, Collect::new(&mut out));
                consume(&mut push, 0..size)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pull_pipeline, bench_push_pipeline);
criterion_main!(benches);
