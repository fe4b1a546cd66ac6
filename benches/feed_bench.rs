//! Benchmarks for payload parsing and rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use recofeed::feed::{parse_recommendations, Recommendations, RenderedList};

fn create_payload(count: usize) -> String {
    let labels: Vec<String> = (0..count).map(|i| format!("Product {}", i)).collect();
    Recommendations::new(labels).to_payload()
}

fn bench_receive(c: &mut Criterion) {
    let mut group = c.benchmark_group("receive");

    for size in [0, 10, 1000] {
        let payload = create_payload(size);

        group.throughput(Throughput::Elements(size.max(1) as u64));

        group.bench_function(format!("parse_{}", size), |b| {
            b.iter(|| parse_recommendations(black_box(&payload)).unwrap())
        });

        let list = parse_recommendations(&payload).unwrap();

        group.bench_function(format!("render_{}", size), |b| {
            b.iter(|| RenderedList::render(black_box(&list)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_receive);
criterion_main!(benches);
