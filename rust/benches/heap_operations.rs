use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use heaptree::HeapPriorityQueue;

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in [64usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter(|| {
                let mut queue = HeapPriorityQueue::new();
                for i in 0..n {
                    // Reversed keys force a full upheap on every insert
                    queue.insert(n - i, i).unwrap();
                }
                queue
            })
        });
    }
    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_min");
    for size in [64usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter_with_setup(
                || {
                    let mut queue = HeapPriorityQueue::new();
                    for i in 0..n {
                        queue.insert(i * 7 % n, i).unwrap();
                    }
                    queue
                },
                |mut queue| {
                    while queue.remove_min().is_some() {}
                    queue
                },
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_drain);
criterion_main!(benches);
