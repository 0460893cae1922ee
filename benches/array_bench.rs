//! Benchmarks for arraykit sorting and searching

use arraykit::generate::InputGenerator;
use arraykit::{advanced, competitive, intermediate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Compare the three quadratic sorts on the same random inputs
fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for &size in &[16usize, 64, 256, 1024] {
        let input = InputGenerator::new(size as u64).values(size, -10_000..=10_000);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("bubble", size), &input, |b, input| {
            b.iter(|| {
                let mut values = input.clone();
                intermediate::bubble_sort(&mut values);
                black_box(values)
            })
        });
        group.bench_with_input(BenchmarkId::new("selection", size), &input, |b, input| {
            b.iter(|| {
                let mut values = input.clone();
                intermediate::selection_sort(&mut values);
                black_box(values)
            })
        });
        group.bench_with_input(BenchmarkId::new("insertion", size), &input, |b, input| {
            b.iter(|| {
                let mut values = input.clone();
                intermediate::insertion_sort(&mut values);
                black_box(values)
            })
        });
    }

    group.finish();
}

/// Linear versus binary search over sorted input
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for &size in &[64usize, 1024, 16_384] {
        let input = InputGenerator::new(7).sorted(size, -1_000_000..=1_000_000);
        let target = input[size * 3 / 4];

        group.bench_with_input(BenchmarkId::new("linear", size), &input, |b, input| {
            b.iter(|| black_box(intermediate::linear_search(input, black_box(&target))))
        });
        group.bench_with_input(BenchmarkId::new("binary", size), &input, |b, input| {
            b.iter(|| black_box(intermediate::binary_search(input, black_box(&target))))
        });
    }

    group.finish();
}

/// Linear-time partitioning and windowing routines
fn bench_linear_passes(c: &mut Criterion) {
    let size = 4096;
    let mut generator = InputGenerator::new(11);
    let flags = generator.flags(size);
    let values = generator.values(size, -100..=100);

    c.bench_function("sort_012_4096", |b| {
        b.iter(|| {
            let mut input = flags.clone();
            competitive::sort_012(&mut input).unwrap();
            black_box(input)
        })
    });

    c.bench_function("kadane_4096", |b| {
        b.iter(|| black_box(advanced::kadane_max_subarray_sum(black_box(&values))))
    });

    c.bench_function("rotate_left_in_place_4096", |b| {
        b.iter(|| {
            let mut input = values.clone();
            advanced::rotate_left_in_place(&mut input, 1234);
            black_box(input)
        })
    });
}

criterion_group!(benches, bench_sorts, bench_search, bench_linear_passes);
criterion_main!(benches);
