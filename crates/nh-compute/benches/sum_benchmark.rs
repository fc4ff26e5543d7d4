use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nh_compute::{sum, Sum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Mixed-magnitude cell contents, deterministic across runs.
fn make_cells(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0x6e68_6973_74);
    (0..n)
        .map(|_| {
            if rng.gen_bool(0.01) {
                rng.gen_range(1.0e9..1.0e10)
            } else {
                rng.gen_range(1.0e-10..1.0e-9)
            }
        })
        .collect()
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_sum");

    for n in [1_024usize, 65_536, 262_144] {
        let cells = make_cells(n);

        group.bench_with_input(BenchmarkId::new("naive_fold", n), &cells, |b, cells| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in cells {
                    acc += x;
                }
                black_box(acc)
            })
        });

        group.bench_with_input(BenchmarkId::new("compensated", n), &cells, |b, cells| {
            b.iter(|| {
                let mut acc = Sum::new();
                for &x in cells {
                    acc += x;
                }
                black_box(acc.value())
            })
        });

        group.bench_with_input(BenchmarkId::new("grid_reduce", n), &cells, |b, cells| {
            b.iter(|| black_box(sum(cells)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sum);
criterion_main!(benches);
