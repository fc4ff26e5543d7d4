//! End-to-end totals: fill dense storages through an axis, then reduce.

use approx::assert_relative_eq;
use nh_compute::{sum, Sum, WeightedSum};
use nh_core::axis::Axis;

struct Uniform {
    bins: usize,
    lo: f64,
    hi: f64,
}

impl Axis for Uniform {
    fn size(&self) -> usize {
        self.bins
    }

    fn index(&self, value: f64) -> Option<usize> {
        if value < self.lo || value >= self.hi {
            return None;
        }
        let frac = (value - self.lo) / (self.hi - self.lo);
        Some(((frac * self.bins as f64) as usize).min(self.bins - 1))
    }
}

#[test]
fn counted_fills_total_to_fill_count() {
    let axis = Uniform { bins: 10, lo: 0.0, hi: 1.0 };
    let mut storage = vec![0.0f64; axis.size()];

    let samples = [0.05, 0.15, 0.15, 0.95, 0.5, 0.5, 0.5, 1.5, -0.2];
    let mut accepted = 0u32;
    for &x in &samples {
        if let Some(bin) = axis.index(x) {
            storage[bin] += 1.0;
            accepted += 1;
        }
    }

    // Two samples fell outside the axis range.
    assert_eq!(accepted, 7);
    assert_eq!(sum(&storage), f64::from(accepted));
}

#[test]
fn all_ones_grid_is_exact() {
    // A 3x3 grid flattened row-major.
    let grid = vec![1.0f64; 9];
    assert_eq!(sum(&grid), 9.0);
}

#[test]
fn weighted_fills_keep_variance_through_reduction() {
    let axis = Uniform { bins: 4, lo: 0.0, hi: 4.0 };
    let mut storage = vec![WeightedSum::new(); axis.size()];

    let fills = [(0.5, 2.0), (1.5, 0.5), (1.7, 0.5), (3.2, 1.0)];
    for &(x, w) in &fills {
        if let Some(bin) = axis.index(x) {
            storage[bin] += w;
        }
    }

    let total: WeightedSum = sum(&storage);
    assert_relative_eq!(total.value(), 4.0, max_relative = 1e-15);
    assert_relative_eq!(total.variance(), 2.0 * 2.0 + 0.25 + 0.25 + 1.0, max_relative = 1e-15);
}

#[test]
fn partial_sums_merge_to_the_sequential_total() {
    let cells: Vec<f64> = (0..10_000)
        .map(|i| if i % 3 == 0 { 1.0e9 } else { 1.0e-9 })
        .collect();

    let sequential = sum(&cells);

    let (lo, hi) = cells.split_at(cells.len() / 2);
    let mut left: Sum = lo.iter().copied().sum();
    let right: Sum = hi.iter().copied().sum();
    left += right;

    assert_relative_eq!(left.value(), sequential, max_relative = 1e-15);
}

#[test]
fn integer_count_storage_totals_as_float() {
    let storage: Vec<u32> = vec![5, 0, 2, 1];
    let total: f64 = sum(&storage);
    assert_eq!(total, 8.0);
    assert_eq!(i64::try_from(storage.iter().map(|&c| f64::from(c)).sum::<Sum>()).unwrap(), 8);
}
