//! Weighted-count cell with variance tracking.
//!
//! Histograms filled with weights keep, per cell, both the sum of weights
//! and the sum of squared weights (the `sumw2` convention); the latter is
//! the variance estimate of the weighted count. [`WeightedSum`] is the
//! canonical *self-describing* cell: it defines its own combination
//! semantics, and the reduction in [`crate::reduce`] preserves it intact
//! instead of collapsing it to a bare scalar and discarding the variance.

use nh_core::bools::{False, True};
use nh_core::caps::{BinaryCapabilities, Capabilities};
use serde::{Deserialize, Serialize};
use std::ops::{AddAssign, MulAssign};

/// Weighted count plus variance of the count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedSum {
    sum_of_weights: f64,
    sum_of_weights_squared: f64,
}

impl WeightedSum {
    /// A fresh empty cell.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fill with the given weight.
    #[inline]
    pub fn fill(&mut self, weight: f64) {
        self.sum_of_weights += weight;
        self.sum_of_weights_squared += weight * weight;
    }

    /// The weighted count.
    #[inline]
    pub fn value(&self) -> f64 {
        self.sum_of_weights
    }

    /// Variance estimate of the weighted count (sum of squared weights).
    #[inline]
    pub fn variance(&self) -> f64 {
        self.sum_of_weights_squared
    }

    /// Merge another cell into this one.
    #[inline]
    pub fn merge(&mut self, other: &WeightedSum) {
        self.sum_of_weights += other.sum_of_weights;
        self.sum_of_weights_squared += other.sum_of_weights_squared;
    }
}

impl AddAssign<f64> for WeightedSum {
    #[inline]
    fn add_assign(&mut self, weight: f64) {
        self.fill(weight);
    }
}

impl AddAssign<WeightedSum> for WeightedSum {
    #[inline]
    fn add_assign(&mut self, other: WeightedSum) {
        self.merge(&other);
    }
}

impl AddAssign<&WeightedSum> for WeightedSum {
    #[inline]
    fn add_assign(&mut self, other: &WeightedSum) {
        self.merge(other);
    }
}

impl MulAssign<f64> for WeightedSum {
    /// Scale the cell: the count scales linearly, its variance
    /// quadratically.
    #[inline]
    fn mul_assign(&mut self, factor: f64) {
        self.sum_of_weights *= factor;
        self.sum_of_weights_squared *= factor * factor;
    }
}

impl Capabilities for WeightedSum {
    type HasMetadata = False;
    type HasResize = False;
    type HasSize = False;
    type HasClear = False;
    type HasLowerEdge = False;
    type HasValueAt = True;
    type HasOptions = False;
    type HasAllocator = False;
    type IsIndexable = False;
    type IsTransform = False;
    type IsMapLike = False;
    type IsAxis = False;
    type IsAxisVariant = False;
    type IsIterable = False;
    type IsStreamable = False;
    type IsIncrementable = False;
    type HasFixedSize = False;
    type HasScaleMul = True;
    type IsArithmetic = False;
    type IsWeight = False;
    type IsSample = False;
    type Elem = Self;
}

impl BinaryCapabilities for WeightedSum {
    type HasEquality = True;
    type HasAddAssign = True;
    type HasValueAs = False;
}

impl BinaryCapabilities<f64> for WeightedSum {
    type HasEquality = False;
    type HasAddAssign = True;
    type HasValueAs = True;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fill_tracks_weight_and_square() {
        let mut cell = WeightedSum::new();
        cell += 2.0;
        cell += 3.0;
        assert_relative_eq!(cell.value(), 5.0, max_relative = 1e-15);
        assert_relative_eq!(cell.variance(), 13.0, max_relative = 1e-15);
    }

    #[test]
    fn test_merge() {
        let mut a = WeightedSum::new();
        a += 1.0;
        a += 2.0;
        let mut b = WeightedSum::new();
        b += 3.0;
        a += &b;
        assert_relative_eq!(a.value(), 6.0, max_relative = 1e-15);
        assert_relative_eq!(a.variance(), 14.0, max_relative = 1e-15);
    }

    #[test]
    fn test_scaling_is_quadratic_in_variance() {
        let mut cell = WeightedSum::new();
        cell += 2.0;
        cell *= 3.0;
        assert_relative_eq!(cell.value(), 6.0, max_relative = 1e-15);
        assert_relative_eq!(cell.variance(), 36.0, max_relative = 1e-15);
    }

    #[test]
    fn test_unit_weight_matches_plain_count() {
        let mut cell = WeightedSum::new();
        for _ in 0..4 {
            cell += 1.0;
        }
        assert_relative_eq!(cell.value(), 4.0, max_relative = 1e-15);
        assert_relative_eq!(cell.variance(), 4.0, max_relative = 1e-15);
    }
}
