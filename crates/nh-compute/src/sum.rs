//! Neumaier compensated-summation accumulator.
//!
//! Naive floating addition discards low-order bits whenever magnitudes
//! differ widely; over a histogram's cell grid that loss compounds. [`Sum`]
//! keeps a running total plus a compensation term holding the rounding
//! error lost by the most recent addition, and folds the compensation back
//! in when the value is read. The invariant: after every addition,
//! `total + compensation` equals the mathematically exact sum to within
//! representable precision.
//!
//! Merging two accumulators adds totals and compensations separately, so
//! partial sums computed independently (including in parallel) combine
//! without losing their corrections.

use nh_core::bools::{False, True};
use nh_core::caps::{BinaryCapabilities, Capabilities};
use nh_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter;
use std::ops::{Add, AddAssign, MulAssign};

/// Compensated floating-point accumulator (Neumaier variant).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sum {
    total: f64,
    compensation: f64,
}

impl Sum {
    /// A fresh accumulator at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar contribution.
    ///
    /// The branch keeps whichever operand has the larger magnitude as the
    /// reference when recovering the rounding error, which is what lets the
    /// Neumaier variant also absorb additions larger than the running total.
    pub fn add(&mut self, x: f64) {
        let t = self.total + x;
        if self.total.abs() >= x.abs() {
            self.compensation += (self.total - t) + x;
        } else {
            self.compensation += (x - t) + self.total;
        }
        self.total = t;
    }

    /// The accumulated value, with the compensation folded in.
    #[inline]
    pub fn value(&self) -> f64 {
        self.total + self.compensation
    }

    /// The running total before compensation.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// The accumulated rounding-error correction.
    #[inline]
    pub fn compensation(&self) -> f64 {
        self.compensation
    }

    /// Merge another accumulator into this one.
    ///
    /// Totals and compensations combine separately; the merge is associative
    /// (up to floating rounding), so split partial sums recombine safely.
    #[inline]
    pub fn merge(&mut self, other: &Sum) {
        self.total += other.total;
        self.compensation += other.compensation;
    }

    /// The accumulated value as an integer, when it is integral.
    ///
    /// Fails with [`Error::NonIntegral`] when the value carries a fractional
    /// part beyond one rounding unit, and with [`Error::Validation`] when it
    /// is non-finite or outside the `i64` range.
    pub fn to_i64(&self) -> Result<i64> {
        let v = self.value();
        if !v.is_finite() {
            return Err(Error::Validation(format!("sum value {} is not finite", v)));
        }
        let rounded = v.round();
        if (v - rounded).abs() > f64::EPSILON * v.abs().max(1.0) {
            return Err(Error::NonIntegral { value: v });
        }
        if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
            return Err(Error::Validation(format!("sum value {} exceeds the i64 range", rounded)));
        }
        Ok(rounded as i64)
    }
}

impl AddAssign<f64> for Sum {
    #[inline]
    fn add_assign(&mut self, x: f64) {
        self.add(x);
    }
}

impl Add<f64> for Sum {
    type Output = Sum;

    #[inline]
    fn add(mut self, x: f64) -> Sum {
        self += x;
        self
    }
}

impl AddAssign<Sum> for Sum {
    #[inline]
    fn add_assign(&mut self, other: Sum) {
        self.merge(&other);
    }
}

impl AddAssign<&Sum> for Sum {
    #[inline]
    fn add_assign(&mut self, other: &Sum) {
        self.merge(other);
    }
}

impl MulAssign<f64> for Sum {
    /// Scale the accumulated value; the correction scales with it.
    #[inline]
    fn mul_assign(&mut self, factor: f64) {
        self.total *= factor;
        self.compensation *= factor;
    }
}

impl iter::Sum<f64> for Sum {
    fn sum<I: Iterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Sum::new();
        for x in iter {
            acc += x;
        }
        acc
    }
}

impl From<Sum> for f64 {
    #[inline]
    fn from(sum: Sum) -> f64 {
        sum.value()
    }
}

impl TryFrom<Sum> for i64 {
    type Error = Error;

    fn try_from(sum: Sum) -> Result<i64> {
        sum.to_i64()
    }
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sum({} + {})", self.total, self.compensation)
    }
}

impl Capabilities for Sum {
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
    type IsStreamable = True;
    type IsIncrementable = False;
    type HasFixedSize = False;
    type HasScaleMul = True;
    // A self-describing accumulator, not a bare scalar: the reduction keeps
    // it intact instead of demoting it.
    type IsArithmetic = False;
    type IsWeight = False;
    type IsSample = False;
    type Elem = Self;
}

impl BinaryCapabilities for Sum {
    type HasEquality = True;
    type HasAddAssign = True;
    type HasValueAs = False;
}

impl BinaryCapabilities<f64> for Sum {
    type HasEquality = False;
    type HasAddAssign = True;
    type HasValueAs = True;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_recovers_small_contributions() {
        // Naive summation loses every 1e-10 against a 1e10 total: the
        // intermediate rounds back to 1e10 each step.
        let mut naive = 1.0e10;
        let mut sum = Sum::new();
        sum += 1.0e10;
        for _ in 0..10_000 {
            naive += 1.0e-10;
            sum += 1.0e-10;
        }
        assert_eq!(naive, 1.0e10);

        assert_eq!(sum.total(), 1.0e10);
        assert_relative_eq!(sum.compensation(), 1.0e-6, max_relative = 1e-9);
        assert_relative_eq!(sum.value(), 1.0e10 + 1.0e-6, max_relative = 1e-15);
    }

    #[test]
    fn test_absorbs_larger_addend() {
        // The Kahan variant degrades when the addend exceeds the total; the
        // Neumaier branch must not.
        let mut sum = Sum::new();
        sum += 1.0;
        sum += 1.0e100;
        sum += 1.0;
        sum += -1.0e100;
        assert_relative_eq!(sum.value(), 2.0, max_relative = 1e-15);
    }

    #[test]
    fn test_merge_matches_sequential() {
        let values: Vec<f64> =
            (0..1000).map(|i| if i % 2 == 0 { 1.0e8 } else { 1.0e-8 }).collect();

        let sequential: Sum = values.iter().copied().sum();

        let (lo, hi) = values.split_at(values.len() / 2);
        let mut left: Sum = lo.iter().copied().sum();
        let right: Sum = hi.iter().copied().sum();
        left += right;

        assert_relative_eq!(left.value(), sequential.value(), max_relative = 1e-15);
    }

    #[test]
    fn test_merge_is_associative() {
        let chunks: [&[f64]; 3] = [&[1.0e9, 3.5], &[1.0e-9, -2.0], &[7.25, 1.0e-9]];
        let partials: Vec<Sum> = chunks.iter().map(|c| c.iter().copied().sum()).collect();

        let mut left_first = partials[0];
        left_first += partials[1];
        left_first += partials[2];

        let mut right_first = partials[1];
        right_first += partials[2];
        let mut total = partials[0];
        total += right_first;

        assert_relative_eq!(left_first.value(), total.value(), max_relative = 1e-15);
    }

    #[test]
    fn test_scaling() {
        let mut sum = Sum::new();
        sum += 1.0e10;
        for _ in 0..100 {
            sum += 1.0e-10;
        }
        let before = sum.value();
        sum *= 2.0;
        assert_relative_eq!(sum.value(), 2.0 * before, max_relative = 1e-15);
    }

    #[test]
    fn test_integer_conversion() {
        let counts: Sum = (0..5).map(|_| 1.0).sum();
        assert_eq!(counts.to_i64().unwrap(), 5);
        assert_eq!(i64::try_from(counts).unwrap(), 5);

        let mut fractional = Sum::new();
        fractional += 2.5;
        assert!(matches!(fractional.to_i64(), Err(Error::NonIntegral { .. })));

        let mut huge = Sum::new();
        huge += 1.0e300;
        assert!(matches!(huge.to_i64(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_conversion_and_display() {
        let mut sum = Sum::new();
        sum += 2.0;
        sum += 0.5;
        assert_relative_eq!(f64::from(sum), 2.5, max_relative = 1e-15);
        assert!(format!("{}", sum).starts_with("sum("));
    }
}
