//! The axis contract.
//!
//! An axis maps a sampled value to a bin index; its size is the bin count.
//! Concrete axis implementations live with the histogram types that use
//! them — this crate only fixes the contract that capability probing,
//! variants, and visitation are written against.

/// A component mapping a sampled value to a bin index.
pub trait Axis {
    /// Number of bins.
    fn size(&self) -> usize;

    /// Bin index for `value`, or `None` when the value falls outside the
    /// axis range.
    fn index(&self, value: f64) -> Option<usize>;
}

impl<A: Axis> Axis for &A {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn index(&self, value: f64) -> Option<usize> {
        (**self).index(value)
    }
}

/// A monotone coordinate transform with an exact inverse, used by
/// transformed axes (log, sqrt, ...). Backs the `IsTransform` probe.
pub trait Transform {
    /// Map an axis coordinate into transformed space.
    fn forward(&self, x: f64) -> f64;

    /// Map a transformed coordinate back. `inverse(forward(x))` must
    /// reproduce `x` up to floating rounding.
    fn inverse(&self, y: f64) -> f64;
}
