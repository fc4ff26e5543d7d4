//! Totalling a grid's cells.
//!
//! [`sum`] visits every cell of a [`Grid`] once and totals the contents.
//! Which accumulation runs is a fact about the *cell type*, resolved once at
//! the type level through [`CellValue::Accum`], never per element:
//!
//! - arithmetic scalars feed a compensated [`Sum`] and come back as `f64`,
//!   even when the grid's native cells are narrow integer counts —
//!   compensated summation needs floating accumulation, and user-facing
//!   totals must tolerate fractional weighted fills;
//! - self-describing cells ([`Sum`], [`WeightedSum`], anything with its own
//!   merge semantics) combine through their own addition and come back as
//!   the cell type itself, so per-cell statistics such as variance survive
//!   the reduction.
//!
//! NaN and infinity propagate per IEEE semantics; the reduction never
//! raises.

use crate::grid::Grid;
use crate::sum::Sum;
use crate::weighted::WeightedSum;
use std::ops::AddAssign;

/// A type usable as a grid cell, with its accumulation strategy chosen at
/// the type level.
pub trait CellValue: Sized {
    /// The accumulator the reduction uses for this cell type.
    type Accum: CellAccum<Self>;
}

/// An accumulation strategy over cells of type `C`.
pub trait CellAccum<C>: Default {
    /// The reduction's result type.
    type Total;

    /// Fold one cell into the running accumulation.
    fn put(&mut self, cell: &C);

    /// Finish and produce the total.
    fn finish(self) -> Self::Total;
}

/// An arithmetic scalar cell, widened to `f64` for accumulation.
pub trait ArithmeticCell: Copy {
    /// The cell's value as `f64`.
    fn as_f64(self) -> f64;
}

macro_rules! arithmetic_cell {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ArithmeticCell for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }

            impl CellValue for $t {
                type Accum = ScalarAccum;
            }
        )+
    };
}

arithmetic_cell!(f32, f64, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Compensated scalar accumulation for arithmetic cells.
#[derive(Debug, Default)]
pub struct ScalarAccum(Sum);

impl<C: ArithmeticCell> CellAccum<C> for ScalarAccum {
    type Total = f64;

    #[inline]
    fn put(&mut self, cell: &C) {
        self.0 += cell.as_f64();
    }

    fn finish(self) -> f64 {
        self.0.value()
    }
}

/// Cell-native accumulation for self-describing cells: combines with the
/// cell's own addition and returns the cell type unchanged.
#[derive(Debug, Default)]
pub struct NativeAccum<C>(C);

impl<C> CellAccum<C> for NativeAccum<C>
where
    C: Default + for<'a> AddAssign<&'a C>,
{
    type Total = C;

    #[inline]
    fn put(&mut self, cell: &C) {
        self.0 += cell;
    }

    fn finish(self) -> C {
        self.0
    }
}

impl CellValue for Sum {
    type Accum = NativeAccum<Sum>;
}

impl CellValue for WeightedSum {
    type Accum = NativeAccum<WeightedSum>;
}

/// Result type of [`sum`] for a grid with cells of type `C`.
pub type CellTotal<C> = <<C as CellValue>::Accum as CellAccum<C>>::Total;

/// Total the contents of every cell in `grid`.
///
/// One sequential pass in the grid's own traversal order. The result type
/// follows from the cell type: `f64` for arithmetic cells, the cell type
/// itself for self-describing accumulator cells.
pub fn sum<G>(grid: &G) -> CellTotal<G::Cell>
where
    G: Grid,
    G::Cell: CellValue,
{
    let mut accum = <G::Cell as CellValue>::Accum::default();
    for cell in grid.cells() {
        accum.put(cell);
    }
    log::trace!("summed {} cells", grid.num_cells());
    accum.finish()
}
