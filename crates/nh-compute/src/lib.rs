//! # nh-compute
//!
//! Numerically stable accumulation and grid reduction for the nhist
//! histogram stack.
//!
//! Provides:
//! - [`Sum`]: a Neumaier compensated-summation accumulator for controlled
//!   floating-point error over long additions
//! - [`WeightedSum`]: the weighted-count-plus-variance cell (the `sumw2`
//!   convention), a self-describing accumulator in its own right
//! - [`Grid`]: the cell-container contract (full forward traversal)
//! - [`sum`]: the reduction totalling a grid's cells, choosing compensated
//!   scalar summation or cell-native accumulation at the type level

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod grid;
pub mod reduce;
pub mod sum;
pub mod weighted;

pub use grid::Grid;
pub use reduce::{sum, ArithmeticCell, CellAccum, CellTotal, CellValue, NativeAccum, ScalarAccum};
pub use sum::Sum;
pub use weighted::WeightedSum;
