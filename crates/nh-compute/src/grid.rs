//! The cell-container contract.
//!
//! A grid is an abstract multi-dimensional container of cell values. The
//! only obligation is full forward traversal: every cell visited exactly
//! once, in an order the implementation chooses (dense storages typically
//! flatten row-major). Callers must not rely on a particular order.

/// An abstract container of histogram cells.
pub trait Grid {
    /// The cell value type.
    type Cell;

    /// Total number of cells.
    fn num_cells(&self) -> usize;

    /// Iterate over every cell exactly once.
    fn cells(&self) -> impl Iterator<Item = &Self::Cell> + '_;
}

impl<C> Grid for Vec<C> {
    type Cell = C;

    fn num_cells(&self) -> usize {
        self.len()
    }

    fn cells(&self) -> impl Iterator<Item = &C> + '_ {
        self.iter()
    }
}

impl<C, const N: usize> Grid for [C; N] {
    type Cell = C;

    fn num_cells(&self) -> usize {
        N
    }

    fn cells(&self) -> impl Iterator<Item = &C> + '_ {
        self.iter()
    }
}

impl<'a, C> Grid for &'a [C] {
    type Cell = C;

    fn num_cells(&self) -> usize {
        self.len()
    }

    fn cells(&self) -> impl Iterator<Item = &C> + '_ {
        self.iter()
    }
}
