//! Visited-cell ledger for one in-progress search path.
//!
//! A single `u64` bitmap covers the whole board; this is why
//! [`MAX_BOARD_CELLS`](crate::board::MAX_BOARD_CELLS) is 64. The searcher
//! marks a cell on the way down and clears it on the way back up, so at any
//! moment the set bits are exactly the cells of the current path.

/// Bitmap over `rows * cols` cells, indexed `row * cols + col`.
#[derive(Debug, Clone)]
pub(crate) struct Ledger {
    cols: usize,
    bits: u64,
}

impl Ledger {
    pub(crate) fn new(cols: usize) -> Ledger {
        Ledger { cols, bits: 0 }
    }

    #[inline]
    fn point(&self, row: usize, col: usize) -> u64 {
        1 << (row * self.cols + col)
    }

    #[inline]
    pub(crate) fn mark(&mut self, row: usize, col: usize) {
        self.bits |= self.point(row, col);
    }

    #[inline]
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.bits &= !self.point(row, col);
    }

    #[inline]
    pub(crate) fn check(&self, row: usize, col: usize) -> bool {
        self.bits & self.point(row, col) != 0
    }
}
