//! Cell references and the normalized selection rectangle.

use std::ops::RangeInclusive;

/// Position of a cell in the table grid.
///
/// `row` counts every row of the table (header rows included), `col` is the
/// position of the cell within its row. Both are zero-based and derived from
/// the surface's current structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Row and column ranges spanned by two corner cells, smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl CellRect {
    /// Build the rectangle spanned by `a` and `b`, in either screen direction.
    pub fn spanning(a: CellRef, b: CellRef) -> Self {
        Self {
            top: a.row.min(b.row),
            bottom: a.row.max(b.row),
            left: a.col.min(b.col),
            right: a.col.max(b.col),
        }
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.top..=self.bottom
    }

    pub fn cols(&self) -> RangeInclusive<usize> {
        self.left..=self.right
    }

    pub fn row_count(&self) -> usize {
        self.bottom - self.top + 1
    }

    pub fn col_count(&self) -> usize {
        self.right - self.left + 1
    }

    /// Check if a cell lies inside the rectangle (edges inclusive).
    pub fn contains(&self, cell: CellRef) -> bool {
        self.rows().contains(&cell.row) && self.cols().contains(&cell.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanning_orders_corners() {
        let rect = CellRect::spanning(CellRef::new(3, 2), CellRef::new(1, 1));
        assert_eq!(rect.rows(), 1..=3);
        assert_eq!(rect.cols(), 1..=2);

        let flipped = CellRect::spanning(CellRef::new(1, 2), CellRef::new(3, 1));
        assert_eq!(flipped, rect);
    }

    #[test]
    fn test_spanning_always_min_before_max() {
        for (ar, ac, fr, fc) in [(0, 0, 5, 5), (5, 5, 0, 0), (0, 5, 5, 0), (2, 2, 2, 2)] {
            let rect = CellRect::spanning(CellRef::new(ar, ac), CellRef::new(fr, fc));
            assert!(rect.top <= rect.bottom);
            assert!(rect.left <= rect.right);
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = CellRect::spanning(CellRef::new(1, 1), CellRef::new(2, 3));
        assert!(rect.contains(CellRef::new(1, 1)));
        assert!(rect.contains(CellRef::new(2, 3)));
        assert!(!rect.contains(CellRef::new(0, 1)));
        assert!(!rect.contains(CellRef::new(2, 4)));
        assert_eq!(rect.row_count(), 2);
        assert_eq!(rect.col_count(), 3);
    }
}
