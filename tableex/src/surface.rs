//! The table rendering surface the core reads from and paints onto.

use crate::cell::CellRef;

/// What a cell is, as far as the interactions are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// A column header (`th`). Drag source and drop target for reordering.
    Header,
    /// A body cell (`td`). Selectable.
    Data,
}

/// A materialized table: ordered rows of ordered cells.
///
/// Indices are read from the surface every time they are needed, so a host
/// that restructures the table between events simply presents the new shape.
pub trait TableSurface {
    /// Number of rows, header rows included.
    fn row_count(&self) -> usize;

    /// Number of cells in `row`, zero if the row does not exist.
    fn cell_count(&self, row: usize) -> usize;

    /// Kind of the cell at `cell`, `None` if there is no such cell.
    fn cell_kind(&self, cell: CellRef) -> Option<CellKind>;

    /// Plain text content of a cell (no markup).
    fn text(&self, cell: CellRef) -> Option<String>;

    /// Raw content of a cell, markup included.
    fn content(&self, cell: CellRef) -> Option<String>;

    /// Replace the raw content of a cell. Other cell state is untouched.
    fn set_content(&mut self, cell: CellRef, content: String);

    /// Toggle the visual "selected" marker of a cell.
    fn set_selected(&mut self, cell: CellRef, selected: bool);

    /// Drop any native text selection the host may be showing.
    fn clear_native_selection(&mut self) {}

    /// Stop the host from starting native text selections on data cells.
    fn disable_native_selection(&mut self) {}

    /// Check whether `cell` is an existing data cell.
    fn is_data_cell(&self, cell: CellRef) -> bool {
        self.cell_kind(cell) == Some(CellKind::Data)
    }

    /// Check whether `cell` is an existing header cell.
    fn is_header_cell(&self, cell: CellRef) -> bool {
        self.cell_kind(cell) == Some(CellKind::Header)
    }
}
