//! Full-table repaint of the selected marker.

use crate::cell::{CellRect, CellRef};
use crate::surface::TableSurface;

/// Mark every data cell inside `rect` as selected and every other data cell
/// as not. With `None` every data cell is unmarked.
///
/// The whole table is walked each time; no previous highlight is tracked.
pub fn repaint(surface: &mut dyn TableSurface, rect: Option<CellRect>) {
    for row in 0..surface.row_count() {
        for col in 0..surface.cell_count(row) {
            let cell = CellRef::new(row, col);
            if !surface.is_data_cell(cell) {
                continue;
            }
            let selected = rect.is_some_and(|r| r.contains(cell));
            surface.set_selected(cell, selected);
        }
    }
}

/// Remove the selected marker from every data cell.
pub fn clear(surface: &mut dyn TableSurface) {
    repaint(surface, None);
}
