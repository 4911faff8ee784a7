//! Drag-and-drop column reordering on header cells.

use crate::cell::CellRef;
use crate::event::EventResult;
use crate::surface::TableSurface;

/// Shift `items[from]` to `to`, moving everything in between one place
/// towards `from`. Out-of-range indices leave `items` untouched.
pub fn rotate<T>(items: &mut [T], from: usize, to: usize) {
    if from.max(to) >= items.len() {
        return;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else if from > to {
        items[to..=from].rotate_right(1);
    }
}

/// Move the content of column `from` to column `to` in every row.
///
/// Only content travels; each cell keeps its kind and marker. Rows too short
/// to hold both columns are left alone.
pub fn move_column(surface: &mut dyn TableSurface, from: usize, to: usize) {
    if from == to {
        return;
    }
    let hi = from.max(to);
    for row in 0..surface.row_count() {
        if surface.cell_count(row) <= hi {
            log::debug!("[reorder] row {} has no column {}, skipped", row, hi);
            continue;
        }
        let mut contents: Vec<String> = (0..=hi)
            .map(|col| surface.content(CellRef::new(row, col)).unwrap_or_default())
            .collect();
        rotate(&mut contents, from, to);

        let lo = from.min(to);
        for (col, content) in contents.into_iter().enumerate().skip(lo) {
            surface.set_content(CellRef::new(row, col), content);
        }
    }
}

/// Remembers which header a column drag started on.
#[derive(Debug, Clone, Default)]
pub struct ColumnReorder {
    dragged: Option<CellRef>,
}

impl ColumnReorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header the current drag started on.
    pub fn dragged(&self) -> Option<CellRef> {
        self.dragged
    }

    pub fn on_drag_start(&mut self, target: Option<CellRef>, surface: &dyn TableSurface) -> EventResult {
        match target {
            Some(cell) if surface.is_header_cell(cell) => {
                self.dragged = Some(cell);
                log::debug!("[reorder] drag from column {}", cell.col);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Headers have to refuse the default drag-over handling to accept drops.
    pub fn on_drag_over(&self, target: Option<CellRef>, surface: &dyn TableSurface) -> EventResult {
        match target {
            Some(cell) if surface.is_header_cell(cell) => EventResult::DefaultPrevented,
            _ => EventResult::Ignored,
        }
    }

    pub fn on_drop(&mut self, target: Option<CellRef>, surface: &mut dyn TableSurface) -> EventResult {
        let Some(cell) = target.filter(|c| surface.is_header_cell(*c)) else {
            return EventResult::Ignored;
        };
        let Some(source) = self.dragged.take() else {
            return EventResult::DefaultPrevented;
        };

        if source.col == cell.col {
            return EventResult::DefaultPrevented;
        }
        log::debug!("[reorder] moving column {} to {}", source.col, cell.col);
        move_column(surface, source.col, cell.col);
        EventResult::DefaultPrevented
    }

    /// A drag that never reached a header leaves nothing behind.
    pub fn on_drag_end(&mut self) -> EventResult {
        if self.dragged.take().is_some() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}
