//! Anchor/focus selection state.

use crate::cell::{CellRect, CellRef};
use crate::surface::TableSurface;

/// The two corners of a selection. Existing only as a pair keeps
/// "both set or both unset" structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Corners {
    anchor: CellRef,
    focus: CellRef,
}

/// Current rectangular selection plus the drag-session flags.
///
/// `dragging` and `selecting` are separate flags: a finished drag leaves
/// `selecting` set with `dragging` cleared.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    corners: Option<Corners>,
    dragging: bool,
    selecting: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new selection at `cell`, dropping any native text selection.
    pub fn start(&mut self, cell: CellRef, surface: &mut dyn TableSurface) {
        surface.clear_native_selection();
        self.corners = Some(Corners {
            anchor: cell,
            focus: cell,
        });
        self.selecting = true;
        log::debug!("[selection] started at {}", cell);
    }

    /// Move the focus to `cell`.
    /// Returns true if the focus was updated; targets that are not data
    /// cells, or a missing anchor, leave the selection untouched.
    pub fn extend(&mut self, cell: CellRef, surface: &dyn TableSurface) -> bool {
        let Some(corners) = self.corners.as_mut() else {
            return false;
        };
        if !surface.is_data_cell(cell) {
            return false;
        }
        corners.focus = cell;
        true
    }

    /// Set both corners directly.
    pub fn set(&mut self, anchor: CellRef, focus: CellRef) {
        self.corners = Some(Corners { anchor, focus });
    }

    /// Drop the selection and both flags.
    pub fn clear(&mut self) {
        self.corners = None;
        self.dragging = false;
        self.selecting = false;
    }

    pub fn anchor(&self) -> Option<CellRef> {
        self.corners.map(|c| c.anchor)
    }

    pub fn focus(&self) -> Option<CellRef> {
        self.corners.map(|c| c.focus)
    }

    pub fn has_selection(&self) -> bool {
        self.corners.is_some()
    }

    /// Normalized rectangle between anchor and focus, recomputed every call.
    pub fn rect(&self) -> Option<CellRect> {
        self.corners.map(|c| CellRect::spanning(c.anchor, c.focus))
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn set_selecting(&mut self, selecting: bool) {
        self.selecting = selecting;
    }
}
