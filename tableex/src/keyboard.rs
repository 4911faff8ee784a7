//! Arrow-key navigation over data cells.

use crate::cell::CellRef;
use crate::event::{Key, Modifiers};
use crate::selection::SelectionState;
use crate::surface::TableSurface;

/// Direction of an arrow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NavDirection {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Up => Some(NavDirection::Up),
            Key::Down => Some(NavDirection::Down),
            Key::Left => Some(NavDirection::Left),
            Key::Right => Some(NavDirection::Right),
            _ => None,
        }
    }
}

/// What a key press means to the box selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Navigate {
        direction: NavDirection,
        /// Move only the focus, keeping the anchor.
        extend: bool,
        /// Run to the last cell in the direction.
        jump: bool,
    },
    Copy,
}

impl KeyCommand {
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        if let Some(direction) = NavDirection::from_key(key) {
            return Some(KeyCommand::Navigate {
                direction,
                extend: modifiers.shift,
                jump: modifiers.ctrl,
            });
        }
        match key {
            Key::Char('c') if modifiers.ctrl => Some(KeyCommand::Copy),
            _ => None,
        }
    }
}

/// The data cell adjacent to `cell` in `direction`, if there is one.
pub fn adjacent(surface: &dyn TableSurface, cell: CellRef, direction: NavDirection) -> Option<CellRef> {
    let next = match direction {
        NavDirection::Up => CellRef::new(cell.row.checked_sub(1)?, cell.col),
        NavDirection::Down => CellRef::new(cell.row + 1, cell.col),
        NavDirection::Left => CellRef::new(cell.row, cell.col.checked_sub(1)?),
        NavDirection::Right => CellRef::new(cell.row, cell.col + 1),
    };
    surface.is_data_cell(next).then_some(next)
}

/// One step in `direction`, staying put at the edge.
pub fn next_cell(surface: &dyn TableSurface, cell: CellRef, direction: NavDirection) -> CellRef {
    adjacent(surface, cell, direction).unwrap_or(cell)
}

/// Repeat single steps until the cell stops changing.
pub fn terminal_cell(surface: &dyn TableSurface, cell: CellRef, direction: NavDirection) -> CellRef {
    let mut current = cell;
    loop {
        let next = next_cell(surface, current, direction);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Apply an arrow key to the selection.
///
/// Without `extend` both corners collapse onto the cell next to the anchor;
/// with it only the focus moves. Returns false if there is no selection to
/// move.
pub fn navigate(
    selection: &mut SelectionState,
    surface: &dyn TableSurface,
    direction: NavDirection,
    extend: bool,
    jump: bool,
) -> bool {
    let (Some(anchor), Some(focus)) = (selection.anchor(), selection.focus()) else {
        return false;
    };
    let mover = if jump { terminal_cell } else { next_cell };

    if extend {
        let focus = mover(surface, focus, direction);
        selection.set(anchor, focus);
    } else {
        let cell = mover(surface, anchor, direction);
        selection.set(cell, cell);
    }
    log::debug!(
        "[keyboard] {:?} extend={} jump={} -> anchor {:?}, focus {:?}",
        direction,
        extend,
        jump,
        selection.anchor(),
        selection.focus()
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSurface;

    #[test]
    fn test_adjacent_stays_in_data_cells() {
        let grid = GridSurface::demo(3, 3);
        // Row 1 is the first body row; row 0 holds headers.
        assert_eq!(adjacent(&grid, CellRef::new(1, 1), NavDirection::Up), None);
        assert_eq!(adjacent(&grid, CellRef::new(3, 1), NavDirection::Down), None);
        assert_eq!(adjacent(&grid, CellRef::new(2, 0), NavDirection::Left), None);
        assert_eq!(adjacent(&grid, CellRef::new(2, 2), NavDirection::Right), None);
        assert_eq!(
            adjacent(&grid, CellRef::new(2, 1), NavDirection::Up),
            Some(CellRef::new(1, 1))
        );
    }

    #[test]
    fn test_terminal_cell() {
        let grid = GridSurface::demo(5, 4);
        let start = CellRef::new(3, 2);
        assert_eq!(terminal_cell(&grid, start, NavDirection::Up), CellRef::new(1, 2));
        assert_eq!(terminal_cell(&grid, start, NavDirection::Down), CellRef::new(5, 2));
        assert_eq!(terminal_cell(&grid, start, NavDirection::Left), CellRef::new(3, 0));
        assert_eq!(terminal_cell(&grid, start, NavDirection::Right), CellRef::new(3, 3));
    }

    /// Counts cell lookups made through it.
    struct Counting {
        grid: GridSurface,
        lookups: std::cell::Cell<usize>,
    }

    impl TableSurface for Counting {
        fn row_count(&self) -> usize {
            self.grid.row_count()
        }

        fn cell_count(&self, row: usize) -> usize {
            self.grid.cell_count(row)
        }

        fn cell_kind(&self, cell: CellRef) -> Option<crate::surface::CellKind> {
            self.lookups.set(self.lookups.get() + 1);
            self.grid.cell_kind(cell)
        }

        fn text(&self, cell: CellRef) -> Option<String> {
            self.grid.text(cell)
        }

        fn content(&self, cell: CellRef) -> Option<String> {
            self.grid.content(cell)
        }

        fn set_content(&mut self, cell: CellRef, content: String) {
            self.grid.set_content(cell, content);
        }

        fn set_selected(&mut self, cell: CellRef, selected: bool) {
            self.grid.set_selected(cell, selected);
        }
    }

    #[test]
    fn test_terminal_cell_steps_are_bounded() {
        let surface = Counting {
            grid: GridSurface::demo(40, 7),
            lookups: std::cell::Cell::new(0),
        };
        let bound = surface.row_count().max(7);

        let end = terminal_cell(&surface, CellRef::new(1, 3), NavDirection::Down);
        assert_eq!(end, CellRef::new(40, 3));
        assert!(surface.lookups.get() <= bound, "{} lookups", surface.lookups.get());

        surface.lookups.set(0);
        let end = terminal_cell(&surface, CellRef::new(20, 0), NavDirection::Right);
        assert_eq!(end, CellRef::new(20, 6));
        assert!(surface.lookups.get() <= bound, "{} lookups", surface.lookups.get());
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(
            KeyCommand::from_key(Key::Left, Modifiers::ctrl_shift()),
            Some(KeyCommand::Navigate {
                direction: NavDirection::Left,
                extend: true,
                jump: true,
            })
        );
        assert_eq!(KeyCommand::from_key(Key::Char('c'), Modifiers::ctrl()), Some(KeyCommand::Copy));
        assert_eq!(KeyCommand::from_key(Key::Char('c'), Modifiers::new()), None);
        assert_eq!(KeyCommand::from_key(Key::Enter, Modifiers::new()), None);
    }

    #[test]
    fn test_navigate_without_selection() {
        let grid = GridSurface::demo(3, 3);
        let mut sel = SelectionState::new();
        assert!(!navigate(&mut sel, &grid, NavDirection::Down, false, false));
        assert!(!sel.has_selection());
    }
}
