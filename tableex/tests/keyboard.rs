mod common;

use common::{cell, Harness};
use tableex::{EventResult, Key, Modifiers};

// ============================================================================
// Plain Arrows
// ============================================================================

#[test]
fn test_arrows_move_one_axis_by_one() {
    let moves = [
        (Key::Up, cell(2, 2)),
        (Key::Down, cell(4, 2)),
        (Key::Left, cell(3, 1)),
        (Key::Right, cell(3, 3)),
    ];
    for (key, expected) in moves {
        let mut h = Harness::demo(5, 5);
        h.click(3, 2);
        assert_eq!(h.key(key, Modifiers::new()), EventResult::Consumed);
        assert_eq!(h.anchor(), Some(expected));
        assert_eq!(h.focus(), Some(expected));
        assert_eq!(h.grid.selected_cells(), vec![expected]);
    }
}

#[test]
fn test_arrow_collapses_onto_anchor_neighbor() {
    let mut h = Harness::demo(5, 5);
    h.drag(cell(2, 2), cell(4, 4));
    h.key(Key::Right, Modifiers::new());

    assert_eq!(h.anchor(), Some(cell(2, 3)));
    assert_eq!(h.focus(), Some(cell(2, 3)));
}

#[test]
fn test_arrow_at_edge_stays() {
    let mut h = Harness::demo(3, 3);
    h.click(1, 0);
    h.key(Key::Up, Modifiers::new());
    assert_eq!(h.anchor(), Some(cell(1, 0)));
    h.key(Key::Left, Modifiers::new());
    assert_eq!(h.anchor(), Some(cell(1, 0)));

    h.click(3, 2);
    h.key(Key::Down, Modifiers::new());
    h.key(Key::Right, Modifiers::new());
    assert_eq!(h.anchor(), Some(cell(3, 2)));
}

#[test]
fn test_arrow_without_selection_ignored() {
    let mut h = Harness::demo(3, 3);
    assert_eq!(h.key(Key::Down, Modifiers::new()), EventResult::Ignored);
    assert_eq!(h.anchor(), None);
}

// ============================================================================
// Shift / Ctrl
// ============================================================================

#[test]
fn test_shift_extends_focus() {
    let mut h = Harness::demo(5, 5);
    h.click(2, 2);
    h.key(Key::Down, Modifiers::shift());
    h.key(Key::Right, Modifiers::shift());

    assert_eq!(h.anchor(), Some(cell(2, 2)));
    assert_eq!(h.focus(), Some(cell(3, 3)));
    assert_eq!(h.grid.selected_cells().len(), 4);
}

#[test]
fn test_shift_can_cross_anchor() {
    let mut h = Harness::demo(5, 5);
    h.click(3, 3);
    h.key(Key::Up, Modifiers::shift());
    h.key(Key::Up, Modifiers::shift());

    assert_eq!(h.anchor(), Some(cell(3, 3)));
    assert_eq!(h.focus(), Some(cell(1, 3)));
    assert_eq!(
        h.grid.selected_cells(),
        vec![cell(1, 3), cell(2, 3), cell(3, 3)]
    );
}

#[test]
fn test_ctrl_jumps_to_terminal_cell() {
    let mut h = Harness::demo(6, 4);
    h.click(3, 1);
    h.key(Key::Down, Modifiers::ctrl());
    assert_eq!(h.anchor(), Some(cell(6, 1)));
    assert_eq!(h.focus(), Some(cell(6, 1)));

    h.key(Key::Right, Modifiers::ctrl());
    assert_eq!(h.anchor(), Some(cell(6, 3)));
}

#[test]
fn test_ctrl_jump_is_idempotent() {
    let mut h = Harness::demo(6, 4);
    h.click(3, 1);
    h.key(Key::Up, Modifiers::ctrl());
    let first = h.anchor();
    h.key(Key::Up, Modifiers::ctrl());
    h.key(Key::Up, Modifiers::ctrl());
    assert_eq!(h.anchor(), first);
    assert_eq!(first, Some(cell(1, 1)));
}

#[test]
fn test_ctrl_shift_extends_focus_only() {
    let mut h = Harness::demo(6, 4);
    h.click(3, 1);
    h.key(Key::Left, Modifiers::ctrl_shift());
    h.key(Key::Down, Modifiers::ctrl_shift());

    assert_eq!(h.anchor(), Some(cell(3, 1)));
    assert_eq!(h.focus(), Some(cell(6, 0)));
    assert_eq!(h.grid.selected_cells().len(), 8);
}

#[test]
fn test_other_keys_ignored() {
    let mut h = Harness::demo(3, 3);
    h.click(2, 2);
    assert_eq!(h.key(Key::Enter, Modifiers::new()), EventResult::Ignored);
    assert_eq!(h.key(Key::Char('x'), Modifiers::ctrl()), EventResult::Ignored);
    assert_eq!(h.anchor(), Some(cell(2, 2)));
}
