//! Rectangular cell selection driven by clicks, drags and the keyboard.

use crate::autoscroll::{AutoscrollController, ScrollDecision};
use crate::cell::CellRef;
use crate::clipboard::{copy_to_clipboard, selection_text};
use crate::config::AutoscrollConfig;
use crate::event::{EventResult, Key, Modifiers};
use crate::highlight;
use crate::host::HostContext;
use crate::keyboard::{self, KeyCommand};
use crate::selection::SelectionState;
use crate::surface::TableSurface;

/// Selection gestures over the data cells of one table.
#[derive(Debug, Clone, Default)]
pub struct BoxSelector {
    selection: SelectionState,
    autoscroll: AutoscrollController,
}

impl BoxSelector {
    pub fn new(config: AutoscrollConfig) -> Self {
        Self {
            selection: SelectionState::new(),
            autoscroll: AutoscrollController::new(config),
        }
    }

    /// Attach to a surface: data cells stop taking native text selections.
    pub fn activate(&self, surface: &mut dyn TableSurface) {
        surface.disable_native_selection();
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn autoscroll(&self) -> &AutoscrollController {
        &self.autoscroll
    }

    /// Text the current selection would copy, if any.
    pub fn selection_text(&self, surface: &dyn TableSurface) -> Option<String> {
        self.selection.rect().map(|rect| selection_text(surface, rect))
    }

    /// A click on a data cell selects just that cell; anywhere else resets.
    pub fn on_click(&mut self, target: Option<CellRef>, cx: &mut HostContext) -> EventResult {
        let Some(cell) = target.filter(|c| cx.surface.is_data_cell(*c)) else {
            return self.reset(cx);
        };
        self.selection.start(cell, cx.surface);
        self.selection.set_dragging(false);
        self.selection.set_selecting(true);
        highlight::repaint(cx.surface, self.selection.rect());
        EventResult::Consumed
    }

    /// A drag from a data cell starts a box selection; any other drag resets.
    pub fn on_drag_start(&mut self, target: Option<CellRef>, cx: &mut HostContext) -> EventResult {
        let Some(cell) = target.filter(|c| cx.surface.is_data_cell(*c)) else {
            return self.reset(cx);
        };
        self.selection.start(cell, cx.surface);
        self.selection.set_dragging(true);
        highlight::repaint(cx.surface, self.selection.rect());
        EventResult::Consumed
    }

    pub fn on_drag_enter(&mut self, target: Option<CellRef>, cx: &mut HostContext) -> EventResult {
        let Some(cell) = target else {
            return EventResult::Ignored;
        };
        if !self.selection.extend(cell, cx.surface) {
            return EventResult::Ignored;
        }
        highlight::repaint(cx.surface, self.selection.rect());
        EventResult::Consumed
    }

    pub fn on_drag_over(&mut self, target: Option<CellRef>, x: f64, y: f64, cx: &mut HostContext) -> EventResult {
        if !self.can_enter(target, cx.surface) || !self.selection.is_dragging() {
            return EventResult::Ignored;
        }
        match self.autoscroll.update(x, y, cx.viewport, cx.timer) {
            ScrollDecision::None => EventResult::Ignored,
            _ => EventResult::Consumed,
        }
    }

    /// The drop side of a drag only tears the scroll timer down; the
    /// selection is settled by `on_drag_end`.
    pub fn on_drop(&mut self, cx: &mut HostContext) -> EventResult {
        self.autoscroll.stop(cx.timer);
        EventResult::Ignored
    }

    pub fn on_drag_end(&mut self, cx: &mut HostContext) -> EventResult {
        self.autoscroll.stop(cx.timer);
        if !self.selection.is_dragging() {
            return EventResult::Ignored;
        }
        self.selection.set_dragging(false);
        self.selection.set_selecting(true);
        EventResult::Consumed
    }

    pub fn on_key(&mut self, key: Key, modifiers: Modifiers, cx: &mut HostContext) -> EventResult {
        match KeyCommand::from_key(key, modifiers) {
            Some(KeyCommand::Navigate {
                direction,
                extend,
                jump,
            }) => {
                if !keyboard::navigate(&mut self.selection, cx.surface, direction, extend, jump) {
                    return EventResult::Ignored;
                }
                highlight::repaint(cx.surface, self.selection.rect());
                EventResult::Consumed
            }
            Some(KeyCommand::Copy) => {
                if !self.selection.is_selecting() {
                    return EventResult::Ignored;
                }
                let Some(text) = self.selection_text(cx.surface) else {
                    return EventResult::Ignored;
                };
                copy_to_clipboard(cx.clipboard, text);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    pub fn on_scroll_tick(&mut self, cx: &mut HostContext) -> EventResult {
        if self.autoscroll.tick(cx.viewport) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Drop the selection and unmark every cell.
    pub fn reset(&mut self, cx: &mut HostContext) -> EventResult {
        self.autoscroll.stop(cx.timer);
        self.selection.clear();
        highlight::clear(cx.surface);
        log::debug!("[selection] reset");
        EventResult::Consumed
    }

    fn can_enter(&self, target: Option<CellRef>, surface: &dyn TableSurface) -> bool {
        target.is_some_and(|c| surface.is_data_cell(c)) && self.selection.has_selection()
    }
}
