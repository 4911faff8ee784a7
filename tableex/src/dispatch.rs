//! Routes host events to the activated interactions.

use crate::box_select::BoxSelector;
use crate::config::TableexConfig;
use crate::event::{EventResult, TableEvent};
use crate::host::HostContext;
use crate::reorder::ColumnReorder;
use crate::surface::TableSurface;

/// The interactions attached to one table.
///
/// Both halves are optional and independent: each sees every event and
/// answers for itself.
#[derive(Debug, Clone, Default)]
pub struct Tableex {
    box_selector: Option<BoxSelector>,
    column_reorder: Option<ColumnReorder>,
}

impl Tableex {
    /// Attach the interactions `config` enables to `surface`.
    pub fn init(config: &TableexConfig, surface: &mut dyn TableSurface) -> Self {
        let box_selector = config.box_selectable.then(|| {
            let selector = BoxSelector::new(config.autoscroll.clone());
            selector.activate(surface);
            selector
        });
        let column_reorder = config.column_resortable.then(ColumnReorder::new);
        log::debug!(
            "[tableex] init box_selectable={} column_resortable={}",
            config.box_selectable,
            config.column_resortable
        );
        Self {
            box_selector,
            column_reorder,
        }
    }

    pub fn box_selector(&self) -> Option<&BoxSelector> {
        self.box_selector.as_ref()
    }

    pub fn column_reorder(&self) -> Option<&ColumnReorder> {
        self.column_reorder.as_ref()
    }

    /// Feed one host event through both interactions.
    pub fn dispatch(&mut self, event: TableEvent, cx: &mut HostContext) -> EventResult {
        let mut result = EventResult::Ignored;
        if let Some(reorder) = self.column_reorder.as_mut() {
            result = result.or(Self::dispatch_reorder(reorder, event, cx));
        }
        if let Some(selector) = self.box_selector.as_mut() {
            result = result.or(Self::dispatch_selection(selector, event, cx));
        }
        result
    }

    fn dispatch_reorder(reorder: &mut ColumnReorder, event: TableEvent, cx: &mut HostContext) -> EventResult {
        match event {
            TableEvent::DragStart { target } => reorder.on_drag_start(target, cx.surface),
            TableEvent::DragOver { target, .. } => reorder.on_drag_over(target, cx.surface),
            TableEvent::Drop { target } => reorder.on_drop(target, cx.surface),
            TableEvent::DragEnd { .. } => reorder.on_drag_end(),
            _ => EventResult::Ignored,
        }
    }

    fn dispatch_selection(selector: &mut BoxSelector, event: TableEvent, cx: &mut HostContext) -> EventResult {
        match event {
            TableEvent::Click { target } => selector.on_click(target, cx),
            TableEvent::DragStart { target } => selector.on_drag_start(target, cx),
            TableEvent::DragEnter { target } => selector.on_drag_enter(target, cx),
            TableEvent::DragOver { target, x, y } => selector.on_drag_over(target, x, y, cx),
            TableEvent::Drop { .. } => selector.on_drop(cx),
            TableEvent::DragEnd { .. } => selector.on_drag_end(cx),
            TableEvent::Key { key, modifiers } => selector.on_key(key, modifiers, cx),
            TableEvent::ScrollTick => selector.on_scroll_tick(cx),
        }
    }
}
