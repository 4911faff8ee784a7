//! Turns raw crossterm mouse reports into click and drag events.
//!
//! The terminal only reports press, motion-with-button and release, so a
//! press followed by motion becomes a drag, and a press released without
//! motion becomes a click.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tableex::{CellRef, TableEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Press {
    source: Option<CellRef>,
    dragging: bool,
    /// Cell the drag last entered.
    entered: Option<CellRef>,
    /// Screen position of the last drag report.
    position: (u16, u16),
}

impl Press {
    fn drag_to(&mut self, target: Option<CellRef>, events: &mut Vec<TableEvent>) {
        if self.entered != target {
            self.entered = target;
            events.push(TableEvent::DragEnter { target });
        }
        events.push(TableEvent::DragOver {
            target,
            x: self.position.0 as f64,
            y: self.position.1 as f64,
        });
    }
}

/// Pointer gesture state between press and release.
#[derive(Debug, Default)]
pub struct PointerTracker {
    press: Option<Press>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.dragging)
    }

    /// Where the pointer last was during a drag.
    pub fn drag_position(&self) -> Option<(u16, u16)> {
        self.press.filter(|p| p.dragging).map(|p| p.position)
    }

    /// Re-report a still pointer that now sits over `target` because the
    /// table scrolled underneath it.
    pub fn hover(&mut self, target: Option<CellRef>) -> Vec<TableEvent> {
        let mut events = Vec::new();
        if let Some(press) = self.press.as_mut().filter(|p| p.dragging) {
            press.drag_to(target, &mut events);
        }
        events
    }

    /// Translate one mouse report whose position resolved to `target`.
    pub fn translate(&mut self, mouse: &MouseEvent, target: Option<CellRef>) -> Vec<TableEvent> {
        let mut events = Vec::new();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = Some(Press {
                    source: target,
                    dragging: false,
                    entered: None,
                    position: (mouse.column, mouse.row),
                });
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(press) = self.press.as_mut() else {
                    return events;
                };
                if !press.dragging {
                    press.dragging = true;
                    events.push(TableEvent::DragStart {
                        target: press.source,
                    });
                }
                press.position = (mouse.column, mouse.row);
                press.drag_to(target, &mut events);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(press) = self.press.take() else {
                    return events;
                };
                if press.dragging {
                    events.push(TableEvent::Drop { target });
                    events.push(TableEvent::DragEnd {
                        source: press.source,
                    });
                } else {
                    events.push(TableEvent::Click { target });
                }
            }
            _ => {}
        }
        events
    }
}
