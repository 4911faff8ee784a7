//! Spreadsheet-style interactions for tables: rectangular cell selection
//! with keyboard navigation, edge autoscroll and clipboard export, plus
//! drag-and-drop column reordering.
//!
//! The crate owns the state machines; a host supplies the table, viewport,
//! timer and clipboard through the traits in [`surface`], [`host`] and
//! [`clipboard`], then feeds its events to [`Tableex::dispatch`].

pub mod autoscroll;
pub mod box_select;
pub mod cell;
pub mod clipboard;
pub mod config;
pub mod dispatch;
pub mod event;
pub mod grid;
pub mod highlight;
pub mod host;
pub mod keyboard;
pub mod reorder;
pub mod selection;
pub mod surface;

pub use autoscroll::{AutoscrollController, ScrollDecision, ScrollDirection};
pub use box_select::BoxSelector;
pub use cell::{CellRect, CellRef};
pub use clipboard::{ClipboardError, ClipboardSink};
pub use config::{AutoscrollConfig, TableexConfig};
pub use dispatch::Tableex;
pub use event::{EventResult, Key, Modifiers, TableEvent};
pub use grid::{GridCell, GridSurface};
pub use host::{HostContext, ScrollTimer, Viewport};
pub use keyboard::NavDirection;
pub use reorder::ColumnReorder;
pub use selection::SelectionState;
pub use surface::{CellKind, TableSurface};
