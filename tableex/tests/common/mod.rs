#![allow(dead_code)]

use std::time::Duration;

use tableex::{
    CellRef, ClipboardError, ClipboardSink, EventResult, GridSurface, HostContext, Key, Modifiers,
    ScrollTimer, TableEvent, Tableex, TableexConfig, Viewport,
};

/// Viewport that records every scroll.
#[derive(Debug, Default)]
pub struct FakeViewport {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub scrolls: Vec<(f64, f64)>,
}

impl FakeViewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl Viewport for FakeViewport {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        self.scrolls.push((dx, dy));
    }
}

/// Timer that only records start/cancel calls.
#[derive(Debug, Default)]
pub struct FakeTimer {
    pub period: Option<Duration>,
    pub starts: usize,
    pub cancels: usize,
}

impl FakeTimer {
    pub fn running(&self) -> bool {
        self.period.is_some()
    }
}

impl ScrollTimer for FakeTimer {
    fn start(&mut self, period: Duration) {
        assert!(self.period.is_none(), "timer started while another is running");
        self.period = Some(period);
        self.starts += 1;
    }

    fn cancel(&mut self) {
        self.period = None;
        self.cancels += 1;
    }
}

/// Clipboard that keeps what it was given.
#[derive(Debug, Default)]
pub struct FakeClipboard {
    pub async_writer: bool,
    pub fail_sync: bool,
    pub async_writes: Vec<String>,
    pub sync_copies: Vec<String>,
}

impl ClipboardSink for FakeClipboard {
    fn has_async_writer(&self) -> bool {
        self.async_writer
    }

    fn write_text_async(&mut self, text: String) {
        self.async_writes.push(text);
    }

    fn copy_sync(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_sync {
            return Err(ClipboardError::Unavailable);
        }
        self.sync_copies.push(text.to_string());
        Ok(())
    }
}

/// A table plus fake host, wired to a `Tableex`.
pub struct Harness {
    pub grid: GridSurface,
    pub viewport: FakeViewport,
    pub timer: FakeTimer,
    pub clipboard: FakeClipboard,
    pub tableex: Tableex,
}

impl Harness {
    pub fn new(mut grid: GridSurface, config: TableexConfig) -> Self {
        let tableex = Tableex::init(&config, &mut grid);
        Self {
            grid,
            viewport: FakeViewport::new(1000.0, 1000.0),
            timer: FakeTimer::default(),
            clipboard: FakeClipboard {
                async_writer: true,
                ..Default::default()
            },
            tableex,
        }
    }

    /// Demo grid with every interaction enabled.
    pub fn demo(rows: usize, cols: usize) -> Self {
        Self::new(
            GridSurface::demo(rows, cols),
            TableexConfig::new().box_selectable().column_resortable(),
        )
    }

    pub fn send(&mut self, event: TableEvent) -> EventResult {
        let mut cx = HostContext::new(
            &mut self.grid,
            &mut self.viewport,
            &mut self.timer,
            &mut self.clipboard,
        );
        self.tableex.dispatch(event, &mut cx)
    }

    pub fn click(&mut self, row: usize, col: usize) -> EventResult {
        self.send(TableEvent::Click {
            target: Some(CellRef::new(row, col)),
        })
    }

    pub fn click_outside(&mut self) -> EventResult {
        self.send(TableEvent::Click { target: None })
    }

    pub fn key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        self.send(TableEvent::Key { key, modifiers })
    }

    /// Drag from `from` over each cell of `path`, without releasing.
    pub fn drag_over_cells(&mut self, from: CellRef, path: &[CellRef]) {
        self.send(TableEvent::DragStart { target: Some(from) });
        for cell in path {
            self.send(TableEvent::DragEnter { target: Some(*cell) });
            self.send(TableEvent::DragOver {
                target: Some(*cell),
                x: 500.0,
                y: 500.0,
            });
        }
    }

    /// Full drag gesture from `from` to `to`.
    pub fn drag(&mut self, from: CellRef, to: CellRef) {
        self.drag_over_cells(from, &[to]);
        self.send(TableEvent::Drop { target: Some(to) });
        self.send(TableEvent::DragEnd { source: Some(from) });
    }

    pub fn anchor(&self) -> Option<CellRef> {
        self.tableex.box_selector().and_then(|s| s.selection().anchor())
    }

    pub fn focus(&self) -> Option<CellRef> {
        self.tableex.box_selector().and_then(|s| s.selection().focus())
    }

    pub fn is_selecting(&self) -> bool {
        self.tableex
            .box_selector()
            .is_some_and(|s| s.selection().is_selecting())
    }

    pub fn is_dragging(&self) -> bool {
        self.tableex
            .box_selector()
            .is_some_and(|s| s.selection().is_dragging())
    }
}

pub fn cell(row: usize, col: usize) -> CellRef {
    CellRef::new(row, col)
}
