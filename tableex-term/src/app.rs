//! The terminal host: owns the table and drives the core from crossterm
//! events and the autoscroll timer.

use std::io;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use crossterm::terminal;
use futures::StreamExt;
use log::{debug, info};
use tableex::{
    AutoscrollConfig, EventResult, GridSurface, HostContext, Key, Modifiers, NavDirection, TableEvent, TableSurface,
    Tableex, TableexConfig, Viewport,
};

use crate::cli::Cli;
use crate::clipboard::TermClipboard;
use crate::error::TermError;
use crate::input::PointerTracker;
use crate::render;
use crate::terminal::TerminalGuard;
use crate::timer::IntervalTimer;
use crate::viewport::TermViewport;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    grid: GridSurface,
    viewport: TermViewport,
    timer: IntervalTimer,
    clipboard: TermClipboard,
    tableex: Tableex,
    pointer: PointerTracker,
}

impl App {
    pub fn new(cli: &Cli) -> Result<Self, TermError> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(cli, width, height))
    }

    fn with_size(cli: &Cli, width: u16, height: u16) -> Self {
        let mut grid = GridSurface::demo(cli.rows, cli.cols);
        let viewport = TermViewport::new(width, height, cli.cols, cli.rows);

        let mut config = TableexConfig::new().autoscroll(
            AutoscrollConfig::default()
                .scroll_speed(cli.scroll_speed)
                .scroll_speed_multiplier(cli.scroll_multiplier)
                .thresholds(cli.outer_threshold, cli.inner_threshold)
                .tick(Duration::from_millis(cli.scroll_tick_ms)),
        );
        config.box_selectable = !cli.no_box_select;
        config.column_resortable = !cli.no_column_resort;
        let tableex = Tableex::init(&config, &mut grid);

        let clipboard = if cli.osc52 {
            TermClipboard::osc52()
        } else {
            TermClipboard::detect()
        };

        Self {
            grid,
            viewport,
            timer: IntervalTimer::new(),
            clipboard,
            tableex,
            pointer: PointerTracker::new(),
        }
    }

    pub async fn run(&mut self) -> Result<(), TermError> {
        let _guard = TerminalGuard::new()?;
        let mut stdout = io::stdout();
        let mut events = EventStream::new();
        let mut dirty = true;
        info!("Table {}x{} ready", self.grid.row_count(), self.grid.column_count());

        loop {
            if dirty {
                render::draw(&mut stdout, &self.grid, &self.viewport, &self.status())?;
                dirty = false;
            }

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle(event) == Flow::Quit {
                                info!("Quit requested");
                                break;
                            }
                            dirty = true;
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }
                _ = self.timer.tick() => {
                    dirty = self.scroll_tick();
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: CrosstermEvent) -> Flow {
        match event {
            CrosstermEvent::Key(key) => return self.handle_key(key),
            CrosstermEvent::Mouse(mouse) => self.handle_mouse(mouse),
            CrosstermEvent::Resize(width, height) => {
                debug!("Resize to {}x{}", width, height);
                self.viewport.resize(width, height);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_key(&mut self, event: KeyEvent) -> Flow {
        if event.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        let key = Key::from(event.code);
        let modifiers = Modifiers::from(event.modifiers);
        if matches!(key, Key::Char('q') | Key::Escape) && modifiers.none() {
            return Flow::Quit;
        }

        let result = self.dispatch(TableEvent::Key { key, modifiers });
        if !result.is_ignored() && NavDirection::from_key(key).is_some() {
            let focus = self
                .tableex
                .box_selector()
                .and_then(|s| s.selection().focus());
            if let Some(focus) = focus {
                self.viewport.ensure_visible(focus);
            }
        }
        Flow::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.viewport.scroll_by(0.0, -WHEEL_STEP),
            MouseEventKind::ScrollDown => self.viewport.scroll_by(0.0, WHEEL_STEP),
            MouseEventKind::ScrollLeft => self.viewport.scroll_by(-WHEEL_STEP, 0.0),
            MouseEventKind::ScrollRight => self.viewport.scroll_by(WHEEL_STEP, 0.0),
            _ => {
                let target = self.viewport.cell_at(mouse.column, mouse.row, &self.grid);
                for event in self.pointer.translate(&mouse, target) {
                    self.dispatch(event);
                }
            }
        }
    }

    /// One autoscroll tick. A held pointer sends no mouse reports, so the
    /// cell now scrolled under it is fed back as a drag.
    fn scroll_tick(&mut self) -> bool {
        if self.dispatch(TableEvent::ScrollTick).is_ignored() {
            return false;
        }
        if let Some((x, y)) = self.pointer.drag_position() {
            let target = self.viewport.cell_at(x, y, &self.grid);
            for event in self.pointer.hover(target) {
                self.dispatch(event);
            }
        }
        true
    }

    fn dispatch(&mut self, event: TableEvent) -> EventResult {
        let mut cx = HostContext::new(
            &mut self.grid,
            &mut self.viewport,
            &mut self.timer,
            &mut self.clipboard,
        );
        self.tableex.dispatch(event, &mut cx)
    }

    fn status(&self) -> String {
        let selection = self
            .tableex
            .box_selector()
            .and_then(|s| s.selection().rect())
            .map(|r| {
                format!(
                    " {}x{} at ({}, {})",
                    r.row_count(),
                    r.col_count(),
                    r.top,
                    r.left
                )
            })
            .unwrap_or_else(|| " none".to_string());
        let dragging = if self.pointer.is_dragging() { " [drag]" } else { "" };
        let scrolling = if self.timer.is_running() { " [autoscroll]" } else { "" };
        format!(
            " selection:{}{}{} | drag cells to select, headers to reorder | arrows/shift/ctrl, ctrl+c copy, q quit",
            selection, dragging, scrolling
        )
    }
}
