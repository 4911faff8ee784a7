//! Scroll position of the table inside the terminal, and hit testing.
//!
//! Screen layout: the header row is pinned to line 0, body rows fill the
//! lines below it, and the last line is the status bar. Every column is
//! `COLUMN_WIDTH` terminal columns wide.

use tableex::{CellRef, TableSurface, Viewport};

/// Width of one table column in terminal columns, separator included.
pub const COLUMN_WIDTH: u16 = 14;

/// Lines taken by the pinned header and the status bar.
const CHROME_LINES: u16 = 2;

/// Visible window over the table, in terminal cells.
#[derive(Debug, Clone)]
pub struct TermViewport {
    width: u16,
    height: u16,
    /// Horizontal offset in terminal columns.
    x: f64,
    /// Vertical offset in body rows.
    y: f64,
    columns: usize,
    body_rows: usize,
}

impl TermViewport {
    pub fn new(width: u16, height: u16, columns: usize, body_rows: usize) -> Self {
        Self {
            width,
            height,
            x: 0.0,
            y: 0.0,
            columns,
            body_rows,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Number of body rows that fit on screen.
    pub fn visible_body_rows(&self) -> usize {
        self.height.saturating_sub(CHROME_LINES) as usize
    }

    /// Index (within the body) of the first visible body row.
    pub fn first_body_row(&self) -> usize {
        self.y as usize
    }

    /// Horizontal offset in whole terminal columns.
    pub fn first_x(&self) -> usize {
        self.x as usize
    }

    /// Line the status bar is drawn on.
    pub fn status_line(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    /// Table row shown on screen line `y`, if the line shows one.
    pub fn row_at(&self, y: u16) -> Option<usize> {
        if y == 0 {
            return Some(0);
        }
        if y >= self.status_line() {
            return None;
        }
        let body_index = self.first_body_row() + (y as usize - 1);
        (body_index < self.body_rows).then_some(body_index + 1)
    }

    /// Table cell under the screen position `(x, y)`.
    pub fn cell_at(&self, x: u16, y: u16, surface: &dyn TableSurface) -> Option<CellRef> {
        let row = self.row_at(y)?;
        let col = (self.first_x() + x as usize) / COLUMN_WIDTH as usize;
        let cell = CellRef::new(row, col);
        surface.cell_kind(cell).map(|_| cell)
    }

    /// Scroll just enough to bring `cell` on screen.
    pub fn ensure_visible(&mut self, cell: CellRef) {
        if cell.row > 0 {
            let body_index = cell.row - 1;
            let first = self.first_body_row();
            let visible = self.visible_body_rows().max(1);
            if body_index < first {
                self.y = body_index as f64;
            } else if body_index >= first + visible {
                self.y = (body_index + 1 - visible) as f64;
            }
        }

        let left = cell.col * COLUMN_WIDTH as usize;
        let right = left + COLUMN_WIDTH as usize;
        let first_x = self.first_x();
        if left < first_x {
            self.x = left as f64;
        } else if right > first_x + self.width as usize {
            self.x = right.saturating_sub(self.width as usize) as f64;
        }
        self.clamp();
    }

    fn max_x(&self) -> f64 {
        let content = self.columns * COLUMN_WIDTH as usize;
        content.saturating_sub(self.width as usize) as f64
    }

    fn max_y(&self) -> f64 {
        self.body_rows.saturating_sub(self.visible_body_rows()) as f64
    }

    fn clamp(&mut self) {
        self.x = self.x.clamp(0.0, self.max_x());
        self.y = self.y.clamp(0.0, self.max_y());
    }
}

impl Viewport for TermViewport {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        self.clamp();
    }
}
