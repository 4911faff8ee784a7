//! Draws the visible part of the table with crossterm.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tableex::{CellKind, CellRef, GridSurface, TableSurface};
use unicode_width::UnicodeWidthChar;

use crate::viewport::{COLUMN_WIDTH, TermViewport};

/// Redraw every line of the screen.
pub fn draw(out: &mut impl Write, grid: &GridSurface, viewport: &TermViewport, status: &str) -> io::Result<()> {
    let (width, _) = viewport.size();

    for y in 0..viewport.status_line() {
        queue!(out, MoveTo(0, y), ResetColor, SetAttribute(Attribute::Reset))?;
        if let Some(row) = viewport.row_at(y) {
            draw_row(out, grid, viewport, row)?;
        }
        queue!(out, ResetColor, SetAttribute(Attribute::Reset), Clear(ClearType::UntilNewLine))?;
    }

    queue!(
        out,
        MoveTo(0, viewport.status_line()),
        SetAttribute(Attribute::Reverse),
        Print(fit(status, width as usize)),
        SetAttribute(Attribute::Reset),
    )?;
    out.flush()
}

fn draw_row(out: &mut impl Write, grid: &GridSurface, viewport: &TermViewport, row: usize) -> io::Result<()> {
    let (width, _) = viewport.size();
    let column_width = COLUMN_WIDTH as usize;
    let first_x = viewport.first_x();
    let mut skip = first_x % column_width;
    let mut remaining = width as usize;

    for col in first_x / column_width..grid.cell_count(row) {
        if remaining == 0 {
            break;
        }
        let Some(cell) = grid.cell(CellRef::new(row, col)) else {
            break;
        };
        let text = grid.text(CellRef::new(row, col)).unwrap_or_default();
        let padded = fit(&text, column_width - 1) + " ";
        let visible: String = padded.chars().skip(skip).take(remaining).collect();
        skip = 0;
        remaining = remaining.saturating_sub(visible.chars().count());

        match (cell.kind, cell.selected) {
            (CellKind::Header, _) => queue!(
                out,
                SetAttribute(Attribute::Bold),
                SetBackgroundColor(Color::DarkGrey),
                SetForegroundColor(Color::White),
            )?,
            (CellKind::Data, true) => queue!(
                out,
                SetAttribute(Attribute::Reset),
                SetBackgroundColor(Color::Blue),
                SetForegroundColor(Color::White),
            )?,
            (CellKind::Data, false) => queue!(out, SetAttribute(Attribute::Reset), ResetColor)?,
        }
        queue!(out, Print(visible))?;
    }
    Ok(())
}

/// Truncate or pad `text` to exactly `width` display columns.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
