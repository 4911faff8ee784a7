//! Tab/newline export of the selected rectangle.

use thiserror::Error;

use crate::cell::{CellRect, CellRef};
use crate::surface::TableSurface;

/// Failures a clipboard sink may report.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard writer is available")]
    Unavailable,
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
    #[error("clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where copied text goes.
pub trait ClipboardSink {
    /// Whether an asynchronous writer is available.
    fn has_async_writer(&self) -> bool;

    /// Hand `text` to the asynchronous writer without waiting for it.
    /// Completion and failure are the sink's business.
    fn write_text_async(&mut self, text: String);

    /// Synchronous fallback used when no asynchronous writer exists.
    fn copy_sync(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Serialize `rect` row-major: cells joined by tabs, rows by newlines,
/// plain text only.
pub fn selection_text(surface: &dyn TableSurface, rect: CellRect) -> String {
    rect.rows()
        .map(|row| {
            rect.cols()
                .map(|col| surface.text(CellRef::new(row, col)).unwrap_or_default())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Send `text` to the sink, preferring the asynchronous writer.
/// Failures are logged, never returned.
pub fn copy_to_clipboard(sink: &mut dyn ClipboardSink, text: String) {
    if sink.has_async_writer() {
        log::debug!("[clipboard] async write of {} bytes", text.len());
        sink.write_text_async(text);
        return;
    }
    match sink.copy_sync(&text) {
        Ok(()) => log::debug!("[clipboard] copied {} bytes", text.len()),
        Err(e) => log::warn!("[clipboard] copy failed: {}", e),
    }
}
