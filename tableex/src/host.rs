//! Host capabilities the interactions drive.

use std::time::Duration;

use crate::clipboard::ClipboardSink;
use crate::surface::TableSurface;

/// The scrollable window the table is shown in.
pub trait Viewport {
    /// Visible width in host units (pixels, terminal columns, ...).
    fn width(&self) -> f64;

    /// Visible height in host units.
    fn height(&self) -> f64;

    /// Scroll the content by an offset; positive values scroll right/down.
    fn scroll_by(&mut self, dx: f64, dy: f64);
}

/// A repeating timer owned by the host.
///
/// While started, the host delivers [`TableEvent::ScrollTick`] once per
/// period until `cancel` is called. Starting an already running timer
/// restarts it.
///
/// [`TableEvent::ScrollTick`]: crate::event::TableEvent::ScrollTick
pub trait ScrollTimer {
    fn start(&mut self, period: Duration);
    fn cancel(&mut self);
}

/// Everything a handler may touch while processing one event.
pub struct HostContext<'a> {
    pub surface: &'a mut dyn TableSurface,
    pub viewport: &'a mut dyn Viewport,
    pub timer: &'a mut dyn ScrollTimer,
    pub clipboard: &'a mut dyn ClipboardSink,
}

impl<'a> HostContext<'a> {
    pub fn new(
        surface: &'a mut dyn TableSurface,
        viewport: &'a mut dyn Viewport,
        timer: &'a mut dyn ScrollTimer,
        clipboard: &'a mut dyn ClipboardSink,
    ) -> Self {
        Self {
            surface,
            viewport,
            timer,
            clipboard,
        }
    }
}
