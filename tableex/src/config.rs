//! Activation and tuning configuration.

use std::time::Duration;

/// Attribute marking a table as box-selectable.
pub const BOX_SELECTABLE_MARKER: &str = "tableex-box-selectable";

/// Attribute marking a table's columns as reorderable.
pub const COLUMN_RESORTABLE_MARKER: &str = "tableex-column-resortable";

/// Which interactions attach to a table, and how autoscroll behaves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableexConfig {
    /// Enable rectangular cell selection, keyboard navigation and copy.
    pub box_selectable: bool,
    /// Enable drag-to-reorder on header cells.
    pub column_resortable: bool,
    /// Edge scrolling while drag-selecting.
    pub autoscroll: AutoscrollConfig,
}

impl TableexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the activation flags from the attribute names present on a table.
    pub fn from_markers<'a>(attributes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut config = Self::default();
        for attr in attributes {
            match attr {
                BOX_SELECTABLE_MARKER => config.box_selectable = true,
                COLUMN_RESORTABLE_MARKER => config.column_resortable = true,
                _ => {}
            }
        }
        config
    }

    /// Enable box selection.
    pub fn box_selectable(mut self) -> Self {
        self.box_selectable = true;
        self
    }

    /// Enable column reordering.
    pub fn column_resortable(mut self) -> Self {
        self.column_resortable = true;
        self
    }

    /// Replace the autoscroll tuning.
    pub fn autoscroll(mut self, autoscroll: AutoscrollConfig) -> Self {
        self.autoscroll = autoscroll;
        self
    }
}

/// Edge-scroll tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoscrollConfig {
    /// Offset of a single step, in host units.
    pub scroll_speed: f64,
    /// Factor applied to `scroll_speed` on each continuous-scroll tick.
    pub scroll_speed_multiplier: f64,
    /// Outer band as a fraction of the viewport dimension (single steps).
    pub outer_threshold: f64,
    /// Inner band as a fraction of the viewport dimension (continuous).
    pub inner_threshold: f64,
    /// Continuous-scroll timer period.
    pub tick: Duration,
}

impl Default for AutoscrollConfig {
    fn default() -> Self {
        Self {
            scroll_speed: 4.0,
            scroll_speed_multiplier: 5.0,
            outer_threshold: 0.2,
            inner_threshold: 0.1,
            tick: Duration::from_millis(10),
        }
    }
}

impl AutoscrollConfig {
    pub fn scroll_speed(mut self, speed: f64) -> Self {
        self.scroll_speed = speed;
        self
    }

    pub fn scroll_speed_multiplier(mut self, multiplier: f64) -> Self {
        self.scroll_speed_multiplier = multiplier;
        self
    }

    /// Set the outer and inner band fractions.
    pub fn thresholds(mut self, outer: f64, inner: f64) -> Self {
        self.outer_threshold = outer;
        self.inner_threshold = inner;
        self
    }

    pub fn tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Offset applied per continuous-scroll tick.
    pub fn continuous_step(&self) -> f64 {
        self.scroll_speed * self.scroll_speed_multiplier
    }
}
