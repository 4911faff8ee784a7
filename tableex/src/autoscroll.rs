//! Edge-triggered scrolling while a selection is being dragged.

use crate::config::AutoscrollConfig;
use crate::host::{ScrollTimer, Viewport};

/// Direction to scroll the viewport in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    /// Unit offset `(dx, dy)` for this direction.
    pub fn unit(self) -> (f64, f64) {
        match self {
            ScrollDirection::Up => (0.0, -1.0),
            ScrollDirection::Down => (0.0, 1.0),
            ScrollDirection::Left => (-1.0, 0.0),
            ScrollDirection::Right => (1.0, 0.0),
        }
    }
}

/// Outcome of checking the pointer against the edge bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDecision {
    /// Pointer is in an inner band: scroll on every timer tick.
    Continuous(ScrollDirection),
    /// Pointer is in an outer band: scroll once.
    Step(ScrollDirection),
    /// Pointer is away from every edge.
    None,
}

/// Classify a pointer position against the viewport's edge bands.
///
/// Inner bands win over outer bands; within a band kind the vertical axis is
/// checked first and the near edge before the far edge.
pub fn decide(config: &AutoscrollConfig, width: f64, height: f64, x: f64, y: f64) -> ScrollDecision {
    let (top, bottom, left, right) = (0.0, height, 0.0, width);
    let outer_y = bottom * config.outer_threshold;
    let inner_y = bottom * config.inner_threshold;
    let outer_x = right * config.outer_threshold;
    let inner_x = right * config.inner_threshold;

    if y <= top + inner_y {
        ScrollDecision::Continuous(ScrollDirection::Up)
    } else if y >= bottom - inner_y {
        ScrollDecision::Continuous(ScrollDirection::Down)
    } else if x <= left + inner_x {
        ScrollDecision::Continuous(ScrollDirection::Left)
    } else if x >= right - inner_x {
        ScrollDecision::Continuous(ScrollDirection::Right)
    } else if y <= top + outer_y {
        ScrollDecision::Step(ScrollDirection::Up)
    } else if y >= bottom - outer_y {
        ScrollDecision::Step(ScrollDirection::Down)
    } else if x <= left + outer_x {
        ScrollDecision::Step(ScrollDirection::Left)
    } else if x >= right - outer_x {
        ScrollDecision::Step(ScrollDirection::Right)
    } else {
        ScrollDecision::None
    }
}

/// Owns the single continuous-scroll session.
#[derive(Debug, Clone, Default)]
pub struct AutoscrollController {
    config: AutoscrollConfig,
    active: Option<ScrollDirection>,
}

impl AutoscrollController {
    pub fn new(config: AutoscrollConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Direction of the running continuous scroll, if any.
    pub fn active(&self) -> Option<ScrollDirection> {
        self.active
    }

    /// React to the pointer at `(x, y)` during a drag.
    ///
    /// A continuous decision in the direction already running leaves the
    /// timer alone; any other decision cancels it first, so at most one
    /// timer is ever live.
    pub fn update(
        &mut self,
        x: f64,
        y: f64,
        viewport: &mut dyn Viewport,
        timer: &mut dyn ScrollTimer,
    ) -> ScrollDecision {
        let decision = decide(&self.config, viewport.width(), viewport.height(), x, y);
        log::trace!("[autoscroll] pointer ({}, {}) -> {:?}", x, y, decision);

        match decision {
            ScrollDecision::Continuous(direction) if self.active == Some(direction) => {}
            ScrollDecision::Continuous(direction) => {
                self.stop(timer);
                timer.start(self.config.tick);
                self.active = Some(direction);
                log::debug!("[autoscroll] continuous {:?}", direction);
            }
            ScrollDecision::Step(direction) => {
                self.stop(timer);
                let (dx, dy) = direction.unit();
                let speed = self.config.scroll_speed;
                viewport.scroll_by(dx * speed, dy * speed);
            }
            ScrollDecision::None => self.stop(timer),
        }

        decision
    }

    /// Apply one continuous-scroll tick.
    /// Returns true if the viewport was scrolled.
    pub fn tick(&self, viewport: &mut dyn Viewport) -> bool {
        let Some(direction) = self.active else {
            return false;
        };
        let (dx, dy) = direction.unit();
        let step = self.config.continuous_step();
        viewport.scroll_by(dx * step, dy * step);
        true
    }

    /// Cancel the continuous scroll, if one is running.
    pub fn stop(&mut self, timer: &mut dyn ScrollTimer) {
        if let Some(direction) = self.active.take() {
            timer.cancel();
            log::debug!("[autoscroll] stopped {:?}", direction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide_default(x: f64, y: f64) -> ScrollDecision {
        decide(&AutoscrollConfig::default(), 1000.0, 1000.0, x, y)
    }

    #[test]
    fn test_inner_bands() {
        assert_eq!(decide_default(500.0, 50.0), ScrollDecision::Continuous(ScrollDirection::Up));
        assert_eq!(decide_default(500.0, 100.0), ScrollDecision::Continuous(ScrollDirection::Up));
        assert_eq!(decide_default(500.0, 950.0), ScrollDecision::Continuous(ScrollDirection::Down));
        assert_eq!(decide_default(50.0, 500.0), ScrollDecision::Continuous(ScrollDirection::Left));
        assert_eq!(decide_default(950.0, 500.0), ScrollDecision::Continuous(ScrollDirection::Right));
    }

    #[test]
    fn test_outer_bands() {
        assert_eq!(decide_default(500.0, 150.0), ScrollDecision::Step(ScrollDirection::Up));
        assert_eq!(decide_default(500.0, 850.0), ScrollDecision::Step(ScrollDirection::Down));
        assert_eq!(decide_default(150.0, 500.0), ScrollDecision::Step(ScrollDirection::Left));
        assert_eq!(decide_default(850.0, 500.0), ScrollDecision::Step(ScrollDirection::Right));
    }

    #[test]
    fn test_center_is_none() {
        assert_eq!(decide_default(500.0, 500.0), ScrollDecision::None);
        assert_eq!(decide_default(201.0, 799.0), ScrollDecision::None);
    }

    #[test]
    fn test_priority_order() {
        // Inner horizontal beats outer vertical
        assert_eq!(decide_default(50.0, 150.0), ScrollDecision::Continuous(ScrollDirection::Left));
        // Vertical beats horizontal within the same band kind
        assert_eq!(decide_default(50.0, 50.0), ScrollDecision::Continuous(ScrollDirection::Up));
        assert_eq!(decide_default(150.0, 850.0), ScrollDecision::Step(ScrollDirection::Down));
    }

    #[test]
    fn test_unit_vectors() {
        assert_eq!(ScrollDirection::Up.unit(), (0.0, -1.0));
        assert_eq!(ScrollDirection::Right.unit(), (1.0, 0.0));
    }
}
