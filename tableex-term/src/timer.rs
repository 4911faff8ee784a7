//! The autoscroll timer, backed by a tokio interval.

use std::time::Duration;

use tableex::ScrollTimer;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// At most one interval, replaced on every `start`.
#[derive(Debug, Default)]
pub struct IntervalTimer {
    interval: Option<Interval>,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick, or forever if the timer is not running.
    /// This is used as a branch in tokio::select!
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl ScrollTimer for IntervalTimer {
    fn start(&mut self, period: Duration) {
        // First tick one period from now, not immediately
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
    }

    fn cancel(&mut self) {
        self.interval = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_and_cancel() {
        let mut timer = IntervalTimer::new();
        assert!(!timer.is_running());

        timer.start(Duration::from_millis(1));
        assert!(timer.is_running());
        timer.tick().await;

        timer.cancel();
        assert!(!timer.is_running());
    }
}
