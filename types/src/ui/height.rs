//! Eased height change for the feature list.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer, ease_out_cubic};

/// Interpolates the displayed list height between two row counts.
#[derive(Debug, Clone)]
pub struct HeightTransition {
    from: u16,
    to: u16,
    timer: EffectTimer,
}

impl HeightTransition {
    #[must_use]
    pub fn new(from: u16, to: u16, duration: Duration) -> Self {
        Self {
            from,
            to,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn target(&self) -> u16 {
        self.to
    }

    /// Height to draw this frame.
    #[must_use]
    pub fn current(&self) -> u16 {
        let t = match self.phase() {
            AnimPhase::Completed => return self.to,
            AnimPhase::Running { progress } => ease_out_cubic(progress),
        };
        let from = f32::from(self.from);
        let to = f32::from(self.to);
        (from + (to - from) * t).round() as u16
    }
}
