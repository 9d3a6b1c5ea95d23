use iced::widget::canvas;

use bizcard_core::{OrientationSample, TiltState, TILT_SENSITIVITY};

use super::Spring;
use crate::constants::{
    PULL_TRIGGER_DISTANCE, REVEAL_DAMPING, REVEAL_STIFFNESS, SPINNER_TICK_INCREMENT,
    TILT_SPRING_DAMPING, TILT_SPRING_STIFFNESS,
};

/// Eases raw orientation samples so the card follows the sensor smoothly,
/// matching the original's animate-as-state behavior.
#[derive(Debug)]
pub struct TiltAnimation {
    pub x: Spring,
    pub y: Spring,
    pub cache: canvas::Cache,
}

impl Default for TiltAnimation {
    fn default() -> Self {
        Self {
            x: Spring::new(TILT_SPRING_STIFFNESS, TILT_SPRING_DAMPING),
            y: Spring::new(TILT_SPRING_STIFFNESS, TILT_SPRING_DAMPING),
            cache: canvas::Cache::default(),
        }
    }
}

impl TiltAnimation {
    /// Points both springs at the newest sample.
    pub fn set_targets(&mut self, sample: OrientationSample) {
        self.x.set_target(sample.x);
        self.y.set_target(sample.y);
    }

    /// Advances the springs. Returns true (and invalidates the card canvas)
    /// while still moving.
    pub fn update(&mut self) -> bool {
        let moving_x = self.x.update();
        let moving_y = self.y.update();
        let animating = moving_x || moving_y;
        if animating {
            self.cache.clear();
        }
        animating
    }

    /// The rotation to render: the fixed cross-axis transform applied to
    /// the eased sample, or zero while 3D mode is off.
    pub fn tilt(&self, card_3d_enabled: bool) -> TiltState {
        if !card_3d_enabled {
            return TiltState::default();
        }
        TiltState {
            rotation_x: -TILT_SENSITIVITY * self.y.position,
            rotation_y: -TILT_SENSITIVITY * self.x.position,
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Tracks a pull-to-refresh drag on the card area.
#[derive(Debug, Default)]
pub struct PullState {
    origin: Option<f32>,
    pub distance: f32,
}

impl PullState {
    /// Starts tracking from the given cursor y.
    pub fn begin(&mut self, y: f32) {
        self.origin = Some(y);
        self.distance = 0.0;
    }

    /// Updates the drag distance; only downward travel counts.
    pub fn drag(&mut self, y: f32) {
        if let Some(origin) = self.origin {
            self.distance = (y - origin).max(0.0);
        }
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// 0.0 to 1.0 toward the trigger threshold.
    pub fn progress(&self) -> f32 {
        (self.distance / PULL_TRIGGER_DISTANCE).min(1.0)
    }

    /// Ends the drag. Returns true when the pull passed the threshold.
    pub fn release(&mut self) -> bool {
        let triggered = self.origin.is_some() && self.distance >= PULL_TRIGGER_DISTANCE;
        self.origin = None;
        self.distance = 0.0;
        triggered
    }
}

/// Spring-driven reveal of the portfolio list.
#[derive(Debug)]
pub struct PortfolioReveal {
    pub spring: Spring,
}

impl Default for PortfolioReveal {
    fn default() -> Self {
        Self {
            spring: Spring::new(REVEAL_STIFFNESS, REVEAL_DAMPING),
        }
    }
}

impl PortfolioReveal {
    pub fn set_open(&mut self, open: bool) {
        self.spring.set_target(if open { 1.0 } else { 0.0 });
    }

    /// Updates the reveal animation. Returns true if still animating.
    pub fn update(&mut self) -> bool {
        self.spring.update()
    }

    /// Reveal progress clamped to 0..1 for layout.
    pub fn progress(&self) -> f32 {
        self.spring.position.clamp(0.0, 1.0)
    }
}

/// Drives the busy indicator shown while a refresh is in flight.
#[derive(Debug, Default)]
pub struct RefreshSpinnerState {
    pub tick: f32,
    pub cache: canvas::Cache,
}

impl RefreshSpinnerState {
    pub fn update(&mut self) {
        self.tick += SPINNER_TICK_INCREMENT;
        self.cache.clear();
    }

    pub fn reset(&mut self) {
        self.tick = 0.0;
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_only_counts_downward_travel() {
        let mut pull = PullState::default();
        pull.begin(100.0);
        pull.drag(60.0);
        assert_eq!(pull.distance, 0.0);
        pull.drag(150.0);
        assert_eq!(pull.distance, 50.0);
        assert!(!pull.release());
    }

    #[test]
    fn pull_past_threshold_triggers_on_release() {
        let mut pull = PullState::default();
        pull.begin(0.0);
        pull.drag(PULL_TRIGGER_DISTANCE + 1.0);
        assert_eq!(pull.progress(), 1.0);
        assert!(pull.release());
        assert!(!pull.is_active());
        // A release with no begin does nothing.
        assert!(!pull.release());
    }

    #[test]
    fn tilt_is_zero_when_3d_off_even_mid_motion() {
        let mut tilt = TiltAnimation::default();
        tilt.set_targets(OrientationSample { x: 2.0, y: 1.0, z: 9.81 });
        for _ in 0..120 {
            tilt.update();
        }
        assert_eq!(tilt.tilt(false), TiltState::default());
        let on = tilt.tilt(true);
        assert!((on.rotation_x - -4.0).abs() < 0.1);
        assert!((on.rotation_y - -8.0).abs() < 0.1);
    }
}
