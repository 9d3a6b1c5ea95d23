//! Mutable screen state and the derived tilt transform.

/// Fixed multiplier mapping raw accelerometer readings to rotation degrees.
pub const TILT_SENSITIVITY: f32 = 4.0;

/// A single 3-axis linear acceleration reading, in m/s².
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Rotation angles (degrees) applied to the card plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    pub rotation_x: f32,
    pub rotation_y: f32,
}

/// The four independent flags driving the screen.
///
/// Orthogonal by design: any combination is valid. `refreshing` is the one
/// flag with an ordering rule - it must be observed true before the refresh
/// controller's completion can ever set it false again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub card_3d_enabled: bool,
    pub dark_theme: bool,
    pub refreshing: bool,
    pub portfolio_visible: bool,
}

/// Owner of all mutable interaction state for the card screen.
///
/// Collaborators never reach into the state directly; they call the named
/// mutators below and read snapshots. Created at screen mount with all
/// flags false and a zero sample, discarded at unmount.
#[derive(Debug, Clone, Default)]
pub struct InteractionCore {
    sample: OrientationSample,
    state: InteractionState,
}

impl InteractionCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored sample unconditionally. No filtering, no
    /// validation; the newest reading always wins.
    pub fn on_orientation_sample(&mut self, sample: OrientationSample) {
        self.sample = sample;
    }

    /// Flips the light/dark theme flag.
    pub fn toggle_theme(&mut self) {
        self.state.dark_theme = !self.state.dark_theme;
    }

    /// Flips 3D mode. While off, [`tilt`](Self::tilt) is forced to zero.
    pub fn toggle_3d_mode(&mut self) {
        self.state.card_3d_enabled = !self.state.card_3d_enabled;
    }

    /// Flips portfolio list visibility.
    pub fn toggle_portfolio(&mut self) {
        self.state.portfolio_visible = !self.state.portfolio_visible;
    }

    /// Begins a refresh cycle. Returns false (and changes nothing) while a
    /// cycle is already in flight; duplicate requests are dropped, not
    /// queued.
    pub fn request_refresh(&mut self) -> bool {
        if self.state.refreshing {
            return false;
        }
        self.state.refreshing = true;
        true
    }

    /// Ends the current refresh cycle. Only the refresh controller's
    /// completion is expected to drive this transition.
    pub fn finish_refresh(&mut self) {
        self.state.refreshing = false;
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn sample(&self) -> OrientationSample {
        self.sample
    }

    /// Derived rotation for the card plane.
    ///
    /// The horizontal axis drives rotation about Y and the vertical axis
    /// drives rotation about X - the cross-axis coupling gives the card a
    /// "tilts toward you" feel and is intentional, kept exactly as shipped.
    pub fn tilt(&self) -> TiltState {
        if !self.state.card_3d_enabled {
            return TiltState::default();
        }
        TiltState {
            rotation_x: -TILT_SENSITIVITY * self.sample.y,
            rotation_y: -TILT_SENSITIVITY * self.sample.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_parity() {
        let mut core = InteractionCore::new();
        for n in 1..=8 {
            core.toggle_theme();
            assert_eq!(core.state().dark_theme, n % 2 == 1);
        }
    }

    #[test]
    fn card_3d_toggle_parity() {
        let mut core = InteractionCore::new();
        for n in 1..=8 {
            core.toggle_3d_mode();
            assert_eq!(core.state().card_3d_enabled, n % 2 == 1);
        }
    }

    #[test]
    fn portfolio_toggle_flips() {
        let mut core = InteractionCore::new();
        assert!(!core.state().portfolio_visible);
        core.toggle_portfolio();
        assert!(core.state().portfolio_visible);
        core.toggle_portfolio();
        assert!(!core.state().portfolio_visible);
    }

    #[test]
    fn latest_sample_wins() {
        let mut core = InteractionCore::new();
        assert_eq!(core.sample(), OrientationSample::default());
        core.on_orientation_sample(OrientationSample { x: 1.0, y: 2.0, z: 3.0 });
        core.on_orientation_sample(OrientationSample { x: -0.5, y: 0.0, z: 9.8 });
        assert_eq!(core.sample(), OrientationSample { x: -0.5, y: 0.0, z: 9.8 });
    }

    #[test]
    fn tilt_uses_cross_axis_mapping() {
        let mut core = InteractionCore::new();
        core.on_orientation_sample(OrientationSample { x: 1.0, y: 2.0, z: 0.0 });
        core.toggle_3d_mode();
        let tilt = core.tilt();
        assert_eq!(tilt.rotation_x, -8.0);
        assert_eq!(tilt.rotation_y, -4.0);
    }

    #[test]
    fn tilt_is_zero_while_3d_disabled() {
        let mut core = InteractionCore::new();
        core.on_orientation_sample(OrientationSample { x: 5.0, y: -3.0, z: 1.0 });
        assert_eq!(core.tilt(), TiltState::default());
        core.toggle_3d_mode();
        core.toggle_3d_mode();
        assert_eq!(core.tilt(), TiltState::default());
    }

    #[test]
    fn duplicate_refresh_requests_are_dropped() {
        let mut core = InteractionCore::new();
        assert!(core.request_refresh());
        assert!(core.state().refreshing);
        assert!(!core.request_refresh());
        assert!(core.state().refreshing);
        core.finish_refresh();
        assert!(!core.state().refreshing);
        assert!(core.request_refresh());
    }

    #[test]
    fn flags_are_orthogonal() {
        let mut core = InteractionCore::new();
        core.toggle_theme();
        core.toggle_3d_mode();
        core.request_refresh();
        core.toggle_portfolio();
        let state = core.state();
        assert!(state.dark_theme);
        assert!(state.card_3d_enabled);
        assert!(state.refreshing);
        assert!(state.portfolio_visible);
    }
}
