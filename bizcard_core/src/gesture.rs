//! Tap vs double-tap disambiguation for the avatar region.

use std::time::{Duration, Instant};

/// Platform-typical double-tap window.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// What a settled avatar interaction means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// A lone tap: flip the theme.
    ThemeToggle,
    /// Two taps within the window: request a refresh. Suppresses the
    /// single-tap outcome for the pair.
    RefreshRequest,
}

/// Classifies avatar taps into exactly one outcome per interaction.
///
/// A tap is held pending until either a second tap lands inside the window
/// (settling as [`TapOutcome::RefreshRequest`]) or the window elapses
/// (settling as [`TapOutcome::ThemeToggle`] on the next [`poll`]). Timing is
/// passed in as [`Instant`]s so the UI tick drives settlement and tests can
/// inject time.
///
/// [`poll`]: GestureRouter::poll
#[derive(Debug)]
pub struct GestureRouter {
    window: Duration,
    pending: Option<Instant>,
}

impl Default for GestureRouter {
    fn default() -> Self {
        Self::new(DOUBLE_TAP_WINDOW)
    }
}

impl GestureRouter {
    pub fn new(window: Duration) -> Self {
        Self { window, pending: None }
    }

    /// Records a tap at `at`. Returns an outcome only when this tap settles
    /// a pair; a first tap stays pending.
    ///
    /// If an earlier tap was still pending but its window already elapsed
    /// (the caller stopped polling for a while), that tap settles as a
    /// single and the new tap becomes the pending one.
    pub fn on_tap(&mut self, at: Instant) -> Option<TapOutcome> {
        match self.pending.take() {
            Some(first) if at.duration_since(first) <= self.window => {
                Some(TapOutcome::RefreshRequest)
            }
            Some(_) => {
                self.pending = Some(at);
                Some(TapOutcome::ThemeToggle)
            }
            None => {
                self.pending = Some(at);
                None
            }
        }
    }

    /// Settles a pending tap whose window has elapsed by `now`. Called from
    /// the UI tick; returns each single-tap outcome exactly once.
    pub fn poll(&mut self, now: Instant) -> Option<TapOutcome> {
        match self.pending {
            Some(first) if now.duration_since(first) > self.window => {
                self.pending = None;
                Some(TapOutcome::ThemeToggle)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> GestureRouter {
        GestureRouter::new(Duration::from_millis(300))
    }

    #[test]
    fn single_tap_settles_as_theme_toggle_after_window() {
        let mut router = router();
        let t0 = Instant::now();
        assert_eq!(router.on_tap(t0), None);
        // Still inside the window: nothing settles yet.
        assert_eq!(router.poll(t0 + Duration::from_millis(300)), None);
        assert_eq!(
            router.poll(t0 + Duration::from_millis(301)),
            Some(TapOutcome::ThemeToggle)
        );
        // Exactly once.
        assert_eq!(router.poll(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn tap_pair_settles_as_refresh_and_suppresses_single() {
        let mut router = router();
        let t0 = Instant::now();
        assert_eq!(router.on_tap(t0), None);
        assert_eq!(
            router.on_tap(t0 + Duration::from_millis(200)),
            Some(TapOutcome::RefreshRequest)
        );
        // The pair consumed both taps; nothing left to settle.
        assert_eq!(router.poll(t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn second_tap_outside_window_starts_a_new_interaction() {
        let mut router = router();
        let t0 = Instant::now();
        assert_eq!(router.on_tap(t0), None);
        // The stale tap settles as a single, the late tap becomes pending.
        assert_eq!(
            router.on_tap(t0 + Duration::from_millis(400)),
            Some(TapOutcome::ThemeToggle)
        );
        assert_eq!(
            router.poll(t0 + Duration::from_millis(701)),
            Some(TapOutcome::ThemeToggle)
        );
    }

    #[test]
    fn window_is_configurable() {
        let mut router = GestureRouter::new(Duration::from_millis(100));
        let t0 = Instant::now();
        assert_eq!(router.on_tap(t0), None);
        assert_eq!(
            router.on_tap(t0 + Duration::from_millis(150)),
            Some(TapOutcome::ThemeToggle)
        );
    }
}
