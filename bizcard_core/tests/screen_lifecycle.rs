//! End-to-end lifecycle scenarios: the core, refresh controller and
//! orientation source wired together the way the desktop screen wires them.

use std::time::Duration;

use bizcard_core::{
    InteractionCore, OrientationSample, RefreshController, ScriptedOrientation,
    OrientationSource,
};
use tokio::time::advance;

/// A mounted screen: core plus its collaborators, torn down like the
/// desktop does on unmount.
struct Screen {
    core: InteractionCore,
    refresh: RefreshController,
    done: tokio::sync::broadcast::Receiver<()>,
}

impl Screen {
    fn mount() -> Self {
        let refresh = RefreshController::default();
        let done = refresh.subscribe();
        Self { core: InteractionCore::new(), refresh, done }
    }

    fn request_refresh(&mut self) {
        if self.core.request_refresh() {
            assert!(self.refresh.start());
        }
    }

    /// One pass of the event loop: apply any completion that arrived.
    fn pump(&mut self) {
        while self.done.try_recv().is_ok() {
            self.core.finish_refresh();
        }
    }

    fn unmount(self) -> tokio::sync::broadcast::Receiver<()> {
        self.refresh.cancel();
        self.done
    }
}

#[tokio::test(start_paused = true)]
async fn refresh_cycle_flips_the_flag_at_the_deadline() {
    let mut screen = Screen::mount();

    screen.request_refresh();
    assert!(screen.core.state().refreshing);

    advance(Duration::from_millis(999)).await;
    tokio::task::yield_now().await;
    screen.pump();
    assert!(screen.core.state().refreshing);

    advance(Duration::from_millis(1)).await;
    tokio::task::yield_now().await;
    screen.pump();
    assert!(!screen.core.state().refreshing);
}

#[tokio::test(start_paused = true)]
async fn duplicate_requests_produce_one_completion() {
    let mut screen = Screen::mount();

    screen.request_refresh();
    screen.request_refresh();

    advance(Duration::from_millis(1500)).await;
    tokio::task::yield_now().await;
    assert!(screen.done.try_recv().is_ok());
    assert!(screen.done.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn unmount_cancels_the_pending_completion() {
    let mut screen = Screen::mount();
    screen.request_refresh();

    advance(Duration::from_millis(500)).await;
    let mut done = screen.unmount();

    advance(Duration::from_millis(2000)).await;
    tokio::task::yield_now().await;
    // The discarded screen never observes a completion.
    assert!(done.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn orientation_stream_drives_tilt_only_in_3d_mode() {
    let mut source = ScriptedOrientation::new(
        vec![
            OrientationSample { x: 1.0, y: 2.0, z: 9.81 },
            OrientationSample { x: -2.0, y: 0.5, z: 9.81 },
        ],
        Duration::from_millis(33),
    );
    let mut rx = source.subscribe();
    let mut core = InteractionCore::new();

    core.on_orientation_sample(rx.recv().await.unwrap());
    assert_eq!(core.tilt(), Default::default());

    core.toggle_3d_mode();
    assert_eq!(core.tilt().rotation_x, -8.0);
    assert_eq!(core.tilt().rotation_y, -4.0);

    core.on_orientation_sample(rx.recv().await.unwrap());
    assert_eq!(core.tilt().rotation_x, -2.0);
    assert_eq!(core.tilt().rotation_y, 8.0);

    source.unsubscribe();
    source.unsubscribe();
}
