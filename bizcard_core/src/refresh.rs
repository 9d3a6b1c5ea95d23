//! Debounced, cancellable refresh timer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Fixed busy duration for a refresh cycle, measured from `start()`.
pub const REFRESH_DURATION: Duration = Duration::from_millis(1000);

/// Turns a refresh request into a bounded busy indication.
///
/// `start()` arms a non-blocking timer; when it elapses a completion event
/// is broadcast for the screen to map back into `finish_refresh`. The
/// controller is reentrancy-safe on its own (a second `start()` while a
/// timer is pending is rejected), independent of the core's duplicate-drop
/// rule. `cancel()` tears the pending timer down so the completion never
/// fires on a discarded screen; cancelling is idempotent and also runs on
/// drop.
#[derive(Debug)]
pub struct RefreshController {
    delay: Duration,
    done_tx: broadcast::Sender<()>,
    in_flight: Arc<AtomicBool>,
    cancel: CancellationToken,
}

impl Default for RefreshController {
    fn default() -> Self {
        Self::new(REFRESH_DURATION)
    }
}

impl RefreshController {
    pub fn new(delay: Duration) -> Self {
        let (done_tx, _) = broadcast::channel(4);
        Self {
            delay,
            done_tx,
            in_flight: Arc::new(AtomicBool::new(false)),
            cancel: CancellationToken::new(),
        }
    }

    /// Receiver for completion events. Subscribe before starting a cycle.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.done_tx.subscribe()
    }

    /// Arms the timer. Returns false while a previous timer is still
    /// pending or the controller has been cancelled.
    pub fn start(&self) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!("refresh already in flight, request dropped");
            return false;
        }
        debug!(delay_ms = self.delay.as_millis() as u64, "refresh timer armed");

        let delay = self.delay;
        let done_tx = self.done_tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("refresh timer cancelled before completion");
                }
                _ = tokio::time::sleep(delay) => {
                    in_flight.store(false, Ordering::SeqCst);
                    // Receiver gone means the screen is being torn down.
                    let _ = done_tx.send(());
                    debug!("refresh cycle completed");
                }
            }
        });
        true
    }

    /// True while a timer is pending.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Cancels any pending timer. Safe to call repeatedly; the controller
    /// rejects further `start()` calls afterwards.
    pub fn cancel(&self) {
        self.cancel.cancel();
        self.in_flight.store(false, Ordering::SeqCst);
    }
}

impl Drop for RefreshController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn completes_after_exactly_the_configured_delay() {
        let controller = RefreshController::default();
        let mut done = controller.subscribe();
        assert!(controller.start());

        advance(Duration::from_millis(999)).await;
        tokio::task::yield_now().await;
        assert!(done.try_recv().is_err());
        assert!(controller.is_in_flight());

        advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert!(done.try_recv().is_ok());
        assert!(!controller.is_in_flight());
    }

    #[tokio::test(start_paused = true)]
    async fn second_start_is_rejected_while_pending() {
        let controller = RefreshController::default();
        let mut done = controller.subscribe();
        assert!(controller.start());
        assert!(!controller.start());

        advance(Duration::from_millis(1500)).await;
        tokio::task::yield_now().await;
        // Exactly one completion for the pair of requests.
        assert!(done.try_recv().is_ok());
        assert!(done.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn restartable_after_completion() {
        let controller = RefreshController::default();
        let mut done = controller.subscribe();
        assert!(controller.start());
        advance(Duration::from_millis(1000)).await;
        tokio::task::yield_now().await;
        assert!(done.try_recv().is_ok());

        assert!(controller.start());
        advance(Duration::from_millis(1000)).await;
        tokio::task::yield_now().await;
        assert!(done.try_recv().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_suppresses_the_pending_completion() {
        let controller = RefreshController::default();
        let mut done = controller.subscribe();
        assert!(controller.start());

        advance(Duration::from_millis(500)).await;
        controller.cancel();
        controller.cancel(); // idempotent

        advance(Duration::from_millis(2000)).await;
        tokio::task::yield_now().await;
        assert!(done.try_recv().is_err());
        assert!(!controller.start());
    }
}
