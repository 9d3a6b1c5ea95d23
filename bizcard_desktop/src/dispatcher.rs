//! Thin UI wrapper around the core's event sources.
//!
//! Owns the orientation source and the refresh controller, and exposes
//! their broadcast channels as Iced subscriptions. Shutdown unsubscribes
//! the sensor and cancels any pending refresh timer; it is idempotent and
//! also runs on drop so a torn-down screen can never be mutated late.

use bizcard_core::{
    Config, NullOrientation, OrientationSample, OrientationSource, RefreshController,
    SimulatedOrientation,
};
use futures::StreamExt;
use iced::Subscription;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::info;
use uuid::Uuid;

pub struct Dispatcher {
    id: Uuid,
    source: Box<dyn OrientationSource + Send>,
    refresh: RefreshController,
    samples: broadcast::Receiver<OrientationSample>,
    shut_down: bool,
}

impl Dispatcher {
    /// Builds the dispatcher and starts sample delivery. With simulation
    /// disabled the screen runs sensor-less: subscribing succeeds but no
    /// sample ever arrives and tilt stays at zero.
    pub fn new(config: &Config) -> Self {
        let mut source: Box<dyn OrientationSource + Send> = if config.simulate_orientation {
            Box::new(SimulatedOrientation::new(config.orientation_rate_hz))
        } else {
            info!("orientation source disabled, tilt will stay at zero");
            Box::new(NullOrientation::default())
        };
        let samples = source.subscribe();
        Self {
            id: Uuid::new_v4(),
            source,
            refresh: RefreshController::default(),
            samples,
            shut_down: false,
        }
    }

    /// Arms the refresh timer. Returns false while one is already pending.
    pub fn start_refresh(&self) -> bool {
        self.refresh.start()
    }

    /// Subscription delivering orientation samples as they arrive.
    pub fn orientation_subscription(&self) -> Subscription<OrientationSample> {
        run_with_id(
            format!("orientation-{}", self.id),
            broadcast_events(self.samples.resubscribe()),
        )
    }

    /// Subscription delivering one event per completed refresh cycle.
    pub fn refresh_subscription(&self) -> Subscription<()> {
        run_with_id(
            format!("refresh-{}", self.id),
            broadcast_events(self.refresh.subscribe()),
        )
    }

    /// Releases the sensor and cancels any pending refresh. Safe to call
    /// more than once.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.source.unsubscribe();
        self.refresh.cancel();
        info!("dispatcher shut down");
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Runs a stream as a subscription identified by `id`, like the former
/// `Subscription::run_with_id`.
fn run_with_id<T: Send + 'static>(
    id: String,
    stream: impl futures::Stream<Item = T> + Send + 'static,
) -> Subscription<T> {
    use iced::advanced::subscription::{from_recipe, EventStream, Hasher, Recipe};

    struct IdentifiedStream<T> {
        id: String,
        stream: futures::stream::BoxStream<'static, T>,
    }

    impl<T: 'static> Recipe for IdentifiedStream<T> {
        type Output = T;

        fn hash(&self, state: &mut Hasher) {
            use std::hash::Hash;
            std::any::TypeId::of::<Self>().hash(state);
            self.id.hash(state);
        }

        fn stream(self: Box<Self>, _input: EventStream) -> futures::stream::BoxStream<'static, T> {
            self.stream
        }
    }

    from_recipe(IdentifiedStream {
        id,
        stream: Box::pin(stream),
    })
}

/// Adapts a broadcast receiver into a stream, skipping lag gaps (stale
/// orientation samples are worthless anyway - the newest always wins).
fn broadcast_events<T: Clone + Send + 'static>(
    rx: broadcast::Receiver<T>,
) -> impl futures::Stream<Item = T> {
    let stream = BroadcastStream::new(rx);
    iced::futures::stream::unfold(stream, |mut stream| async {
        while let Some(next) = stream.next().await {
            match next {
                Ok(value) => return Some((value, stream)),
                Err(_) => continue,
            }
        }
        None
    })
}
