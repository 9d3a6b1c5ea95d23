//! Orientation sample delivery.
//!
//! The screen subscribes while visible and unsubscribes on teardown so no
//! producer task outlives it. Desktops have no accelerometer, so the default
//! backend synthesizes a gentle wobble; a device backend would implement the
//! same trait.

use std::f32::consts::TAU;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::interaction::OrientationSample;

/// Gravity along z when the device lies flat, in m/s².
const GRAVITY: f32 = 9.81;

/// Supplies a stream of [`OrientationSample`]s at a bounded rate.
pub trait OrientationSource {
    /// Begins delivery (idempotent) and returns a receiver for samples.
    fn subscribe(&mut self) -> broadcast::Receiver<OrientationSample>;

    /// Stops delivery and releases the producer. Must be a no-op when
    /// called again.
    fn unsubscribe(&mut self);
}

/// Synthetic accelerometer: a slow sinusoidal sway plus occasional random
/// drift, delivered at a fixed rate.
#[derive(Debug)]
pub struct SimulatedOrientation {
    rate_hz: u32,
    tx: broadcast::Sender<OrientationSample>,
    cancel: Option<CancellationToken>,
}

impl SimulatedOrientation {
    pub fn new(rate_hz: u32) -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { rate_hz: rate_hz.max(1), tx, cancel: None }
    }
}

impl OrientationSource for SimulatedOrientation {
    fn subscribe(&mut self) -> broadcast::Receiver<OrientationSample> {
        let rx = self.tx.subscribe();
        if self.cancel.is_some() {
            return rx;
        }
        debug!(rate_hz = self.rate_hz, "starting simulated orientation");

        let cancel = CancellationToken::new();
        self.cancel = Some(cancel.clone());
        let tx = self.tx.clone();
        let period = Duration::from_secs_f64(1.0 / f64::from(self.rate_hz));
        // Full sway roughly every four seconds regardless of sample rate.
        let phase_step = TAU / (self.rate_hz as f32 * 4.0);
        tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            let mut interval = tokio::time::interval(period);
            let mut phase: f32 = 0.0;
            let mut drift = (0.0f32, 0.0f32);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = interval.tick() => {
                        phase += phase_step;
                        if rng.gen::<f32>() < 0.02 {
                            drift = (rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5));
                        }
                        let sample = OrientationSample {
                            x: phase.sin() * 1.2 + drift.0,
                            y: (phase * 0.7).cos() * 1.2 + drift.1,
                            z: GRAVITY,
                        };
                        if tx.send(sample).is_err() {
                            // All receivers gone; keep running until
                            // unsubscribed so a remount can re-attach.
                        }
                    }
                }
            }
            debug!("simulated orientation stopped");
        });
        rx
    }

    fn unsubscribe(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}

impl Drop for SimulatedOrientation {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Replays a fixed sequence at a fixed interval, then stops. Intended for
/// deterministic tests and demos.
#[derive(Debug)]
pub struct ScriptedOrientation {
    samples: Vec<OrientationSample>,
    interval: Duration,
    tx: broadcast::Sender<OrientationSample>,
    cancel: Option<CancellationToken>,
}

impl ScriptedOrientation {
    pub fn new(samples: Vec<OrientationSample>, interval: Duration) -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { samples, interval, tx, cancel: None }
    }
}

impl OrientationSource for ScriptedOrientation {
    fn subscribe(&mut self) -> broadcast::Receiver<OrientationSample> {
        let rx = self.tx.subscribe();
        if self.cancel.is_some() {
            return rx;
        }
        let cancel = CancellationToken::new();
        self.cancel = Some(cancel.clone());
        let tx = self.tx.clone();
        let samples = self.samples.clone();
        let period = self.interval;
        tokio::spawn(async move {
            for sample in samples {
                tokio::select! {
                    _ = cancel.cancelled() => return,
                    _ = tokio::time::sleep(period) => {
                        if tx.send(sample).is_err() {
                            return;
                        }
                    }
                }
            }
        });
        rx
    }

    fn unsubscribe(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}

/// Sensor-absent device: subscribing succeeds but no sample ever arrives,
/// leaving tilt at zero without failing the screen.
#[derive(Debug, Default)]
pub struct NullOrientation {
    tx: Option<broadcast::Sender<OrientationSample>>,
}

impl OrientationSource for NullOrientation {
    fn subscribe(&mut self) -> broadcast::Receiver<OrientationSample> {
        // Hold the sender so the channel stays open and silent.
        let tx = self.tx.get_or_insert_with(|| broadcast::channel(1).0);
        tx.subscribe()
    }

    fn unsubscribe(&mut self) {
        self.tx = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn scripted_source_replays_in_order() {
        let script = vec![
            OrientationSample { x: 1.0, y: 0.0, z: GRAVITY },
            OrientationSample { x: 0.0, y: 2.0, z: GRAVITY },
        ];
        let mut source = ScriptedOrientation::new(script.clone(), Duration::from_millis(10));
        let mut rx = source.subscribe();
        assert_eq!(rx.recv().await.unwrap(), script[0]);
        assert_eq!(rx.recv().await.unwrap(), script[1]);
        // Sequence exhausted and the source dropped: channel closes.
        drop(source);
        assert!(rx.recv().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_source_delivers_and_stops() {
        let mut source = SimulatedOrientation::new(50);
        let mut rx = source.subscribe();
        let sample = rx.recv().await.unwrap();
        assert_eq!(sample.z, GRAVITY);

        source.unsubscribe();
        source.unsubscribe(); // idempotent
        tokio::task::yield_now().await;
    }

    #[tokio::test]
    async fn null_source_never_delivers() {
        let mut source = NullOrientation::default();
        let mut rx = source.subscribe();
        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
        source.unsubscribe();
        source.unsubscribe();
    }
}
