//! Looping animation clock feeding `current_time` to the trail layer.

use std::time::Duration;

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};
use tracing::debug;

/// Roughly one display frame.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Maps elapsed wall-clock time onto `0..loop_length`.
///
/// One cycle lasts `loop_length * 60 / speed` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    loop_length: f64,
    speed: f64,
}

impl AnimationClock {
    pub fn new(loop_length: f64, speed: f64) -> Self {
        Self { loop_length, speed }
    }

    pub fn loop_length(&self) -> f64 {
        self.loop_length
    }

    pub fn cycle_seconds(&self) -> f64 {
        self.loop_length * 60.0 / self.speed
    }

    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let cycle = self.cycle_seconds();
        let phase = elapsed.as_secs_f64().rem_euclid(cycle);
        self.loop_length * phase / cycle
    }
}

/// A running clock. Each tick overwrites the single published value; readers
/// only ever see the latest one.
pub struct AnimationLoop {
    current: watch::Receiver<f64>,
    task: Option<JoinHandle<()>>,
}

impl AnimationLoop {
    /// Must be called from within a tokio runtime.
    pub fn start(clock: AnimationClock, frame_interval: Duration) -> Self {
        let (sender, current) = watch::channel(0.0);

        let task = tokio::spawn(async move {
            let started = Instant::now();
            let mut ticker = tokio::time::interval(frame_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if sender.send(clock.value_at(started.elapsed())).is_err() {
                    break;
                }
            }
        });

        debug!(
            loop_length = clock.loop_length(),
            cycle_seconds = clock.cycle_seconds(),
            "animation started"
        );

        Self {
            current,
            task: Some(task),
        }
    }

    pub fn current_time(&self) -> f64 {
        *self.current.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.current.clone()
    }

    /// Stop ticking. Once this returns no further values are published.
    pub async fn stop(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
            debug!("animation stopped");
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
