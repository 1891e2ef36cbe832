use std::fmt::Debug;
use std::time::Duration;

use dyn_clone::DynClone;
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::time::Instant;

/// The per-frame scheduling primitive driving runner loops.
///
/// Runners never sleep on their own: they read the current time from their clock and yield until
/// the next frame boundary. Swapping the clock for the mocked one drives a runner with synthetic
/// time, no real display loop required.
pub trait FrameClock: Debug + DynClone + Send + Sync {
    /// Milliseconds elapsed since the clock's epoch.
    fn now(&self) -> u64;

    /// Yields until the next frame boundary for the given frame rate.
    fn tick(&self, fps: u8) -> BoxFuture<'_, ()>;
}
dyn_clone::clone_trait_object!(FrameClock);

/// Wall-clock implementation backed by tokio time.
#[derive(Clone, Debug)]
pub struct TokioClock {
    epoch: Instant,
}

impl Default for TokioClock {
    fn default() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl FrameClock for TokioClock {
    fn now(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn tick(&self, fps: u8) -> BoxFuture<'_, ()> {
        let frame = Duration::from_millis(1000 / u64::from(fps.max(1)));
        tokio::time::sleep(frame).boxed()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use crate::pause;

    use super::*;

    #[serial]
    #[scurry_macros::test]
    async fn test_tokio_clock_advances() {
        let clock = TokioClock::default();
        let before = clock.now();
        pause!(50);
        let after = clock.now();
        assert!(after >= before + 50, "Clock must follow wall time.");
    }

    #[serial]
    #[scurry_macros::test]
    async fn test_tokio_clock_tick_duration() {
        let clock = TokioClock::default();
        let before = clock.now();
        clock.tick(10).await; // 100ms frames
        let after = clock.now();
        assert!(after - before >= 100);
    }

    #[scurry_macros::test]
    async fn test_tick_survives_zero_fps() {
        // 0 fps is clamped to one frame per second rather than dividing by zero.
        let clock = TokioClock::default();
        let _ = clock.tick(0).await;
    }
}
