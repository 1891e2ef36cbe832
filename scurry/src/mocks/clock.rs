use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use parking_lot::RwLock;

use crate::animations::FrameClock;

/// Mock [`FrameClock`] for testing purposes: each tick advances a synthetic timeline by a fixed
/// step, so a whole run plays out in microseconds of wall time, deterministically.
#[derive(Clone, Debug)]
pub struct MockClock {
    now: Arc<RwLock<u64>>,
    /// Synthetic milliseconds added by each tick.
    step: u64,
}

impl MockClock {
    pub fn new(step: u64) -> Self {
        Self {
            now: Arc::new(RwLock::new(0)),
            step,
        }
    }

    /// Moves the synthetic timeline to an absolute time.
    pub fn set(&self, ms: u64) {
        *self.now.write() = ms;
    }
}

impl FrameClock for MockClock {
    fn now(&self) -> u64 {
        *self.now.read()
    }

    fn tick(&self, _fps: u8) -> BoxFuture<'_, ()> {
        let now = self.now.clone();
        let step = self.step;
        async move {
            *now.write() += step;
            // Let other tasks breathe between synthetic frames.
            tokio::task::yield_now().await;
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[serial]
    #[scurry_macros::test]
    async fn test_mock_clock_steps() {
        let clock = MockClock::new(250);
        assert_eq!(clock.now(), 0);

        clock.tick(60).await;
        assert_eq!(clock.now(), 250);
        clock.tick(60).await;
        assert_eq!(clock.now(), 500);

        clock.set(2000);
        assert_eq!(clock.now(), 2000);
    }

    #[serial]
    #[scurry_macros::test]
    async fn test_mock_clock_clones_share_the_timeline() {
        let clock = MockClock::new(100);
        let clone = clock.clone();

        clock.tick(60).await;
        assert_eq!(clone.now(), 100, "Clones drive the same timeline.");
    }
}
