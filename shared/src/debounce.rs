use std::{cell::Cell, time::Duration};

use async_trait::async_trait;

/// Timer seam so debouncing works on wasm (`gloo-timers`) and natively
/// (`tokio`), and tests can drive time explicitly.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Trailing-edge debouncer.
///
/// Each call to [`Debouncer::settle`] bumps a generation counter, waits
/// out the quiet period, and reports whether it is still the newest call.
/// Superseded callers simply drop their work.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Cell<u64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Cell::new(0),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn arm(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_latest(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// Invalidate whatever call is currently waiting.
    pub fn cancel(&self) {
        self.arm();
    }

    pub async fn settle(&self, sleeper: &dyn Sleeper) -> bool {
        let generation = self.arm();
        sleeper.sleep(self.delay).await;
        self.is_latest(generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn only_the_last_call_survives() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let sleeper = TokioSleeper;
        let first = debouncer.settle(&sleeper);
        let second = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            debouncer.settle(&sleeper).await
        };
        let (first, second) = tokio::join!(first, second);
        assert!(!first);
        assert!(second);
    }

    #[test]
    fn cancel_invalidates_pending_generation() {
        let debouncer = Debouncer::new(Duration::from_millis(10));
        let generation = debouncer.arm();
        debouncer.cancel();
        assert!(!debouncer.is_latest(generation));
    }
}
