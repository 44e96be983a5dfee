//! Cooperative cancellation and inter-step pacing.
//!
//! A run checks its [CancelToken] between discrete steps; the configurable
//! delay between steps is the only blocking point and is itself sliced so a
//! cancellation interrupts the wait promptly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A shared flag that stops an in-progress run at its next step boundary.
///
/// Clones share the same flag, so a token can be handed to another thread
/// (or a sink callback) while the run holds its own copy.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// The per-step pause applied between expansion cycles and path emissions.
#[derive(Clone, Debug)]
pub struct StepPace {
    delay: Duration,
    cancel: CancelToken,
}

impl Default for StepPace {
    fn default() -> StepPace {
        StepPace::new(crate::DEFAULT_STEP_DELAY, CancelToken::new())
    }
}

impl StepPace {
    pub fn new(delay: Duration, cancel: CancelToken) -> StepPace {
        StepPace { delay, cancel }
    }

    /// Zero delay with a fresh token; useful for tests and benchmarks.
    pub fn instant() -> StepPace {
        StepPace::new(Duration::ZERO, CancelToken::new())
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Waits out the inter-step delay. Returns `false` as soon as the token
    /// is cancelled, including mid-wait.
    pub fn pause(&self) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        const SLICE: Duration = Duration::from_millis(10);
        let mut remaining = self.delay;
        while !remaining.is_zero() {
            let step = remaining.min(SLICE);
            thread::sleep(step);
            remaining -= step;
            if self.cancel.is_cancelled() {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn pause_reports_cancellation() {
        let pace = StepPace::instant();
        assert!(pace.pause());
        pace.cancel_token().cancel();
        assert!(!pace.pause());
    }

    #[test]
    fn cancellation_interrupts_a_long_delay() {
        let token = CancelToken::new();
        let pace = StepPace::new(Duration::from_secs(60), token.clone());
        let waiter = thread::spawn(move || pace.pause());
        thread::sleep(Duration::from_millis(30));
        token.cancel();
        assert!(!waiter.join().unwrap());
    }
}
