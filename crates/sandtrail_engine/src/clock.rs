//! Monotonic time source for print timestamps and age computation.
//!
//! The engine never reads wall-clock time directly; everything goes through
//! [`Clock`] so tests and headless hosts can drive time by hand.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// A monotonic clock reporting milliseconds since an arbitrary origin.
///
/// `Send` so an engine parked inside a coordinator can move with it.
pub trait Clock: Send {
    /// Current time in milliseconds. Never decreases.
    fn now_ms(&self) -> f64;
}

/// Production clock backed by [`Instant`].
#[derive(Debug)]
pub struct SystemClock {
    /// Origin instant; `now_ms` reports elapsed time since construction.
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock anchored at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock for tests and deterministic demos.
///
/// Clones share the same underlying time, so one handle can be moved into
/// the engine while another advances it from the outside.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    /// Current time, stored as f64 bits for lock-free sharing.
    now_bits: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock at t = 0 ms.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by `delta_ms` milliseconds.
    pub fn advance(&self, delta_ms: f64) {
        let now = f64::from_bits(self.now_bits.load(Ordering::Relaxed));
        self.now_bits
            .store((now + delta_ms).to_bits(), Ordering::Relaxed);
    }

    /// Sets the clock to an absolute time in milliseconds.
    pub fn set(&self, now_ms: f64) {
        self.now_bits.store(now_ms.to_bits(), Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        f64::from_bits(self.now_bits.load(Ordering::Relaxed))
    }
}
