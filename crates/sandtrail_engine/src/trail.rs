//! # Print Emitter & Live-Set
//!
//! A [`Print`] is one timestamped, positioned, oriented particle. The
//! [`Trail`] is the insertion-ordered live-set: the emitter appends, the
//! frame pass prunes by age, and no entry is ever mutated in place.

use sandtrail_shared::Vec2;

/// One footstep/paw-print mark. Immutable once created.
#[derive(Clone, Copy, Debug)]
pub struct Print {
    /// Position in logical surface coordinates.
    pub position: Vec2,
    /// Travel direction at creation (radians, includes the quarter-turn
    /// offset); 0.0 when there was no prior sample.
    pub heading: f32,
    /// Monotonic sequence index; parity alternates left/right placement.
    pub alternation: u64,
    /// Creation timestamp (monotonic milliseconds).
    pub created_at_ms: f64,
}

impl Print {
    /// Age of this print at the given time.
    #[must_use]
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.created_at_ms
    }
}

/// The ordered live-set of not-yet-expired prints.
#[derive(Debug)]
pub struct Trail {
    /// Live prints, oldest first.
    prints: Vec<Print>,
    /// Next alternation index to assign.
    next_alternation: u64,
    /// Hard cap on live prints; the oldest is evicted beyond this.
    max_live: usize,
}

impl Trail {
    /// Creates an empty trail with the given live-print cap.
    #[must_use]
    pub fn new(max_live: usize) -> Self {
        Self {
            prints: Vec::with_capacity(max_live.min(1024)),
            next_alternation: 0,
            max_live,
        }
    }

    /// Appends a new print with the next alternation index.
    ///
    /// Returns `true` if the live cap forced eviction of the oldest print.
    pub fn emit(&mut self, position: Vec2, heading: f32, now_ms: f64) -> bool {
        let evicted = if self.prints.len() >= self.max_live {
            self.prints.remove(0);
            true
        } else {
            false
        };

        self.prints.push(Print {
            position,
            heading,
            alternation: self.next_alternation,
            created_at_ms: now_ms,
        });
        self.next_alternation += 1;

        evicted
    }

    /// Removes every print whose age has reached the expiry threshold.
    ///
    /// Runs once per frame pass, unconditionally - even when rendering is
    /// otherwise skipped - so the live-set never grows while hidden.
    /// Returns the number of prints removed.
    pub fn prune(&mut self, now_ms: f64, expiry_ms: f64) -> usize {
        let before = self.prints.len();
        self.prints.retain(|print| print.age_ms(now_ms) < expiry_ms);
        before - self.prints.len()
    }

    /// Iterates live prints newest first - the fixed render order.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &Print> {
        self.prints.iter().rev()
    }

    /// Number of live prints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prints.len()
    }

    /// True when no prints are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prints.is_empty()
    }

    /// Drops every live print. The alternation counter keeps counting so
    /// parity stays continuous across a stop/start cycle.
    pub fn clear(&mut self) {
        self.prints.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_assigns_consecutive_alternation() {
        let mut trail = Trail::new(16);
        trail.emit(Vec2::new(0.0, 0.0), 0.0, 0.0);
        trail.emit(Vec2::new(10.0, 0.0), 0.0, 16.0);

        let indices: Vec<u64> = trail.iter_newest_first().map(|p| p.alternation).collect();
        assert_eq!(indices, vec![1, 0]);
    }

    #[test]
    fn test_prune_removes_age_at_threshold() {
        let mut trail = Trail::new(16);
        trail.emit(Vec2::ZERO, 0.0, 0.0);
        trail.emit(Vec2::new(100.0, 0.0), 0.0, 500.0);

        // First print is exactly at expiry: removed. Second survives.
        let removed = trail.prune(1200.0, 1200.0);
        assert_eq!(removed, 1);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.iter_newest_first().next().unwrap().alternation, 1);
    }

    #[test]
    fn test_prune_keeps_strictly_younger() {
        let mut trail = Trail::new(16);
        trail.emit(Vec2::ZERO, 0.0, 0.0);

        assert_eq!(trail.prune(1199.9, 1200.0), 0);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut trail = Trail::new(2);
        trail.emit(Vec2::new(0.0, 0.0), 0.0, 0.0);
        trail.emit(Vec2::new(1.0, 0.0), 0.0, 1.0);
        let evicted = trail.emit(Vec2::new(2.0, 0.0), 0.0, 2.0);

        assert!(evicted);
        assert_eq!(trail.len(), 2);

        // Oldest (alternation 0) is gone, newest first order holds.
        let indices: Vec<u64> = trail.iter_newest_first().map(|p| p.alternation).collect();
        assert_eq!(indices, vec![2, 1]);
    }

    #[test]
    fn test_clear_preserves_alternation_counter() {
        let mut trail = Trail::new(16);
        trail.emit(Vec2::ZERO, 0.0, 0.0);
        trail.clear();
        trail.emit(Vec2::ZERO, 0.0, 0.0);

        assert_eq!(trail.iter_newest_first().next().unwrap().alternation, 1);
    }
}
