//! # Input Tracker
//!
//! Decides, for each raw pointer sample, whether a new print is emitted.
//!
//! Gating order per sample:
//! 1. Exclusion region - samples inside it are discarded without touching
//!    tracking state.
//! 2. Device gating - touch pointers only count while a press is active;
//!    mouse and pen count on any move.
//! 3. Stride gating - minimum travel distance from the last honored sample.

use sandtrail_shared::constants::HEADING_OFFSET;
use sandtrail_shared::{Rect, Vec2};

/// Pointer device classification, as reported by the host's event source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse pointer.
    Mouse,
    /// Touch contact.
    Touch,
    /// Stylus/pen.
    Pen,
}

impl PointerKind {
    /// True for touch contacts, which require an active press to emit.
    #[must_use]
    pub fn is_touch(self) -> bool {
        self == Self::Touch
    }
}

/// One raw pointer-move sample from the host.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
    /// Position in logical surface coordinates.
    pub position: Vec2,
    /// Device classification for this sample.
    pub kind: PointerKind,
}

impl PointerSample {
    /// Creates a new sample.
    #[must_use]
    pub const fn new(position: Vec2, kind: PointerKind) -> Self {
        Self { position, kind }
    }
}

/// A qualifying sample, ready for the emitter.
#[derive(Clone, Copy, Debug)]
pub struct Emission {
    /// Where the print lands.
    pub position: Vec2,
    /// Travel direction plus the quarter-turn shape offset; 0.0 for the
    /// first sample after start (no prior position to derive it from).
    pub heading: f32,
}

/// Per-engine pointer tracking state. Mutated only by the input path,
/// reset to sentinels on engine stop.
#[derive(Debug, Default)]
pub struct Tracker {
    /// Last honored sample position; `None` until the first emission.
    last_position: Option<Vec2>,
    /// Device classification recorded at the last pointer-down.
    active_kind: Option<PointerKind>,
    /// True between touch down and touch up.
    touch_pressed: bool,
}

impl Tracker {
    /// Creates a tracker with no prior sample.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer-down, classifying the device for subsequent moves.
    pub fn pointer_pressed(&mut self, kind: PointerKind) {
        self.active_kind = Some(kind);
        if kind.is_touch() {
            self.touch_pressed = true;
        }
    }

    /// Records a pointer-up, ending any active touch press.
    pub fn pointer_released(&mut self) {
        self.touch_pressed = false;
    }

    /// Applies the gating rules to one move sample.
    ///
    /// Returns the emission when the sample qualifies; updates the
    /// last-position state only in that case.
    pub fn sample(
        &mut self,
        sample: PointerSample,
        min_stride: f32,
        exclusion: Option<&Rect>,
    ) -> Option<Emission> {
        // No prints in the water.
        if let Some(region) = exclusion {
            if region.contains_y(sample.position.y) {
                return None;
            }
        }

        // A touch contact only walks while pressed. The classification
        // from pointer-down wins over the per-sample kind so a stray move
        // delivered before any down event stays gated.
        let kind = self.active_kind.unwrap_or(sample.kind);
        if kind.is_touch() && !self.touch_pressed {
            return None;
        }

        let heading = match self.last_position {
            Some(last) => {
                if sample.position.distance(last) <= min_stride {
                    return None;
                }
                let delta = sample.position - last;
                delta.y.atan2(delta.x) + HEADING_OFFSET
            }
            // First sample always qualifies, with a neutral orientation.
            None => 0.0,
        };

        self.last_position = Some(sample.position);
        Some(Emission {
            position: sample.position,
            heading,
        })
    }

    /// Resets tracking state to the no-prior-sample sentinels.
    pub fn reset(&mut self) {
        self.last_position = None;
        self.active_kind = None;
        self.touch_pressed = false;
    }

    /// Last honored sample position, if any.
    #[must_use]
    pub fn last_position(&self) -> Option<Vec2> {
        self.last_position
    }
}
