//! # Engine Lifecycle & Render Loop
//!
//! The engine handle ties the pipeline together: pointer samples flow
//! through the tracker into the live-set, and each host-driven frame pass
//! prunes expired prints and renders the survivors with an age-based fade.
//!
//! Two states, RUNNING and STOPPED. `start()` and `stop()` are idempotent;
//! while STOPPED every entry point is inert, which is the single-threaded
//! rendition of "no callback fires after stop returns". An engine built
//! without a surface is permanently inert and never errors.

use sandtrail_shared::Rect;

use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::input::{PointerKind, PointerSample, Tracker};
use crate::render::{PrintRenderer, PrintStyle, RenderCommand, SpriteId};
use crate::surface::{Surface, Viewport};
use crate::trail::Trail;

/// Lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EngineState {
    /// Listeners detached, loop cancelled, live-set empty.
    Stopped,
    /// Accepting input and producing frames.
    Running,
}

/// Counters accumulated over an engine's lifetime.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineStats {
    /// Frame passes completed.
    pub frames: u64,
    /// Prints appended to the live-set.
    pub prints_emitted: u64,
    /// Prints removed by age.
    pub prints_expired: u64,
    /// Prints evicted by the live cap.
    pub prints_evicted: u64,
}

/// The print engine handle. One instance is active per page context; a
/// host-side coordinator swaps instances on navigation.
pub struct Engine {
    /// Lifecycle state.
    state: EngineState,
    /// Static tuning, fixed at construction.
    config: EngineConfig,
    /// Dynamic style values, updated by the host via [`Self::set_style`].
    style: PrintStyle,
    /// Region where prints must never land (e.g. the wave band).
    exclusion: Option<Rect>,
    /// Drawing surface; `None` makes the engine inert.
    surface: Option<Surface>,
    /// Pointer tracking state.
    tracker: Tracker,
    /// The live-set.
    trail: Trail,
    /// Configured shape renderer strategy.
    renderer: PrintRenderer,
    /// Monotonic time source.
    clock: Box<dyn Clock>,
    /// Reused command batch; rebuilt every frame.
    batch: Vec<RenderCommand>,
    /// Lifetime counters.
    stats: EngineStats,
}

impl Engine {
    /// Creates an engine with the production clock.
    ///
    /// Pass `None` for the viewport when the drawing surface is absent;
    /// the engine then degrades to an inert handle whose `start`/`stop`
    /// are no-ops.
    #[must_use]
    pub fn new(config: EngineConfig, viewport: Option<Viewport>) -> Self {
        Self::with_clock(config, viewport, Box::new(SystemClock::new()))
    }

    /// Creates an engine with an explicit clock (tests, headless demos).
    #[must_use]
    pub fn with_clock(
        config: EngineConfig,
        viewport: Option<Viewport>,
        clock: Box<dyn Clock>,
    ) -> Self {
        if viewport.is_none() {
            tracing::debug!("no drawing surface, engine will be inert");
        }

        Self {
            state: EngineState::Stopped,
            style: PrintStyle::from_config(&config),
            renderer: PrintRenderer::from_config(&config),
            trail: Trail::new(config.max_live),
            exclusion: None,
            surface: viewport.map(Surface::new),
            tracker: Tracker::new(),
            clock,
            batch: Vec::new(),
            stats: EngineStats::default(),
            config,
        }
    }

    /// Starts the engine: performs the initial resize and begins accepting
    /// pointer samples and frame calls. Idempotent; inert without a surface.
    pub fn start(&mut self) {
        if self.state == EngineState::Running {
            return;
        }
        let Some(surface) = self.surface else {
            return;
        };

        // Initial resize against whatever viewport we were handed last.
        let viewport = surface.viewport();
        self.resize(viewport);

        self.state = EngineState::Running;
        tracing::debug!(?viewport, "print engine started");
    }

    /// Stops the engine: clears the live-set and surface, resets tracking
    /// state, and ignores all further input until `start()`. Idempotent.
    ///
    /// The final batch - just the surface clear - stays available through
    /// [`Self::last_batch`] for the host to submit once.
    pub fn stop(&mut self) {
        if self.state == EngineState::Stopped {
            return;
        }

        self.state = EngineState::Stopped;
        self.trail.clear();
        self.tracker.reset();

        self.batch.clear();
        if let Some(surface) = &self.surface {
            surface.begin_frame(&mut self.batch);
        }

        tracing::debug!("print engine stopped");
    }

    /// True while the engine is accepting input and producing frames.
    /// The host keeps rescheduling frame calls as long as this holds.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    /// Records a pointer-down, classifying the device for later moves.
    pub fn pointer_pressed(&mut self, kind: PointerKind) {
        if self.state != EngineState::Running {
            return;
        }
        self.tracker.pointer_pressed(kind);
    }

    /// Records a pointer-up, ending any active touch press.
    pub fn pointer_released(&mut self) {
        if self.state != EngineState::Running {
            return;
        }
        self.tracker.pointer_released();
    }

    /// Feeds one pointer-move sample through the gating rules, emitting a
    /// print when it qualifies.
    pub fn pointer_moved(&mut self, sample: PointerSample) {
        if self.state != EngineState::Running {
            return;
        }

        // The stride gate scales with the dynamic size factor so spacing
        // tracks print size without a config reload.
        let min_stride = self.config.stride * self.style.scale_factor;
        let Some(emission) = self.tracker.sample(sample, min_stride, self.exclusion.as_ref())
        else {
            return;
        };

        let now = self.clock.now_ms();
        if self.trail.emit(emission.position, emission.heading, now) {
            self.stats.prints_evicted += 1;
        }
        self.stats.prints_emitted += 1;
    }

    /// Recomputes surface dimensions for a new viewport. Safe to call in
    /// any state; a resize while stopped just updates the stored geometry.
    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(surface) = &mut self.surface {
            surface.resize(viewport);
        }
    }

    /// Runs one frame pass: clear, prune, fade, render, newest first.
    ///
    /// Returns the command batch for the host to submit, or an empty slice
    /// while stopped (the host should also stop rescheduling - see
    /// [`Self::is_running`]).
    pub fn frame(&mut self) -> &[RenderCommand] {
        if self.state != EngineState::Running {
            return &[];
        }
        let Some(surface) = &self.surface else {
            return &[];
        };

        self.batch.clear();
        surface.begin_frame(&mut self.batch);

        let now = self.clock.now_ms();
        let expiry = self.config.expiry_ms;

        // Prune before drawing, unconditionally.
        let expired = self.trail.prune(now, expiry);
        self.stats.prints_expired += expired as u64;

        for print in self.trail.iter_newest_first() {
            // Post-prune every age is strictly below expiry, so the fade
            // lands in (0, 1].
            let alpha = (1.0 - print.age_ms(now) / expiry).max(0.0) as f32;
            self.renderer.render(print, alpha, &self.style, &mut self.batch);
        }

        self.stats.frames += 1;
        &self.batch
    }

    /// The most recent command batch without running a new frame pass.
    /// After `stop()` this holds the final surface clear.
    #[must_use]
    pub fn last_batch(&self) -> &[RenderCommand] {
        &self.batch
    }

    /// Updates the two dynamic style values: print scale factor and
    /// left/right gap. Non-finite or non-positive values are ignored.
    pub fn set_style(&mut self, scale_factor: f32, gap: f32) {
        if scale_factor.is_finite() && scale_factor > 0.0 {
            self.style.scale_factor = scale_factor;
        }
        if gap.is_finite() && gap > 0.0 {
            self.style.gap = gap;
        }
    }

    /// Sets or clears the exclusion region (current bounds of the area
    /// where prints must never land).
    pub fn set_exclusion_region(&mut self, region: Option<Rect>) {
        self.exclusion = region;
    }

    /// Registers the loaded sprite with the sprite strategy. No-op for
    /// polygon engines.
    pub fn set_sprite(&mut self, sprite: SpriteId) {
        self.renderer.set_sprite(sprite);
    }

    /// Number of live prints.
    #[must_use]
    pub fn live_prints(&self) -> usize {
        self.trail.len()
    }

    /// Lifetime counters.
    #[must_use]
    pub fn stats(&self) -> EngineStats {
        self.stats
    }
}
