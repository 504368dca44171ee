//! # Engine Coordinator
//!
//! Owns the single active engine for a page context. Host callback sites
//! (pointer events, resize, the repaint driver) each hold a clone of an
//! `Arc<Coordinator>` and forward into whatever engine is active; page
//! navigation swaps engines with stop-before-start semantics.
//!
//! The lock exists so independent callback sites can reach the one engine,
//! not for parallelism - callbacks run to completion one at a time.

use parking_lot::Mutex;

use sandtrail_engine::{Engine, EngineStats, PointerKind, PointerSample, RenderCommand, Viewport};

/// Holds at most one active print engine.
#[derive(Default)]
pub struct Coordinator {
    /// The active engine, if any page wants prints.
    active: Mutex<Option<Engine>>,
}

impl Coordinator {
    /// Creates a coordinator with no active engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a new engine, stopping and dropping the previous one
    /// first. The incoming engine is started before this returns.
    pub fn activate(&self, mut engine: Engine) {
        let mut active = self.active.lock();

        if let Some(previous) = active.as_mut() {
            previous.stop();
            tracing::info!("stopped outgoing print engine");
        }

        engine.start();
        tracing::info!(running = engine.is_running(), "activated print engine");
        *active = Some(engine);
    }

    /// Stops and drops the active engine, if any. Idempotent.
    pub fn deactivate(&self) {
        let mut active = self.active.lock();
        if let Some(engine) = active.as_mut() {
            engine.stop();
            tracing::info!("deactivated print engine");
        }
        *active = None;
    }

    /// True if an engine is active and running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.lock().as_ref().is_some_and(Engine::is_running)
    }

    /// Forwards a pointer-down to the active engine.
    pub fn pointer_pressed(&self, kind: PointerKind) {
        if let Some(engine) = self.active.lock().as_mut() {
            engine.pointer_pressed(kind);
        }
    }

    /// Forwards a pointer-up to the active engine.
    pub fn pointer_released(&self) {
        if let Some(engine) = self.active.lock().as_mut() {
            engine.pointer_released();
        }
    }

    /// Forwards a pointer-move sample to the active engine.
    pub fn pointer_moved(&self, sample: PointerSample) {
        if let Some(engine) = self.active.lock().as_mut() {
            engine.pointer_moved(sample);
        }
    }

    /// Forwards a viewport resize to the active engine.
    pub fn resize(&self, viewport: Viewport) {
        if let Some(engine) = self.active.lock().as_mut() {
            engine.resize(viewport);
        }
    }

    /// Runs one frame pass on the active engine and hands the batch to the
    /// host's backend. Returns an empty batch when nothing is active.
    #[must_use]
    pub fn frame(&self) -> Vec<RenderCommand> {
        match self.active.lock().as_mut() {
            Some(engine) => engine.frame().to_vec(),
            None => Vec::new(),
        }
    }

    /// Lifetime counters of the active engine, if any.
    #[must_use]
    pub fn stats(&self) -> Option<EngineStats> {
        self.active.lock().as_ref().map(Engine::stats)
    }
}
