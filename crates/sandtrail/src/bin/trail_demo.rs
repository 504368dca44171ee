//! # Trail Demo
//!
//! Headless driver: walks a simulated pointer across two "pages" - a
//! footprint landing page, then a paw-print projects page - through the
//! coordinator, and prints a frame-statistics summary for each.
//!
//! Run with: cargo run --bin trail_demo

use sandtrail::Coordinator;
use sandtrail_engine::{
    Engine, EngineConfig, ManualClock, PointerKind, PointerSample, SpriteId, Viewport,
};
use sandtrail_shared::{Rect, Vec2};

/// Simulated display: 60 fps on a 2x display.
const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0, 2.0);
/// Milliseconds per simulated frame.
const FRAME_MS: f64 = 16.0;
/// Frames to simulate per page.
const FRAMES_PER_PAGE: u32 = 240;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let coordinator = Coordinator::new();
    let clock = ManualClock::new();

    // Landing page: procedural footprints, waves along the bottom band.
    let mut landing = Engine::with_clock(
        EngineConfig::footprints(),
        Some(VIEWPORT),
        Box::new(clock.clone()),
    );
    landing.set_exclusion_region(Some(Rect::new(0.0, 620.0, VIEWPORT.width, 180.0)));
    coordinator.activate(landing);

    let commands = walk_page(&coordinator, &clock, PointerKind::Mouse);
    print_summary("LANDING (footprints)", &coordinator, commands);

    // Projects page: sprite paw prints, touch-driven.
    let mut projects = Engine::with_clock(
        EngineConfig::paw_prints(),
        Some(VIEWPORT),
        Box::new(clock.clone()),
    );
    projects.set_sprite(SpriteId(1));
    coordinator.activate(projects);

    coordinator.pointer_pressed(PointerKind::Touch);
    let commands = walk_page(&coordinator, &clock, PointerKind::Touch);
    coordinator.pointer_released();
    print_summary("PROJECTS (paw prints)", &coordinator, commands);

    coordinator.deactivate();
}

/// Drives a sinusoidal pointer walk for one page, returning the total
/// number of draw commands produced (preamble excluded).
fn walk_page(coordinator: &Coordinator, clock: &ManualClock, kind: PointerKind) -> usize {
    let mut draw_commands = 0usize;

    for frame in 0..FRAMES_PER_PAGE {
        let t = f64::from(frame) * FRAME_MS;

        // Pointer sweeps left to right with a gentle vertical sine.
        let x = (t / (f64::from(FRAMES_PER_PAGE) * FRAME_MS)) * f64::from(VIEWPORT.width);
        let y = 400.0 + 150.0 * (t / 400.0).sin();
        coordinator.pointer_moved(PointerSample::new(
            Vec2::new(x as f32, y as f32),
            kind,
        ));

        let batch = coordinator.frame();
        draw_commands += batch.len().saturating_sub(2);

        clock.advance(FRAME_MS);
    }

    draw_commands
}

/// Prints a per-page summary in the house style.
fn print_summary(page: &str, coordinator: &Coordinator, draw_commands: usize) {
    let Some(stats) = coordinator.stats() else {
        return;
    };

    println!("┌─ {page} ─────────────────────────────────────");
    println!("│ Frames rendered:    {}", stats.frames);
    println!("│ Prints emitted:     {}", stats.prints_emitted);
    println!("│ Prints expired:     {}", stats.prints_expired);
    println!("│ Prints evicted:     {}", stats.prints_evicted);
    println!("│ Draw commands:      {draw_commands}");
    println!("└──────────────────────────────────────────────");
}
