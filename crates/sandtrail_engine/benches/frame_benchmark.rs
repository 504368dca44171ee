//! Frame pass benchmarks: prune + fade + batch build at the live cap, and
//! the input gating path under a stream of pointer samples.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sandtrail_engine::{
    Engine, EngineConfig, ManualClock, PointerKind, PointerSample, Viewport,
};
use sandtrail_shared::Vec2;

fn full_trail_engine() -> (Engine, ManualClock) {
    let mut config = EngineConfig::footprints();
    config.stride = 1.0;

    let clock = ManualClock::new();
    let mut engine = Engine::with_clock(
        config,
        Some(Viewport::new(1920.0, 1080.0, 2.0)),
        Box::new(clock.clone()),
    );
    engine.start();

    // Fill the live-set to the cap.
    for i in 0..config.max_live {
        engine.pointer_moved(PointerSample::new(
            Vec2::new((i as f32) * 5.0, 500.0),
            PointerKind::Mouse,
        ));
        clock.advance(1.0);
    }

    (engine, clock)
}

fn bench_frame_pass(c: &mut Criterion) {
    let (mut engine, clock) = full_trail_engine();
    // Freeze time so the live-set stays at the cap for every iteration.
    clock.set(300.0);

    c.bench_function("frame_pass_at_live_cap", |b| {
        b.iter(|| black_box(engine.frame().len()));
    });
}

fn bench_input_gating(c: &mut Criterion) {
    let config = EngineConfig::footprints();
    let clock = ManualClock::new();
    let mut engine = Engine::with_clock(
        config,
        Some(Viewport::new(1920.0, 1080.0, 2.0)),
        Box::new(clock.clone()),
    );
    engine.start();

    let mut x = 0.0f32;
    c.bench_function("pointer_move_gating", |b| {
        b.iter(|| {
            // Alternate sub-stride jitter and full strides.
            x += 50.0;
            engine.pointer_moved(PointerSample::new(
                Vec2::new(black_box(x % 1920.0), 500.0),
                PointerKind::Mouse,
            ));
            clock.advance(0.01);
        });
    });
}

criterion_group!(benches, bench_frame_pass, bench_input_gating);
criterion_main!(benches);
