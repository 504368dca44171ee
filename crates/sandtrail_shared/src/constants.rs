//! # Engine Tuning Constants
//!
//! Default tuning for the print engine presets.
//!
//! **NOTE:** These are compile-time defaults. Runtime overrides go through
//! `EngineConfig` (TOML) or `Engine::set_style`.

/// Minimum on-screen travel distance (logical px) between footprint samples.
pub const FOOTPRINT_STRIDE: f32 = 96.0;

/// Minimum on-screen travel distance (logical px) between paw-print samples.
pub const PAW_STRIDE: f32 = 72.0;

/// Lateral gap (logical px) between alternating left/right footprints.
pub const FOOTPRINT_GAP: f32 = 28.0;

/// Lateral gap (logical px) between alternating paw prints.
pub const PAW_GAP: f32 = 20.0;

/// Footprint lifetime before removal (milliseconds).
pub const FOOTPRINT_EXPIRY_MS: f64 = 1200.0;

/// Paw-print lifetime before removal (milliseconds).
pub const PAW_EXPIRY_MS: f64 = 1500.0;

/// Silhouette reference size: the polygon outline is authored at this height.
pub const REFERENCE_SIZE: f32 = 64.0;

/// Rendered footprint height (logical px) before the dynamic scale factor.
pub const FOOTPRINT_SIZE: f32 = 56.0;

/// Rendered paw-print height (logical px) before the dynamic scale factor.
pub const PAW_SIZE: f32 = 40.0;

/// Base opacity applied to sprite stamps on top of the age fade.
pub const SPRITE_BASE_OPACITY: f32 = 0.85;

/// Hard cap on concurrent live prints.
///
/// The live-set is pruned every frame, but if the surface is hidden for a
/// long stretch the host may stop driving frames while pointer input keeps
/// arriving. The cap bounds memory in that case by evicting the oldest.
pub const MAX_LIVE_PRINTS: usize = 256;

/// Quarter turn added to the travel angle so the silhouette's default
/// orientation (toes up) points along the direction of travel.
pub const HEADING_OFFSET: f32 = std::f32::consts::FRAC_PI_2;
