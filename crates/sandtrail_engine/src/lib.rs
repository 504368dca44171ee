//! # Sandtrail Print Engine
//!
//! A cursor-following footprint/paw-print particle engine designed for:
//! - Stride-gated input sampling (prints land a footstep apart, not per pixel)
//! - Timed particle lifecycle (spawn, age, fade, expire)
//! - Alternating left/right placement with rotation to direction of travel
//! - Pluggable print rendering (procedural silhouette or sprite stamp)
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        PRINT PIPELINE                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Pointer Samples → Input Tracker → Emitter → Live-Set        │
//! │        ↓                ↓             ↓          ↓           │
//! │   Exclusion        Stride Gate    Alternation  Prune/Fade    │
//! │                                                  ↓           │
//! │                              Shape Renderer → Command Batch  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! The engine is host-driven and single-threaded. The host delivers pointer
//! samples and calls [`Engine::frame`] once per repaint; the engine hands
//! back a [`RenderCommand`] batch and never touches a real drawing API.
//! Everything is tolerant of a missed frame - worst case is a visually
//! silent engine, never a crash.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod render;
pub mod surface;
pub mod trail;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{EngineConfig, RendererKind};
pub use engine::{Engine, EngineStats};
pub use error::ConfigError;
pub use input::{PointerKind, PointerSample, Tracker};
pub use render::{Color, Placement, PolygonPrints, PrintRenderer, RenderCommand, SpriteId, SpritePrints};
pub use surface::{Surface, Viewport};
pub use trail::{Print, Trail};
