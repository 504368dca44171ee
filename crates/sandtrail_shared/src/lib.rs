//! # Sandtrail Shared Types
//!
//! Math primitives and engine constants used by the print engine and any
//! host-side backend that submits its render batches.
//!
//! No rendering, no windowing, no I/O. Anything graphical lives behind the
//! `RenderCommand` boundary in `sandtrail_engine`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod constants;
pub mod math;

pub use math::{Rect, Vec2};
