//! # Sandtrail Host Layer
//!
//! The thin layer between a host's event callbacks and the print engine:
//! a coordinator that owns at most one active engine per page context and
//! swaps instances on navigation (footprints on the landing page, paw
//! prints on the projects page, nothing elsewhere).

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod coordinator;

pub use coordinator::Coordinator;
