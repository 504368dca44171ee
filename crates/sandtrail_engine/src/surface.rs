//! # Surface Manager
//!
//! Owns the drawing surface's dimensions at device pixel density and emits
//! the per-frame preamble (clear + device-pixel transform) so everything
//! downstream draws in logical (CSS) units regardless of pixel density.
//!
//! No drawing happens here - the host backend consumes the command batch.

use crate::render::RenderCommand;

/// Viewport geometry as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Logical width (CSS px).
    pub width: f32,
    /// Logical height (CSS px).
    pub height: f32,
    /// Device pixel ratio.
    pub device_pixel_ratio: f32,
}

impl Viewport {
    /// Creates a new viewport description.
    #[must_use]
    pub const fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self { width, height, device_pixel_ratio }
    }
}

/// Tracks surface dimensions and produces the frame preamble.
#[derive(Clone, Copy, Debug)]
pub struct Surface {
    /// Current viewport in logical units.
    viewport: Viewport,
    /// Backing store width in physical pixels.
    physical_width: u32,
    /// Backing store height in physical pixels.
    physical_height: u32,
}

impl Surface {
    /// Creates a surface sized to the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let mut surface = Self {
            viewport,
            physical_width: 0,
            physical_height: 0,
        };
        surface.resize(viewport);
        surface
    }

    /// Recomputes physical dimensions as logical size x device pixel ratio.
    ///
    /// Idempotent; the host calls this on every viewport resize event.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;

        // Round up so a fractional DPR never leaves an uncovered edge row.
        self.physical_width = (viewport.width * viewport.device_pixel_ratio).ceil() as u32;
        self.physical_height = (viewport.height * viewport.device_pixel_ratio).ceil() as u32;

        tracing::trace!(
            width = self.physical_width,
            height = self.physical_height,
            dpr = viewport.device_pixel_ratio,
            "surface resized"
        );
    }

    /// Emits the per-frame preamble: clear everything, then install the
    /// device-pixel transform so drawing happens in logical units.
    pub fn begin_frame(&self, out: &mut Vec<RenderCommand>) {
        out.push(RenderCommand::Clear);
        out.push(RenderCommand::SetTransform {
            scale: self.viewport.device_pixel_ratio,
        });
    }

    /// Current viewport in logical units.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Backing store dimensions in physical pixels.
    #[must_use]
    pub fn physical_size(&self) -> (u32, u32) {
        (self.physical_width, self.physical_height)
    }
}
