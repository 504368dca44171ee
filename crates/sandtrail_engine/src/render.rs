//! # Shape Renderer
//!
//! Turns one live print into render commands. Two strategies exist:
//!
//! - [`PolygonPrints`] procedurally fills and strokes a fixed closed
//!   polygon approximating a footprint silhouette.
//! - [`SpritePrints`] stamps a pre-loaded sprite image.
//!
//! Strategy choice never affects input or lifecycle logic. Both share the
//! same placement math: lateral offset by alternation parity, rotation to
//! the direction of travel, mirroring on even parity.
//!
//! Nothing here draws. The host backend consumes the [`RenderCommand`]
//! batch and submits it however it likes.

use sandtrail_shared::Vec2;

use crate::config::{EngineConfig, RendererKind};
use crate::trail::Print;

/// RGBA color, components in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Creates a color from components.
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with its alpha multiplied by `factor`.
    #[must_use]
    pub fn faded(self, factor: f32) -> Self {
        Self { a: self.a * factor, ..self }
    }
}

/// Wet-sand fill for the procedural footprint silhouette.
pub const SAND_FILL: Color = Color::rgba(0.46, 0.35, 0.24, 0.45);

/// Slightly darker rim stroke around the silhouette.
pub const SAND_STROKE: Color = Color::rgba(0.33, 0.24, 0.16, 0.60);

/// Handle to a sprite the host has registered with its backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteId(pub u32);

/// Where and how a single print is stamped onto the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Final position: print position plus the lateral parity offset.
    pub position: Vec2,
    /// Rotation (radians) - the print's heading.
    pub rotation: f32,
    /// Uniform scale relative to the authored artwork.
    pub scale: f32,
    /// Mirror horizontally (even alternation parity - the "left" print).
    pub mirror_x: bool,
}

/// One drawing operation for the host backend.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    /// Clear the entire surface.
    Clear,
    /// Install a uniform coordinate scale (device pixel ratio) so all
    /// subsequent commands are in logical units.
    SetTransform {
        /// Scale factor to apply.
        scale: f32,
    },
    /// Fill and stroke a closed polygon.
    Polygon {
        /// Outline points in authored local units; closed implicitly.
        points: &'static [Vec2],
        /// Stamp transform.
        placement: Placement,
        /// Fill color, fade already applied.
        fill: Color,
        /// Stroke color, fade already applied.
        stroke: Color,
        /// Stroke width in local units.
        stroke_width: f32,
    },
    /// Stamp a sprite centered at the placement origin.
    Sprite {
        /// Which sprite to stamp.
        sprite: SpriteId,
        /// Stamp transform.
        placement: Placement,
        /// Global alpha: age fade times the base sprite opacity.
        opacity: f32,
    },
}

/// Style inputs shared by both renderer strategies.
///
/// `scale_factor` and `gap` are the two dynamically updatable values; the
/// host pushes changes through [`crate::Engine::set_style`] instead of the
/// engine polling presentation state every frame.
#[derive(Clone, Copy, Debug)]
pub struct PrintStyle {
    /// Dynamic scale factor for print size (also scales the stride gate).
    pub scale_factor: f32,
    /// Lateral gap between alternating left/right prints (logical px).
    pub gap: f32,
    /// Rendered print height before the scale factor (logical px).
    pub print_size: f32,
    /// Height the artwork was authored at (local units).
    pub reference_size: f32,
}

impl PrintStyle {
    /// Extracts the style inputs from an engine configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            scale_factor: config.scale_factor,
            gap: config.gap,
            print_size: config.print_size,
            reference_size: config.reference_size,
        }
    }
}

/// Computes the stamp transform for one print.
///
/// The heading already carries the quarter-turn offset, so the unit vector
/// at that angle is perpendicular to the direction of travel - exactly the
/// axis the left/right gap is applied along. Even parity lands on one side
/// and mirrors the artwork; odd parity lands on the other.
#[must_use]
pub fn placement_for(print: &Print, style: &PrintStyle) -> Placement {
    let even_parity = print.alternation % 2 == 0;
    let side = if even_parity { -1.0 } else { 1.0 };
    let lateral = Vec2::from_angle(print.heading) * (style.gap * 0.5 * side);

    Placement {
        position: print.position + lateral,
        rotation: print.heading,
        scale: (style.print_size / style.reference_size) * style.scale_factor,
        mirror_x: even_parity,
    }
}

/// Closed footprint silhouette, authored toes-up at [`PrintStyle::reference_size`]
/// = 64 local units tall, origin at the center of the sole.
pub const FOOTPRINT_SILHOUETTE: [Vec2; 18] = [
    Vec2::new(0.0, 32.0),    // heel, bottom center
    Vec2::new(-8.0, 30.0),
    Vec2::new(-11.0, 24.0),
    Vec2::new(-12.0, 12.0),  // outer edge
    Vec2::new(-11.0, 0.0),
    Vec2::new(-10.0, -10.0),
    Vec2::new(-11.0, -18.0), // ball, outer
    Vec2::new(-9.0, -26.0),
    Vec2::new(-6.0, -30.0),  // little-toe arc
    Vec2::new(-2.0, -32.0),
    Vec2::new(3.0, -31.0),
    Vec2::new(7.0, -28.0),
    Vec2::new(10.0, -24.0),  // big toe
    Vec2::new(11.0, -14.0),  // ball, inner
    Vec2::new(7.0, -2.0),    // arch
    Vec2::new(6.0, 8.0),
    Vec2::new(9.0, 18.0),
    Vec2::new(8.0, 26.0),
];

/// Stroke width for the silhouette rim, in local units.
const SILHOUETTE_STROKE_WIDTH: f32 = 1.5;

/// Procedural silhouette strategy.
#[derive(Debug, Default)]
pub struct PolygonPrints;

impl PolygonPrints {
    /// Emits the fill+stroke command for one print.
    pub fn render(&self, print: &Print, alpha: f32, style: &PrintStyle, out: &mut Vec<RenderCommand>) {
        out.push(RenderCommand::Polygon {
            points: &FOOTPRINT_SILHOUETTE,
            placement: placement_for(print, style),
            fill: SAND_FILL.faded(alpha),
            stroke: SAND_STROKE.faded(alpha),
            stroke_width: SILHOUETTE_STROKE_WIDTH,
        });
    }
}

/// Sprite stamp strategy.
///
/// Until the host registers a loaded sprite, every draw is skipped - a
/// missed frame, not an error, and it self-corrects once the sprite is in.
#[derive(Debug)]
pub struct SpritePrints {
    /// Sprite to stamp; `None` while still loading.
    sprite: Option<SpriteId>,
    /// Base opacity multiplied into the age fade.
    base_opacity: f32,
}

impl SpritePrints {
    /// Creates the strategy with no sprite loaded yet.
    #[must_use]
    pub fn new(base_opacity: f32) -> Self {
        Self { sprite: None, base_opacity }
    }

    /// Registers the loaded sprite; draws start on the next frame.
    pub fn set_sprite(&mut self, sprite: SpriteId) {
        tracing::debug!(sprite = sprite.0, "print sprite ready");
        self.sprite = Some(sprite);
    }

    /// Emits the stamp command for one print, or nothing while loading.
    pub fn render(&self, print: &Print, alpha: f32, style: &PrintStyle, out: &mut Vec<RenderCommand>) {
        let Some(sprite) = self.sprite else {
            return;
        };

        out.push(RenderCommand::Sprite {
            sprite,
            placement: placement_for(print, style),
            opacity: alpha * self.base_opacity,
        });
    }
}

/// The renderer strategy an engine was configured with.
#[derive(Debug)]
pub enum PrintRenderer {
    /// Procedural silhouette.
    Polygon(PolygonPrints),
    /// Sprite stamp.
    Sprite(SpritePrints),
}

impl PrintRenderer {
    /// Builds the strategy named by the configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        match config.renderer {
            RendererKind::Polygon => Self::Polygon(PolygonPrints),
            RendererKind::Sprite => Self::Sprite(SpritePrints::new(config.sprite_opacity)),
        }
    }

    /// Renders one print through the configured strategy.
    pub fn render(&self, print: &Print, alpha: f32, style: &PrintStyle, out: &mut Vec<RenderCommand>) {
        match self {
            Self::Polygon(polygon) => polygon.render(print, alpha, style, out),
            Self::Sprite(sprite) => sprite.render(print, alpha, style, out),
        }
    }

    /// Registers a loaded sprite. No-op for the polygon strategy.
    pub fn set_sprite(&mut self, sprite: SpriteId) {
        match self {
            Self::Sprite(stamps) => stamps.set_sprite(sprite),
            Self::Polygon(_) => {
                tracing::trace!(sprite = sprite.0, "sprite registered on polygon renderer, ignoring");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print_at(x: f32, y: f32, heading: f32, alternation: u64) -> Print {
        Print {
            position: Vec2::new(x, y),
            heading,
            alternation,
            created_at_ms: 0.0,
        }
    }

    fn style() -> PrintStyle {
        PrintStyle {
            scale_factor: 1.0,
            gap: 28.0,
            print_size: 56.0,
            reference_size: 64.0,
        }
    }

    #[test]
    fn test_lateral_offset_flips_sign_with_parity() {
        // Heading 0: the offset axis is +x.
        let even = placement_for(&print_at(100.0, 100.0, 0.0, 0), &style());
        let odd = placement_for(&print_at(100.0, 100.0, 0.0, 1), &style());

        assert!((even.position.x - 86.0).abs() < 1e-4); // 100 - 28/2
        assert!((odd.position.x - 114.0).abs() < 1e-4); // 100 + 28/2
        assert!(even.mirror_x);
        assert!(!odd.mirror_x);
    }

    #[test]
    fn test_offset_is_perpendicular_to_travel() {
        // Travel rightward => heading pi/2 => offset axis is +y.
        let placement = placement_for(
            &print_at(0.0, 0.0, std::f32::consts::FRAC_PI_2, 1),
            &style(),
        );
        assert!(placement.position.x.abs() < 1e-4);
        assert!((placement.position.y - 14.0).abs() < 1e-4);
    }

    #[test]
    fn test_scale_combines_size_ratio_and_dynamic_factor() {
        let mut s = style();
        s.scale_factor = 2.0;
        let placement = placement_for(&print_at(0.0, 0.0, 0.0, 0), &s);
        assert!((placement.scale - (56.0 / 64.0) * 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_polygon_strategy_applies_fade() {
        let renderer = PolygonPrints;
        let mut out = Vec::new();
        renderer.render(&print_at(0.0, 0.0, 0.0, 0), 0.5, &style(), &mut out);

        match &out[0] {
            RenderCommand::Polygon { fill, stroke, points, .. } => {
                assert!((fill.a - SAND_FILL.a * 0.5).abs() < 1e-6);
                assert!((stroke.a - SAND_STROKE.a * 0.5).abs() < 1e-6);
                assert_eq!(points.len(), FOOTPRINT_SILHOUETTE.len());
            }
            other => panic!("expected polygon command, got {other:?}"),
        }
    }

    #[test]
    fn test_sprite_strategy_skips_until_loaded() {
        let mut renderer = SpritePrints::new(0.85);
        let mut out = Vec::new();

        renderer.render(&print_at(0.0, 0.0, 0.0, 0), 1.0, &style(), &mut out);
        assert!(out.is_empty(), "unloaded sprite must skip the draw");

        renderer.set_sprite(SpriteId(7));
        renderer.render(&print_at(0.0, 0.0, 0.0, 0), 1.0, &style(), &mut out);
        match &out[0] {
            RenderCommand::Sprite { sprite, opacity, .. } => {
                assert_eq!(*sprite, SpriteId(7));
                assert!((opacity - 0.85).abs() < 1e-6);
            }
            other => panic!("expected sprite command, got {other:?}"),
        }
    }

    #[test]
    fn test_silhouette_fits_reference_size() {
        let max_y = FOOTPRINT_SILHOUETTE.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let min_y = FOOTPRINT_SILHOUETTE.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        assert_eq!(max_y - min_y, 64.0);
    }
}
