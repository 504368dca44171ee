//! Mathematical types shared between the engine and host backends.
//!
//! These are the canonical representations used in render command batches.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D Vector - positions, offsets, directions in logical (CSS) units.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector at the given angle (radians, screen convention: y down).
    #[must_use]
    pub fn from_angle(radians: f32) -> Self {
        Self::new(radians.cos(), radians.sin())
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Distance squared (avoids sqrt)
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle - exclusion regions, viewport bounds.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Creates a new Rect
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Empty rectangle at the origin
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// True if the point lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// True if the vertical coordinate falls within the rect's y-band.
    ///
    /// Exclusion regions span the full surface width, so horizontal
    /// position is irrelevant to them.
    #[must_use]
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.y && y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, 2.0);

        let sum = a + b;
        assert_eq!(sum.x, 4.0);
        assert_eq!(sum.y, 6.0);

        assert_eq!(a.length(), 5.0);
        assert_eq!(a.distance(b), (4.0f32 + 4.0).sqrt());
    }

    #[test]
    fn test_vec2_from_angle() {
        let right = Vec2::from_angle(0.0);
        assert!((right.x - 1.0).abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);

        let down = Vec2::from_angle(std::f32::consts::FRAC_PI_2);
        assert!(down.x.abs() < 1e-6);
        assert!((down.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_vec2_bytemuck() {
        let v = Vec2::new(1.0, 2.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 8); // 2 * 4 bytes
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(0.0, 400.0, 800.0, 200.0);

        assert!(rect.contains(Vec2::new(100.0, 500.0)));
        assert!(!rect.contains(Vec2::new(100.0, 100.0)));

        assert!(rect.contains_y(400.0)); // top edge inclusive
        assert!(rect.contains_y(600.0)); // bottom edge inclusive
        assert!(!rect.contains_y(601.0));
    }
}
