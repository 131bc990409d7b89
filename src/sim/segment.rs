//! Line segment geometry for obstacles and rays
//!
//! A segment is the straight line between two endpoints in screen space
//! (x grows right, y grows down). Bounds and rays share this one type.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A straight segment from `a` to `b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point (the origin, for rays)
    pub a: Vec2,
    /// End point
    pub b: Vec2,
}

impl Segment {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Build a segment from raw endpoint coordinates
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    /// Vector from `a` to `b`
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.b - self.a
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.delta().length()
    }

    /// Point at parameter `t` (0 = `a`, 1 = `b`)
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.a + self.delta() * t
    }
}
