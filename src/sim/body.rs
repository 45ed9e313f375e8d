//! Axis-aligned bounding box geometry
//!
//! Screen coordinates: x grows right, y grows down. Every entity owns one
//! `Body`; nothing else carries position.

use glam::Vec2;

/// Axis-aligned box with `x1 < x2` and `y1 < y2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Body {
    pub fn from_edges(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            x1: center.x - half.x,
            y1: center.y - half.y,
            x2: center.x + half.x,
            y2: center.y + half.y,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn midpoint(&self) -> Vec2 {
        Vec2::new(
            self.x1 + self.width() / 2.0,
            self.y1 + self.height() / 2.0,
        )
    }

    /// Shift all four edges
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x1 += dx;
        self.x2 += dx;
        self.y1 += dy;
        self.y2 += dy;
    }

    /// Strict intersection test: shared edges or corners do not overlap
    pub fn overlaps(&self, other: &Body) -> bool {
        self.x1 < other.x2 && self.x2 > other.x1 && self.y1 < other.y2 && self.y2 > other.y1
    }
}
