//! Axis-aligned bounding box geometry
//!
//! A box is stored as its top-left corner plus extents and occupies the
//! half-open region `[min.x, min.x + width) × [min.y, min.y + height)`:
//! - boxes that only share an edge do not overlap
//! - a box with zero width or height covers no area and overlaps nothing

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A half-open axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Extents (width, height)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Exclusive bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// True if the box covers no area
    pub fn is_degenerate(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    /// Check if a point lies inside the box (left/top inclusive, right/bottom exclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    /// Separating-axis overlap test
    ///
    /// The boxes are disjoint if either one ends at or before the other begins
    /// on any axis. Symmetric in its arguments. A degenerate box never overlaps,
    /// even when its corner lies strictly inside the other box.
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        let a_max = self.max();
        let b_max = other.max();
        !(a_max.x <= other.min.x
            || b_max.x <= self.min.x
            || a_max.y <= other.min.y
            || b_max.y <= self.min.y)
    }

    /// Overlapping region of two boxes, if any
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        if !self.intersects(other) {
            return None;
        }
        let min = self.min.max(other.min);
        let max = self.max().min(other.max());
        Some(Aabb::from_min_size(min, max - min))
    }
}
