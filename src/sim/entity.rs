//! Spatial entity with an opaque payload
//!
//! An entity is a moving axis-aligned box. It owns its position (top-left
//! corner), extents and per-second velocity, and carries a payload on behalf of
//! whoever owns it. Nothing here inspects the payload.
//!
//! Entities hold no notion of current time: the driver passes the elapsed
//! milliseconds to `update` once per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::error::EntityError;
use crate::millis_to_secs;

/// A moving axis-aligned box carrying a payload of type `T`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity<T> {
    /// Top-left corner, in scene units
    pos: Vec2,
    /// Width and height of the box
    size: Vec2,
    /// Scene units per second
    vel: Vec2,
    payload: T,
}

impl<T> Entity<T> {
    /// Create a zeroed entity carrying `payload`
    pub fn new(payload: T) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::ZERO,
            vel: Vec2::ZERO,
            payload,
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.set_position(x, y);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.set_size(width, height);
        self
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.set_velocity(vx, vy);
        self
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// Set the box extents
    ///
    /// Negative values are accepted as-is and leave the box degenerate. Use
    /// [`Entity::try_set_size`] to reject them.
    ///
    /// A negative width or height never intersects anything, even where the
    /// plain separating-axis test would report an overlap.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    /// Set the box extents, rejecting negative or non-finite values
    ///
    /// On error the entity is left unchanged.
    pub fn try_set_size(&mut self, width: f32, height: f32) -> Result<(), EntityError> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(width) || !valid(height) {
            return Err(EntityError::InvalidDimension { width, height });
        }
        self.set_size(width, height);
        Ok(())
    }

    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.vel = Vec2::new(vx, vy);
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn vx(&self) -> f32 {
        self.vel.x
    }

    #[inline]
    pub fn vy(&self) -> f32 {
        self.vel.y
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Bounding box currently occupied by the entity
    pub fn aabb(&self) -> Aabb {
        Aabb::from_min_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.aabb().center()
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Swap the payload for another type, keeping position, size and velocity
    pub fn map_payload<U, F>(self, f: F) -> Entity<U>
    where
        F: FnOnce(T) -> U,
    {
        Entity {
            pos: self.pos,
            size: self.size,
            vel: self.vel,
            payload: f(self.payload),
        }
    }

    /// Check whether this entity's box overlaps `other`'s
    ///
    /// Boxes that only touch along an edge do not intersect, and a box with
    /// zero width or height intersects nothing. The payload types may differ.
    pub fn intersects<U>(&self, other: &Entity<U>) -> bool {
        self.aabb().intersects(&other.aabb())
    }

    /// Advance position by velocity over `elapsed_millis` milliseconds
    ///
    /// One linear Euler step; no clamping and no step limit.
    pub fn update(&mut self, elapsed_millis: u32) {
        self.update_secs(millis_to_secs(elapsed_millis));
    }

    /// Advance position by velocity over `dt` seconds
    pub fn update_secs(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Same as [`Entity::update_secs`], but rejects negative or non-finite `dt`
    pub fn try_update_secs(&mut self, dt: f32) -> Result<(), EntityError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(EntityError::InvalidElapsedTime { dt });
        }
        self.update_secs(dt);
        Ok(())
    }
}
