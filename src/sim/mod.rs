//! Simulation module
//!
//! Entities and the helpers that drive them. Kept free of rendering and
//! platform dependencies:
//! - `update` takes elapsed time as an argument, never reads a clock
//! - spawning uses a seeded RNG only
//! - overlap scans report pairs in index order

pub mod aabb;
pub mod entity;
pub mod error;
pub mod spawn;
pub mod tick;

pub use aabb::Aabb;
pub use entity::Entity;
pub use error::EntityError;
pub use spawn::spawn_entities;
pub use tick::{FrameClock, overlapping_pairs, step_all};
