//! Entity Sim - axis-aligned 2D entities for frame-driven simulations
//!
//! Core modules:
//! - `sim`: Entity type, AABB geometry, and frame driver helpers
//! - `settings`: Data-driven configuration for the demo driver

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{Aabb, Entity, EntityError};

/// Simulation constants
pub mod consts {
    /// Milliseconds per second, used to scale per-second velocities
    pub const MILLIS_PER_SECOND: f32 = 1000.0;

    /// Default fixed simulation step (60 Hz, rounded to whole milliseconds)
    pub const DEFAULT_STEP_MILLIS: u32 = 16;
    /// Maximum substeps per frame to prevent spiral of death
    pub const DEFAULT_MAX_SUBSTEPS: u32 = 8;

    /// Default arena dimensions for the demo driver
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;

    /// Default entity extents (square) and speed cap
    pub const DEFAULT_ENTITY_SIZE: f32 = 24.0;
    pub const DEFAULT_MAX_SPEED: f32 = 120.0;

    /// Largest accepted arena side and speed cap; keeps spawn ranges finite
    pub const MAX_ARENA_EXTENT: f32 = 1.0e9;
    pub const MAX_SPEED_LIMIT: f32 = 1.0e6;
}

/// Convert a whole-millisecond delta to fractional seconds
///
/// Uses floating-point division so sub-second deltas never truncate to zero.
#[inline]
pub fn millis_to_secs(elapsed_millis: u32) -> f32 {
    elapsed_millis as f32 / consts::MILLIS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_to_secs_keeps_fraction() {
        assert!((millis_to_secs(500) - 0.5).abs() < 1e-6);
        assert!((millis_to_secs(1) - 0.001).abs() < 1e-6);
        assert_eq!(millis_to_secs(0), 0.0);
    }
}
