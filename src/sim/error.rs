//! Errors reported by the checked entity mutators

use thiserror::Error;

/// Rejected input for a checked entity operation
///
/// The plain mutators never fail; only the `try_*` variants produce these.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EntityError {
    #[error("invalid dimension: width {width} and height {height} must be finite and non-negative")]
    InvalidDimension { width: f32, height: f32 },

    #[error("invalid elapsed time: {dt}s must be finite and non-negative")]
    InvalidElapsedTime { dt: f32 },
}
