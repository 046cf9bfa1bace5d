//! Fixed timestep frame driver
//!
//! Helpers for an outer loop that owns a set of entities: turning wall-clock
//! frame time into fixed steps, stepping every entity, and a naive pairwise
//! overlap scan. Entities are caller-owned; nothing here stores or indexes them.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::consts::{DEFAULT_MAX_SUBSTEPS, DEFAULT_STEP_MILLIS};

/// Accumulates frame time and releases it in fixed steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameClock {
    /// Length of one simulation step (ms)
    pub step_millis: u32,
    /// Maximum steps released per frame
    pub max_substeps: u32,
    /// Time not yet consumed by a step (ms)
    accumulator: u64,
    /// Total steps released so far
    ticks: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_MILLIS, DEFAULT_MAX_SUBSTEPS)
    }
}

impl FrameClock {
    /// A zero `step_millis` is bumped to 1 ms.
    pub fn new(step_millis: u32, max_substeps: u32) -> Self {
        Self {
            step_millis: step_millis.max(1),
            max_substeps,
            accumulator: 0,
            ticks: 0,
        }
    }

    /// Add a frame's elapsed time and return how many fixed steps to run
    ///
    /// When more than `max_substeps` steps are owed, the surplus is dropped
    /// rather than carried into the next frame (prevents spiral of death).
    pub fn advance(&mut self, elapsed_millis: u32) -> u32 {
        let step = u64::from(self.step_millis);
        self.accumulator += u64::from(elapsed_millis);

        let owed = self.accumulator / step;
        let steps = owed.min(u64::from(self.max_substeps));
        if owed > steps {
            log::debug!(
                "Frame clock behind by {} steps, dropping {} ms",
                owed - steps,
                (owed - steps) * step
            );
            self.accumulator %= step;
        } else {
            self.accumulator -= steps * step;
        }

        self.ticks += steps;
        steps as u32
    }

    /// Leftover time not yet consumed (ms)
    pub fn pending_millis(&self) -> u64 {
        self.accumulator
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Advance every entity by `elapsed_millis`
pub fn step_all<T>(entities: &mut [Entity<T>], elapsed_millis: u32) {
    for entity in entities.iter_mut() {
        entity.update(elapsed_millis);
    }
}

/// All index pairs `(i, j)` with `i < j` whose boxes overlap
///
/// Checks every pair, so cost is quadratic in the slice length. Pairs are
/// returned in ascending order.
pub fn overlapping_pairs<T>(entities: &[Entity<T>]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in entities.iter().enumerate() {
        for (j, b) in entities.iter().enumerate().skip(i + 1) {
            if a.intersects(b) {
                pairs.push((i, j));
            }
        }
    }
    log::trace!("{} overlapping pairs among {} entities", pairs.len(), entities.len());
    pairs
}
