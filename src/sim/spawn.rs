//! Deterministic entity spawning for the demo driver

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Entity;
use crate::consts::{MAX_ARENA_EXTENT, MAX_SPEED_LIMIT};
use crate::settings::Settings;

/// Spawn `settings.entity_count` square entities inside the arena
///
/// Same seed, same entities. Each payload is the entity's spawn index.
/// Out-of-range settings are clamped to the limits `Settings::validate` enforces.
pub fn spawn_entities(settings: &Settings) -> Vec<Entity<u32>> {
    let mut rng = Pcg32::seed_from_u64(settings.seed);
    let size = settings.entity_size.max(0.0).min(MAX_ARENA_EXTENT);
    let span_x = (settings.arena_width.min(MAX_ARENA_EXTENT) - size).max(0.0);
    let span_y = (settings.arena_height.min(MAX_ARENA_EXTENT) - size).max(0.0);
    let speed = settings.max_speed.max(0.0).min(MAX_SPEED_LIMIT);

    let entities: Vec<_> = (0..settings.entity_count)
        .map(|id| {
            Entity::new(id)
                .with_position(rng.random_range(0.0..=span_x), rng.random_range(0.0..=span_y))
                .with_size(size, size)
                .with_velocity(
                    rng.random_range(-speed..=speed),
                    rng.random_range(-speed..=speed),
                )
        })
        .collect();

    log::info!(
        "Spawned {} entities with seed {}",
        entities.len(),
        settings.seed
    );
    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_deterministic() {
        let settings = Settings::default();
        assert_eq!(spawn_entities(&settings), spawn_entities(&settings));

        let other = Settings {
            seed: settings.seed + 1,
            ..Settings::default()
        };
        assert_ne!(spawn_entities(&settings), spawn_entities(&other));
    }

    #[test]
    fn test_spawn_within_arena() {
        let settings = Settings {
            entity_count: 200,
            ..Settings::default()
        };
        let entities = spawn_entities(&settings);
        assert_eq!(entities.len(), 200);

        for (i, e) in entities.iter().enumerate() {
            assert_eq!(*e.payload(), i as u32);
            assert!(e.x() >= 0.0 && e.x() + e.width() <= settings.arena_width);
            assert!(e.y() >= 0.0 && e.y() + e.height() <= settings.arena_height);
            assert!(e.vx().abs() <= settings.max_speed);
            assert!(e.vy().abs() <= settings.max_speed);
        }
    }

    #[test]
    fn test_spawn_at_upper_bounds() {
        let settings = Settings {
            entity_count: 16,
            arena_width: MAX_ARENA_EXTENT,
            arena_height: MAX_ARENA_EXTENT,
            max_speed: MAX_SPEED_LIMIT,
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());

        let entities = spawn_entities(&settings);
        assert_eq!(entities.len(), 16);
        assert!(entities.iter().all(|e| e.position().is_finite()));
        assert!(entities.iter().all(|e| e.vx().abs() <= MAX_SPEED_LIMIT));
    }

    #[test]
    fn test_spawn_clamps_unvalidated_speed() {
        let settings = Settings {
            entity_count: 4,
            max_speed: 3.0e38,
            ..Settings::default()
        };
        let entities = spawn_entities(&settings);
        assert!(entities.iter().all(|e| e.velocity().is_finite()));
    }

    #[test]
    fn test_spawn_stationary() {
        let settings = Settings {
            max_speed: 0.0,
            entity_count: 4,
            ..Settings::default()
        };
        assert!(
            spawn_entities(&settings)
                .iter()
                .all(|e| e.velocity() == glam::Vec2::ZERO)
        );
    }
}
