//! Avian2d physics configuration for side-on platforming.

use avian2d::prelude::*;
use bevy::prelude::*;

// === Constants ===

/// Pixels per physics length unit.
pub const PIXELS_PER_METER: f32 = 32.0;

/// World gravity (pixels per second squared, pointing down).
pub const WORLD_GRAVITY: f32 = -980.0;

// === Collision Layers ===

/// Physics collision layers.
///
/// - **Ground**: Level geometry that bodies stand on.
/// - **Character**: Player and patrol agents.
/// - **Hazard**: Damaging sensors (spikes).
/// - **Pickup**: Collectible sensors.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum CollisionLayer {
    #[default]
    Ground,
    Character,
    Hazard,
    Pickup,
}

// === Helpers ===

/// Casts a ray straight down from `origin` and reports whether it hits
/// anything on the `Ground` layer within `distance`.
/// The caster itself is excluded.
#[must_use]
pub fn probe_ground(spatial: &SpatialQuery, caster: Entity, origin: Vec2, distance: f32) -> bool {
    if distance <= 0.0 {
        return false;
    }
    let filter =
        SpatialQueryFilter::from_mask(CollisionLayer::Ground).with_excluded_entities([caster]);
    spatial
        .cast_ray(origin, Dir2::NEG_Y, distance, true, &filter)
        .is_some()
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default().with_length_unit(PIXELS_PER_METER));
    app.insert_resource(Gravity(Vec2::new(0.0, WORLD_GRAVITY)));
}
