//! Grounded check: a short downward ray against the `Ground` layer.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::third_party::probe_ground;

/// Whether the body touched ground on the last check.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Grounded(pub bool);

/// Downward probe configuration. The ray starts at the body's center.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Grounded)]
pub struct GroundProbe {
    /// Ray length in pixels, measured from the body's center.
    pub distance: f32,
}

/// Updates `Grounded` for every body with a `GroundProbe`. Runs in `GameSet::Ai`.
pub(super) fn check_grounded(
    spatial: SpatialQuery,
    mut bodies: Query<(Entity, &GlobalTransform, &GroundProbe, &mut Grounded)>,
) {
    for (entity, transform, probe, mut grounded) in &mut bodies {
        let hit = probe_ground(&spatial, entity, transform.translation().xy(), probe.distance);
        grounded.set_if_neq(Grounded(hit));
    }
}
