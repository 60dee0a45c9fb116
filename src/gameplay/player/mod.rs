//! The player character: archetype, spawn helper, and controller systems.

mod ground;
pub mod jump;
pub mod run;

use avian2d::prelude::*;
use bevy::prelude::*;

pub use ground::{GroundProbe, Grounded};
pub use jump::{JumpController, JumpSettings};
pub use run::RunSettings;

use crate::gameplay::contact::ContactMemory;
use crate::gameplay::health::{Health, Invulnerability};
use crate::gameplay::inventory::Inventory;
use crate::screens::GameState;
use crate::theme::palette;
use crate::third_party::{CollisionLayer, WORLD_GRAVITY};
use crate::{GameSet, Z_CHARACTER, gameplay_running};

// === Constants ===

/// Player body size (pixels).
pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 32.0);

/// Player starting health.
pub const PLAYER_HEALTH: f32 = 3.0;

/// Seconds of invulnerability after taking a hit.
pub const PLAYER_INVULNERABILITY_SECS: f32 = 1.0;

/// Inventory slots the player carries.
pub const PLAYER_INVENTORY_SLOTS: usize = 4;

/// Extra probe length below the player's feet (pixels).
const GROUND_PROBE_MARGIN: f32 = 4.0;

// === Components ===

/// Marker for the player-controlled entity.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Spawn the player at `position`. Single source of truth for the player archetype.
pub fn spawn_player(commands: &mut Commands, position: Vec2) -> Entity {
    let jump = JumpSettings::default();
    commands
        .spawn((
            Name::new("Player"),
            Player,
            Health::new(PLAYER_HEALTH),
            Invulnerability::new(PLAYER_INVULNERABILITY_SECS),
            Inventory::new(PLAYER_INVENTORY_SLOTS, true),
            jump,
            JumpController::default(),
            RunSettings::default(),
            GroundProbe {
                distance: PLAYER_SIZE.y / 2.0 + GROUND_PROBE_MARGIN,
            },
            ContactMemory::default(),
            Sprite::from_color(palette::PLAYER, PLAYER_SIZE),
            Transform::from_xyz(position.x, position.y, Z_CHARACTER),
            DespawnOnExit(GameState::InGame),
        ))
        .insert((
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            CollisionLayers::new(
                CollisionLayer::Character,
                [
                    CollisionLayer::Ground,
                    CollisionLayer::Character,
                    CollisionLayer::Hazard,
                    CollisionLayer::Pickup,
                ],
            ),
            CollisionEventsEnabled,
            CollidingEntities::default(),
            LockedAxes::ROTATION_LOCKED,
            GravityScale(jump.gravity_scale(WORLD_GRAVITY)),
            LinearVelocity::ZERO,
        ))
        .id()
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Player>()
        .register_type::<Grounded>()
        .register_type::<GroundProbe>()
        .register_type::<JumpSettings>()
        .register_type::<JumpController>()
        .register_type::<RunSettings>();

    app.add_systems(
        Update,
        (
            ground::check_grounded.in_set(GameSet::Ai),
            (run::player_run, jump::player_jump)
                .chain()
                .in_set(GameSet::Movement),
        )
            .run_if(gameplay_running),
    );
}
