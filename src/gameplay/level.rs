//! Demo level: platforms, the player, two patrol agents, hazards, and
//! coin, item and heart pickups.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::gameplay::camera::CameraFollow;
use crate::gameplay::contact::{Collectible, ContactDamage};
use crate::gameplay::patrol::{PatrolRoute, PatrolSettings, spawn_patrol_agent};
use crate::gameplay::player::spawn_player;
use crate::screens::GameState;
use crate::theme::palette;
use crate::third_party::CollisionLayer;
use crate::{Z_LEVEL, Z_PICKUP};

// === Layout ===

/// World-space rectangle the camera anchor stays inside.
pub const LEVEL_BOUNDS: Rect = Rect {
    min: Vec2::new(-400.0, -80.0),
    max: Vec2::new(400.0, 240.0),
};

/// Platforms as (center, size).
const PLATFORMS: [(Vec2, Vec2); 5] = [
    (Vec2::new(0.0, -232.0), Vec2::new(1800.0, 32.0)),
    (Vec2::new(-320.0, -96.0), Vec2::new(192.0, 16.0)),
    (Vec2::new(-40.0, 8.0), Vec2::new(160.0, 16.0)),
    (Vec2::new(260.0, -64.0), Vec2::new(224.0, 16.0)),
    (Vec2::new(560.0, 96.0), Vec2::new(192.0, 16.0)),
];

const PLAYER_START: Vec2 = Vec2::new(-640.0, -150.0);

/// Ground guard: walks the floor back and forth.
const GUARD_ROUTE: [Vec2; 3] = [
    Vec2::new(-200.0, -202.0),
    Vec2::new(100.0, -202.0),
    Vec2::new(400.0, -202.0),
];

/// Drone: circles above the middle platforms.
const DRONE_ROUTE: [Vec2; 4] = [
    Vec2::new(-160.0, 120.0),
    Vec2::new(80.0, 180.0),
    Vec2::new(320.0, 120.0),
    Vec2::new(80.0, 60.0),
];

const HAZARD_SIZE: Vec2 = Vec2::new(64.0, 12.0);
const HAZARD_DAMAGE: f32 = 1.0;
const HAZARDS: [Vec2; 2] = [Vec2::new(-480.0, -210.0), Vec2::new(700.0, -210.0)];

const COLLECTIBLE_SIZE: Vec2 = Vec2::new(12.0, 12.0);
const COIN_POINTS: u32 = 10;
const COINS: [Vec2; 6] = [
    Vec2::new(-320.0, -64.0),
    Vec2::new(-40.0, 40.0),
    Vec2::new(260.0, -32.0),
    Vec2::new(560.0, 128.0),
    Vec2::new(-560.0, -200.0),
    Vec2::new(840.0, -200.0),
];

/// Inventory items as (position, name).
const ITEMS: [(Vec2, &str); 3] = [
    (Vec2::new(-200.0, -200.0), "gem"),
    (Vec2::new(320.0, 150.0), "gem"),
    (Vec2::new(620.0, 128.0), "key"),
];

const HEART_HEAL: f32 = 1.0;
const HEARTS: [Vec2; 1] = [Vec2::new(120.0, -200.0)];

// === Components ===

/// Marker for level geometry.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Platform;

/// Marker for damaging sensors.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Hazard;

// === Spawning ===

fn spawn_platform(commands: &mut Commands, center: Vec2, size: Vec2) {
    commands.spawn((
        Name::new("Platform"),
        Platform,
        Sprite::from_color(palette::PLATFORM, size),
        Transform::from_xyz(center.x, center.y, Z_LEVEL),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(CollisionLayer::Ground, [CollisionLayer::Character]),
        DespawnOnExit(GameState::InGame),
    ));
}

fn spawn_hazard(commands: &mut Commands, center: Vec2) {
    commands.spawn((
        Name::new("Hazard"),
        Hazard,
        ContactDamage(HAZARD_DAMAGE),
        Sprite::from_color(palette::HAZARD, HAZARD_SIZE),
        Transform::from_xyz(center.x, center.y, Z_LEVEL),
        RigidBody::Static,
        Collider::rectangle(HAZARD_SIZE.x, HAZARD_SIZE.y),
        Sensor,
        CollisionLayers::new(CollisionLayer::Hazard, [CollisionLayer::Character]),
        DespawnOnExit(GameState::InGame),
    ));
}

fn spawn_collectible(commands: &mut Commands, center: Vec2, collectible: Collectible) {
    let (name, color) = match collectible {
        Collectible::Coin { .. } => ("Coin", palette::COLLECTIBLE),
        Collectible::Item { .. } => ("Item", palette::ITEM),
        Collectible::Heart { .. } => ("Heart", palette::HEART),
    };
    commands.spawn((
        Name::new(name),
        collectible,
        Sprite::from_color(color, COLLECTIBLE_SIZE),
        Transform::from_xyz(center.x, center.y, Z_PICKUP),
        RigidBody::Static,
        Collider::rectangle(COLLECTIBLE_SIZE.x, COLLECTIBLE_SIZE.y),
        Sensor,
        CollisionLayers::new(CollisionLayer::Pickup, [CollisionLayer::Character]),
        DespawnOnExit(GameState::InGame),
    ));
}

fn spawn_level(mut commands: Commands, mut cameras: Query<&mut CameraFollow>) {
    for (center, size) in PLATFORMS {
        spawn_platform(&mut commands, center, size);
    }
    for center in HAZARDS {
        spawn_hazard(&mut commands, center);
    }
    for center in COINS {
        let coin = Collectible::Coin {
            points: COIN_POINTS,
        };
        spawn_collectible(&mut commands, center, coin);
    }
    for (center, name) in ITEMS {
        let item = Collectible::Item {
            name: name.to_owned(),
            quantity: 1,
        };
        spawn_collectible(&mut commands, center, item);
    }
    for center in HEARTS {
        let heart = Collectible::Heart { amount: HEART_HEAL };
        spawn_collectible(&mut commands, center, heart);
    }

    let player = spawn_player(&mut commands, PLAYER_START);

    spawn_patrol_agent(
        &mut commands,
        PatrolRoute::new(GUARD_ROUTE.to_vec(), false),
        PatrolSettings::default(),
        Some(player),
    );
    spawn_patrol_agent(
        &mut commands,
        PatrolRoute::new(DRONE_ROUTE.to_vec(), true),
        PatrolSettings {
            detection_range: 128.0,
            ..default()
        },
        Some(player),
    );

    for mut follow in &mut cameras {
        follow.bounds = Some(LEVEL_BOUNDS);
        follow.anchor = PLAYER_START.clamp(LEVEL_BOUNDS.min, LEVEL_BOUNDS.max);
    }

    info!(
        "Level spawned: {} platforms, {} pickups",
        PLATFORMS.len(),
        COINS.len() + ITEMS.len() + HEARTS.len()
    );
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Platform>().register_type::<Hazard>();
    app.add_systems(OnEnter(GameState::InGame), spawn_level);
}
