//! Patrol agents: walk a waypoint route, chase the tracked target when it
//! comes within range, and fall back to patrolling once the alert decays.

pub mod brain;
pub mod route;

use avian2d::prelude::*;
use bevy::prelude::*;

pub use brain::{PatrolBrain, PatrolSettings, PatrolState, PatrolStep};
pub use route::PatrolRoute;

use crate::gameplay::contact::{ContactDamage, ContactMemory};
use crate::gameplay::health::{CORPSE_LINGER_SECS, Dead, DespawnTimer, Health, check_death};
use crate::gameplay::hud::HealthBar;
use crate::screens::GameState;
use crate::theme::palette;
use crate::third_party::CollisionLayer;
use crate::{GameSet, Z_CHARACTER, gameplay_running};

// === Constants ===

/// Patrol agent body size (pixels).
pub const AGENT_SIZE: Vec2 = Vec2::new(28.0, 28.0);

/// Patrol agent starting health.
pub const AGENT_HEALTH: f32 = 2.0;

/// Damage a patrol agent deals on contact.
pub const AGENT_CONTACT_DAMAGE: f32 = 1.0;

/// Overhead health bar height (pixels).
const AGENT_HEALTH_BAR_HEIGHT: f32 = 3.0;

// === Components ===

/// Marker for patrol agents.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PatrolAgent;

/// The entity this agent watches for. `None` disables detection.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PatrolTarget(pub Option<Entity>);

/// Spawn a patrol agent on the first waypoint of `route`, watching `target`.
pub fn spawn_patrol_agent(
    commands: &mut Commands,
    route: PatrolRoute,
    settings: PatrolSettings,
    target: Option<Entity>,
) -> Entity {
    let start = route.current_waypoint().unwrap_or(Vec2::ZERO);
    commands
        .spawn((
            Name::new("Patrol Agent"),
            PatrolAgent,
            route,
            settings,
            PatrolBrain::default(),
            PatrolTarget(target),
            Health::new(AGENT_HEALTH),
            HealthBar {
                width: AGENT_SIZE.x,
                height: AGENT_HEALTH_BAR_HEIGHT,
                y_offset: AGENT_SIZE.y / 2.0 + AGENT_HEALTH_BAR_HEIGHT * 2.0,
            },
            ContactDamage(AGENT_CONTACT_DAMAGE),
            ContactMemory::default(),
            Sprite::from_color(palette::PATROL_AGENT, AGENT_SIZE),
            Transform::from_xyz(start.x, start.y, Z_CHARACTER),
            DespawnOnExit(GameState::InGame),
        ))
        .insert((
            RigidBody::Kinematic,
            Collider::rectangle(AGENT_SIZE.x, AGENT_SIZE.y),
            CollisionLayers::new(
                CollisionLayer::Character,
                [CollisionLayer::Character, CollisionLayer::Hazard],
            ),
            CollisionEventsEnabled,
            CollidingEntities::default(),
            LinearVelocity::ZERO,
        ))
        .id()
}

// === Systems ===

/// Ticks every live agent's brain and applies the result. Runs in `GameSet::Ai`.
fn patrol_think(
    time: Res<Time>,
    mut agents: Query<
        (
            Entity,
            &PatrolSettings,
            &PatrolTarget,
            &mut PatrolRoute,
            &mut PatrolBrain,
            &mut Transform,
            &mut LinearVelocity,
        ),
        (With<PatrolAgent>, Without<Dead>),
    >,
    targets: Query<&GlobalTransform, Without<Dead>>,
) {
    let dt = time.delta_secs();
    for (entity, settings, target, mut route, mut brain, mut transform, mut velocity) in &mut agents
    {
        let target_position = target
            .0
            .and_then(|e| targets.get(e).ok())
            .map(|t| t.translation().xy());

        let before = brain.state();
        let step = brain.tick(
            settings,
            &mut route,
            transform.translation.xy(),
            target_position,
            dt,
        );
        if brain.state() != before {
            debug!("{entity} patrol state {before:?} -> {:?}", brain.state());
        }

        if let Some(waypoint) = step.snap_to {
            transform.translation.x = waypoint.x;
            transform.translation.y = waypoint.y;
        }
        velocity.0 = step.velocity;
    }
}

/// Stops agents that just died and schedules their removal. Runs in `GameSet::Death`.
fn stop_dead_agents(
    mut commands: Commands,
    mut agents: Query<
        (Entity, &mut PatrolBrain, &mut LinearVelocity, &mut Sprite),
        (With<PatrolAgent>, Added<Dead>),
    >,
) {
    for (entity, mut brain, mut velocity, mut sprite) in &mut agents {
        brain.kill();
        velocity.0 = Vec2::ZERO;
        sprite.color = palette::CORPSE;
        commands.entity(entity).insert((
            DespawnTimer(Timer::from_seconds(CORPSE_LINGER_SECS, TimerMode::Once)),
            ContactDamage(0.0),
        ));
    }
}

/// Warns about agents that can never do anything useful.
fn warn_on_incomplete_agent(
    add: On<Add, PatrolAgent>,
    agents: Query<(&PatrolRoute, &PatrolTarget)>,
) {
    let Ok((route, target)) = agents.get(add.entity) else {
        return;
    };
    if route.waypoints().is_empty() {
        warn!("{} has no waypoints, it will stand still", add.entity);
    }
    if target.0.is_none() {
        warn!("{} has no target, it will never chase", add.entity);
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<PatrolAgent>()
        .register_type::<PatrolTarget>()
        .register_type::<PatrolRoute>()
        .register_type::<PatrolSettings>()
        .register_type::<PatrolBrain>();

    app.add_observer(warn_on_incomplete_agent);

    app.add_systems(
        Update,
        (
            patrol_think.in_set(GameSet::Ai),
            stop_dead_agents.in_set(GameSet::Death).after(check_death),
        )
            .run_if(gameplay_running),
    );
}
