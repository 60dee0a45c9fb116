//! Health, damage and healing requests, invulnerability windows, and death.

use bevy::prelude::*;

use crate::gameplay::timed_gate::TimedGate;
use crate::{GameSet, gameplay_running};

/// Seconds a dead non-player entity lingers before despawning.
pub const CORPSE_LINGER_SECS: f32 = 2.0;

// === System Sets ===

/// `SystemSet` for applying damage and healing requests. Producers of
/// `DamageRequest` order themselves `.before(DamageStep)`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DamageStep;

// === Components ===

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    #[must_use]
    pub const fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    /// Current health as a fraction of max, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }

    /// Subtracts `amount` (floored at zero). Returns the damage actually dealt.
    pub fn damage(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current - amount.max(0.0)).max(0.0);
        before - self.current
    }

    /// Adds `amount` (capped at max). Returns the health actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current + amount.max(0.0)).min(self.max);
        self.current - before
    }
}

/// Post-hit window during which further damage is ignored.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Invulnerability {
    pub window: TimedGate,
    pub duration: f32,
}

impl Invulnerability {
    #[must_use]
    pub const fn new(duration: f32) -> Self {
        Self {
            window: TimedGate::CLOSED,
            duration,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.window.is_open()
    }
}

/// Marker: health reached zero. Added once, never removed.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Dead;

/// Despawns the entity when the timer finishes.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct DespawnTimer(pub Timer);

// === Messages ===

/// Request to damage `target`. Ignored if the target is dead or invulnerable.
#[derive(Message, Debug, Clone, Copy)]
pub struct DamageRequest {
    pub target: Entity,
    pub amount: f32,
}

/// Request to heal `target`. Ignored if the target is dead.
#[derive(Message, Debug, Clone, Copy)]
pub struct HealRequest {
    pub target: Entity,
    pub amount: f32,
}

/// Damage that was actually applied.
#[derive(Message, Debug, Clone, Copy)]
pub struct DamageTaken {
    pub entity: Entity,
    pub amount: f32,
}

/// Sent once when an entity's health reaches zero.
#[derive(Message, Debug, Clone, Copy)]
pub struct Died {
    pub entity: Entity,
}

// === Systems ===

fn tick_invulnerability(time: Res<Time>, mut query: Query<&mut Invulnerability>) {
    let dt = time.delta_secs();
    for mut invulnerability in &mut query {
        invulnerability.window.tick(dt);
    }
}

/// Applies damage requests in arrival order. Runs in `GameSet::Combat`.
fn apply_damage(
    mut requests: MessageReader<DamageRequest>,
    mut targets: Query<(&mut Health, Option<&mut Invulnerability>), Without<Dead>>,
    mut taken: MessageWriter<DamageTaken>,
) {
    for request in requests.read() {
        let Ok((mut health, invulnerability)) = targets.get_mut(request.target) else {
            continue;
        };
        if !health.is_alive() {
            continue;
        }
        if let Some(mut invulnerability) = invulnerability {
            if invulnerability.is_active() {
                continue;
            }
            let duration = invulnerability.duration;
            invulnerability.window.arm(duration);
        }
        let dealt = health.damage(request.amount);
        if dealt > 0.0 {
            taken.write(DamageTaken {
                entity: request.target,
                amount: dealt,
            });
        }
    }
}

fn apply_healing(
    mut requests: MessageReader<HealRequest>,
    mut targets: Query<&mut Health, Without<Dead>>,
) {
    for request in requests.read() {
        if let Ok(mut health) = targets.get_mut(request.target) {
            health.heal(request.amount);
        }
    }
}

/// Marks entities at zero health as `Dead` and announces it. Runs in `GameSet::Death`.
pub fn check_death(
    mut commands: Commands,
    query: Query<(Entity, &Health), Without<Dead>>,
    mut died: MessageWriter<Died>,
) {
    for (entity, health) in &query {
        if !health.is_alive() {
            commands.entity(entity).insert(Dead);
            died.write(Died { entity });
            info!("{entity} died");
        }
    }
}

fn despawn_expired(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut DespawnTimer)>,
) {
    for (entity, mut timer) in &mut query {
        timer.0.tick(time.delta());
        if timer.0.is_finished() {
            commands.entity(entity).despawn();
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Health>()
        .register_type::<Invulnerability>()
        .register_type::<Dead>()
        .register_type::<DespawnTimer>();

    app.add_message::<DamageRequest>()
        .add_message::<HealRequest>()
        .add_message::<DamageTaken>()
        .add_message::<Died>();

    app.add_systems(
        Update,
        (
            (tick_invulnerability, apply_damage, apply_healing)
                .chain()
                .in_set(DamageStep)
                .in_set(GameSet::Combat),
            (check_death, despawn_expired).in_set(GameSet::Death),
        )
            .run_if(gameplay_running),
    );
}
