//! Overlap-start detection and the behaviors keyed off it: contact damage and pickups.
//!
//! Avian keeps `CollidingEntities` current every physics step. Diffing it
//! against the previous frame's set turns the continuous overlap into a
//! one-shot `OverlapStarted` message per contact.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::gameplay::health::{DamageRequest, DamageStep, Dead, HealRequest, Health};
use crate::gameplay::inventory::Inventory;
use crate::gameplay::score::{Score, ScoreChanged};
use crate::{GameSet, gameplay_running};

// === Components ===

/// Entities this body overlapped last frame. Requires `CollidingEntities`.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct ContactMemory {
    previous: Vec<Entity>,
}

/// Damage dealt to anything that starts overlapping this entity.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ContactDamage(pub f32);

/// Picked up (and despawned) by the first receiver that can take it.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub enum Collectible {
    /// Adds points to the score.
    Coin { points: u32 },
    /// Goes into the receiver's `Inventory`. Stays put if it does not fit.
    Item { name: String, quantity: u32 },
    /// Heals the receiver. Stays put while the receiver is at full health.
    Heart { amount: f32 },
}

// === Messages ===

/// `entity` began overlapping `other` this frame.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapStarted {
    pub entity: Entity,
    pub other: Entity,
}

// === Systems ===

/// Writes one `OverlapStarted` for each entity newly present in `CollidingEntities`.
fn detect_overlap_starts(
    mut receivers: Query<(Entity, &CollidingEntities, &mut ContactMemory), Without<Dead>>,
    mut started: MessageWriter<OverlapStarted>,
) {
    for (entity, colliding, mut memory) in &mut receivers {
        for &other in &colliding.0 {
            if !memory.previous.contains(&other) {
                started.write(OverlapStarted { entity, other });
            }
        }
        memory.previous.clear();
        memory.previous.extend(colliding.0.iter().copied());
    }
}

/// Turns overlaps with `ContactDamage` sources into damage requests.
fn contact_damage(
    mut started: MessageReader<OverlapStarted>,
    sources: Query<&ContactDamage, Without<Dead>>,
    mut damage: MessageWriter<DamageRequest>,
) {
    for overlap in started.read() {
        if let Ok(source) = sources.get(overlap.other) {
            damage.write(DamageRequest {
                target: overlap.entity,
                amount: source.0,
            });
        }
    }
}

/// Collects pickups on overlap. A pickup counts once even if touched twice in a frame.
fn collect_pickups(
    mut commands: Commands,
    mut started: MessageReader<OverlapStarted>,
    pickups: Query<&Collectible>,
    mut inventories: Query<&mut Inventory>,
    healths: Query<&Health>,
    mut score: ResMut<Score>,
    mut changed: MessageWriter<ScoreChanged>,
    mut heal: MessageWriter<HealRequest>,
    mut taken: Local<Vec<Entity>>,
) {
    taken.clear();
    for overlap in started.read() {
        let Ok(collectible) = pickups.get(overlap.other) else {
            continue;
        };
        if taken.contains(&overlap.other) {
            continue;
        }
        let collected = match collectible {
            Collectible::Coin { points } => {
                let already_record = score.record_run;
                let new_best = score.add(*points);
                if new_best && !already_record {
                    info!("New best score: {}", score.best);
                }
                changed.write(ScoreChanged {
                    current: score.current,
                    new_best,
                });
                true
            }
            Collectible::Item { name, quantity } => {
                let Ok(mut inventory) = inventories.get_mut(overlap.entity) else {
                    continue;
                };
                let added = inventory.add(name, *quantity);
                if !added {
                    debug!("{} cannot take {name}", overlap.entity);
                }
                added
            }
            Collectible::Heart { amount } => {
                let hurt = healths
                    .get(overlap.entity)
                    .is_ok_and(|health| health.is_alive() && health.current < health.max);
                if hurt {
                    heal.write(HealRequest {
                        target: overlap.entity,
                        amount: *amount,
                    });
                }
                hurt
            }
        };
        if collected {
            taken.push(overlap.other);
            commands.entity(overlap.other).despawn();
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ContactMemory>()
        .register_type::<ContactDamage>()
        .register_type::<Collectible>();

    app.add_message::<OverlapStarted>();

    app.add_systems(
        Update,
        (
            detect_overlap_starts,
            (contact_damage, collect_pickups),
        )
            .chain()
            .in_set(GameSet::Combat)
            .before(DamageStep)
            .run_if(gameplay_running),
    );
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::testing::assert_entity_count;
    use pretty_assertions::assert_eq;

    /// Every message the systems under test produced, in order.
    #[derive(Resource, Default)]
    struct Recorded {
        overlaps: Vec<OverlapStarted>,
        damage: Vec<(Entity, f32)>,
        score: Vec<ScoreChanged>,
        heals: Vec<(Entity, f32)>,
    }

    fn record(
        mut overlaps: MessageReader<OverlapStarted>,
        mut damage: MessageReader<DamageRequest>,
        mut score: MessageReader<ScoreChanged>,
        mut heals: MessageReader<HealRequest>,
        mut recorded: ResMut<Recorded>,
    ) {
        recorded.overlaps.extend(overlaps.read().copied());
        recorded.score.extend(score.read().copied());
        recorded
            .heals
            .extend(heals.read().map(|request| (request.target, request.amount)));
        recorded
            .damage
            .extend(damage.read().map(|request| (request.target, request.amount)));
    }

    fn create_contact_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<Score>();
        app.init_resource::<Recorded>();
        app.add_message::<OverlapStarted>()
            .add_message::<DamageRequest>()
            .add_message::<HealRequest>()
            .add_message::<ScoreChanged>();
        app.add_systems(
            Update,
            (
                detect_overlap_starts,
                (contact_damage, collect_pickups),
                record,
            )
                .chain(),
        );
        app
    }

    fn spawn_receiver(world: &mut World) -> Entity {
        world
            .spawn((ContactMemory::default(), CollidingEntities::default()))
            .id()
    }

    fn touch(world: &mut World, receiver: Entity, other: Entity) {
        world
            .get_mut::<CollidingEntities>(receiver)
            .unwrap()
            .0
            .insert(other);
    }

    fn untouch(world: &mut World, receiver: Entity, other: Entity) {
        world
            .get_mut::<CollidingEntities>(receiver)
            .unwrap()
            .0
            .remove(&other);
    }

    fn recorded(app: &App) -> &Recorded {
        app.world().resource::<Recorded>()
    }

    #[test]
    fn overlap_start_fires_once_per_contact() {
        let mut app = create_contact_test_app();
        let receiver = spawn_receiver(app.world_mut());
        let hazard = app.world_mut().spawn(ContactDamage(1.0)).id();

        touch(app.world_mut(), receiver, hazard);
        app.update();
        app.update();
        app.update();

        assert_eq!(
            recorded(&app).overlaps,
            vec![OverlapStarted {
                entity: receiver,
                other: hazard,
            }]
        );

        untouch(app.world_mut(), receiver, hazard);
        app.update();
        touch(app.world_mut(), receiver, hazard);
        app.update();

        assert_eq!(recorded(&app).overlaps.len(), 2);
        assert_eq!(recorded(&app).damage, vec![(receiver, 1.0), (receiver, 1.0)]);
    }

    #[test]
    fn hazard_contact_requests_damage() {
        let mut app = create_contact_test_app();
        let receiver = spawn_receiver(app.world_mut());
        let hazard = app.world_mut().spawn(ContactDamage(2.5)).id();

        touch(app.world_mut(), receiver, hazard);
        app.update();

        assert_eq!(recorded(&app).damage, vec![(receiver, 2.5)]);
    }

    #[test]
    fn dead_hazard_deals_no_damage() {
        let mut app = create_contact_test_app();
        let receiver = spawn_receiver(app.world_mut());
        let hazard = app.world_mut().spawn((ContactDamage(2.5), Dead)).id();

        touch(app.world_mut(), receiver, hazard);
        app.update();

        assert!(recorded(&app).damage.is_empty());
    }

    #[test]
    fn dead_receiver_reports_no_overlaps() {
        let mut app = create_contact_test_app();
        let receiver = spawn_receiver(app.world_mut());
        app.world_mut().entity_mut(receiver).insert(Dead);
        let hazard = app.world_mut().spawn(ContactDamage(1.0)).id();

        touch(app.world_mut(), receiver, hazard);
        app.update();

        assert!(recorded(&app).overlaps.is_empty());
    }

    #[test]
    fn pickup_adds_score_and_despawns() {
        let mut app = create_contact_test_app();
        let receiver = spawn_receiver(app.world_mut());
        let coin = app.world_mut().spawn(Collectible::Coin { points: 10 }).id();

        touch(app.world_mut(), receiver, coin);
        app.update();

        assert_eq!(app.world().resource::<Score>().current, 10);
        assert_entity_count::<With<Collectible>>(&mut app, 0);
        assert_eq!(
            recorded(&app).score,
            vec![ScoreChanged {
                current: 10,
                new_best: true,
            }]
        );
    }

    #[test]
    fn pickup_touched_by_two_receivers_counts_once() {
        let mut app = create_contact_test_app();
        let first = spawn_receiver(app.world_mut());
        let second = spawn_receiver(app.world_mut());
        let coin = app.world_mut().spawn(Collectible::Coin { points: 10 }).id();

        touch(app.world_mut(), first, coin);
        touch(app.world_mut(), second, coin);
        app.update();

        assert_eq!(app.world().resource::<Score>().current, 10);
    }

    fn item(name: &str, quantity: u32) -> Collectible {
        Collectible::Item {
            name: name.to_owned(),
            quantity,
        }
    }

    #[test]
    fn item_pickup_goes_into_inventory() {
        let mut app = create_contact_test_app();
        let receiver = spawn_receiver(app.world_mut());
        app.world_mut()
            .entity_mut(receiver)
            .insert(Inventory::new(4, true));
        let gem = app.world_mut().spawn(item("gem", 2)).id();

        touch(app.world_mut(), receiver, gem);
        app.update();

        let inventory = app.world().get::<Inventory>(receiver).unwrap();
        assert_eq!(inventory.quantity("gem"), 2);
        assert_entity_count::<With<Collectible>>(&mut app, 0);
        assert_eq!(app.world().resource::<Score>().current, 0);
    }

    #[test]
    fn item_pickup_stays_when_inventory_is_full() {
        let mut app = create_contact_test_app();
        let receiver = spawn_receiver(app.world_mut());
        let mut inventory = Inventory::new(1, true);
        inventory.add("key", 1);
        app.world_mut().entity_mut(receiver).insert(inventory);
        let gem = app.world_mut().spawn(item("gem", 1)).id();

        touch(app.world_mut(), receiver, gem);
        app.update();

        assert!(!app.world().get::<Inventory>(receiver).unwrap().has("gem"));
        assert_entity_count::<With<Collectible>>(&mut app, 1);
    }

    #[test]
    fn item_pickup_ignored_without_inventory() {
        let mut app = create_contact_test_app();
        let receiver = spawn_receiver(app.world_mut());
        let key = app.world_mut().spawn(item("key", 1)).id();

        touch(app.world_mut(), receiver, key);
        app.update();

        assert_entity_count::<With<Collectible>>(&mut app, 1);
    }

    #[test]
    fn heart_heals_hurt_receiver() {
        let mut app = create_contact_test_app();
        let receiver = spawn_receiver(app.world_mut());
        let mut health = Health::new(3.0);
        health.damage(2.0);
        app.world_mut().entity_mut(receiver).insert(health);
        let heart = app
            .world_mut()
            .spawn(Collectible::Heart { amount: 1.0 })
            .id();

        touch(app.world_mut(), receiver, heart);
        app.update();

        assert_eq!(recorded(&app).heals, vec![(receiver, 1.0)]);
        assert_entity_count::<With<Collectible>>(&mut app, 0);
    }

    #[test]
    fn heart_left_alone_at_full_health() {
        let mut app = create_contact_test_app();
        let receiver = spawn_receiver(app.world_mut());
        app.world_mut()
            .entity_mut(receiver)
            .insert(Health::new(3.0));
        let heart = app
            .world_mut()
            .spawn(Collectible::Heart { amount: 1.0 })
            .id();

        touch(app.world_mut(), receiver, heart);
        app.update();

        assert!(recorded(&app).heals.is_empty());
        assert_entity_count::<With<Collectible>>(&mut app, 1);
    }

    #[test]
    fn overlap_with_plain_entity_does_nothing() {
        let mut app = create_contact_test_app();
        let receiver = spawn_receiver(app.world_mut());
        let wall = app.world_mut().spawn_empty().id();

        touch(app.world_mut(), receiver, wall);
        app.update();

        assert_eq!(recorded(&app).overlaps.len(), 1);
        assert!(recorded(&app).damage.is_empty());
        assert_eq!(app.world().resource::<Score>().current, 0);
    }
}
