//! Testing utilities for Bevy systems.

#![cfg(test)]

use std::time::Duration;

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::gameplay::input::ActionState;
use crate::menus::Menu;
use crate::screens::GameState;

/// Creates a minimal app with `GameState` and `Menu` registered.
pub fn create_base_test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app.init_state::<Menu>();
    app
}

/// Creates a minimal app whose clock advances by exactly `step` every update.
pub fn create_fixed_step_test_app(step: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
    app.init_resource::<ActionState>();
    app.update(); // Initialize time
    app
}

/// Moves the app into `GameState::InGame` and applies the transition.
pub fn transition_to_ingame(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}

/// Asserts how many entities match the filter `F`.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    let count = query.iter(app.world()).count();
    assert_eq!(
        count, expected,
        "expected {expected} matching entities, found {count}"
    );
}

/// Spawns an entity with matching `Transform` and `GlobalTransform` at `(x, y)`.
pub fn spawn_at(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Transform::from_xyz(x, y, 0.0),
            GlobalTransform::from(Transform::from_xyz(x, y, 0.0)),
        ))
        .id()
}
