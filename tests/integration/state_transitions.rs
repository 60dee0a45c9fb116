//! Tests for game state and menu transitions with the full game plugin.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use platformer_kit::gameplay::patrol::PatrolAgent;
use platformer_kit::gameplay::player::Player;
use platformer_kit::gameplay::score::Score;
use platformer_kit::menus::Menu;
use platformer_kit::screens::GameState;
use pretty_assertions::assert_eq;

fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, TransformPlugin));
    // Raw key state is driven by hand; no InputPlugin clearing it each frame.
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(platformer_kit::plugin);
    app
}

/// Runs frames until the level is live.
fn enter_game(app: &mut App) {
    for _ in 0..3 {
        app.update();
    }
    assert_eq!(game_state(app), GameState::InGame);
}

/// Presses `key` for exactly one frame.
fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release(key);
    keyboard.clear();
}

fn game_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn menu(app: &App) -> Menu {
    *app.world().resource::<State<Menu>>().get()
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    query.iter(app.world()).count()
}

#[test]
fn game_initializes_in_loading_state() {
    let app = create_game_app();
    assert_eq!(game_state(&app), GameState::Loading);
    assert_eq!(menu(&app), Menu::None);
}

#[test]
fn loading_flows_into_a_populated_level() {
    let mut app = create_game_app();
    enter_game(&mut app);

    assert_eq!(count::<With<Player>>(&mut app), 1);
    assert_eq!(count::<With<PatrolAgent>>(&mut app), 2);
}

#[test]
fn escape_pauses_and_resumes() {
    let mut app = create_game_app();
    enter_game(&mut app);

    tap(&mut app, KeyCode::Escape);
    app.update();
    assert_eq!(menu(&app), Menu::Pause);
    assert!(app.world().resource::<Time<Virtual>>().is_paused());

    tap(&mut app, KeyCode::Escape);
    app.update();
    assert_eq!(menu(&app), Menu::None);
    assert!(!app.world().resource::<Time<Virtual>>().is_paused());
}

#[test]
fn restart_from_game_over_rebuilds_level_and_keeps_best() {
    let mut app = create_game_app();
    enter_game(&mut app);
    app.world_mut().resource_mut::<Score>().add(70);
    app.world_mut()
        .resource_mut::<NextState<Menu>>()
        .set(Menu::GameOver);
    app.update();
    assert_eq!(menu(&app), Menu::GameOver);

    tap(&mut app, KeyCode::KeyR);
    enter_game(&mut app);

    assert_eq!(menu(&app), Menu::None);
    assert_eq!(count::<With<Player>>(&mut app), 1);
    let score = app.world().resource::<Score>();
    assert_eq!(score.current, 0);
    assert_eq!(score.best, 70);
}
