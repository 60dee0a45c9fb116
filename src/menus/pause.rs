//! Pause menu: overlay with resume and restart.

use bevy::prelude::*;

use super::{Menu, restart};
use crate::GameSet;
use crate::gameplay::input::{Action, ActionState};
use crate::gameplay::score::Score;
use crate::screens::GameState;
use crate::theme::widget;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Pause), spawn_pause_menu);
    app.add_systems(
        Update,
        handle_pause_input
            .after(GameSet::Input)
            .run_if(in_state(Menu::Pause)),
    );
}

fn spawn_pause_menu(mut commands: Commands) {
    commands.spawn((
        widget::overlay(),
        DespawnOnExit(Menu::Pause),
        children![
            widget::header("PAUSED"),
            widget::button(
                "Resume",
                |_: On<Pointer<Click>>, mut next_menu: ResMut<NextState<Menu>>| {
                    next_menu.set(Menu::None);
                },
            ),
            widget::button(
                "Restart",
                |_: On<Pointer<Click>>,
                 mut next_game: ResMut<NextState<GameState>>,
                 mut next_menu: ResMut<NextState<Menu>>,
                 mut score: ResMut<Score>| {
                    restart(&mut next_game, &mut next_menu, &mut score);
                },
            ),
            widget::prompt("ESC to resume | R to restart"),
        ],
    ));
}

fn handle_pause_input(
    actions: Res<ActionState>,
    mut next_menu: ResMut<NextState<Menu>>,
    mut next_game: ResMut<NextState<GameState>>,
    mut score: ResMut<Score>,
) {
    if actions.pressed(Action::Restart) {
        restart(&mut next_game, &mut next_menu, &mut score);
    } else if actions.pressed(Action::Pause) {
        next_menu.set(Menu::None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_entity_count, transition_to_ingame};

    fn create_pause_test_app() -> App {
        let mut app = crate::testing::create_base_test_app();
        app.init_resource::<ActionState>();
        app.init_resource::<Score>();
        app.add_systems(Update, handle_pause_input);
        transition_to_ingame(&mut app);
        app
    }

    #[test]
    fn pause_action_resumes() {
        let mut app = create_pause_test_app();
        app.world_mut()
            .resource_mut::<ActionState>()
            .press(Action::Pause);
        app.update();

        let next_menu = app.world().resource::<NextState<Menu>>();
        assert!(
            matches!(*next_menu, NextState::Pending(Menu::None)),
            "Expected NextState<Menu>::None, got {next_menu:?}"
        );
    }

    #[test]
    fn restart_action_reloads_level() {
        let mut app = create_pause_test_app();
        app.world_mut().resource_mut::<Score>().add(30);
        app.world_mut()
            .resource_mut::<ActionState>()
            .press(Action::Restart);
        app.update();

        let next_state = app.world().resource::<NextState<GameState>>();
        assert!(
            matches!(*next_state, NextState::Pending(GameState::Loading)),
            "Expected NextState<GameState>::Loading, got {next_state:?}"
        );
        assert_eq!(app.world().resource::<Score>().best, 30);
    }

    #[test]
    fn pause_menu_spawns_header_prompt_and_buttons() {
        let mut app = crate::testing::create_base_test_app();
        app.add_plugins(plugin);
        app.init_resource::<ActionState>();
        app.init_resource::<Score>();
        transition_to_ingame(&mut app);
        app.world_mut()
            .resource_mut::<NextState<Menu>>()
            .set(Menu::Pause);
        app.update();

        // Header + prompt + 2 button labels.
        assert_entity_count::<With<Text>>(&mut app, 4);
        assert_entity_count::<With<Button>>(&mut app, 2);
    }
}
