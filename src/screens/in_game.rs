//! In-game screen: opens the pause menu on request and the game-over
//! overlay when the player dies.

use bevy::prelude::*;

use super::GameState;
use crate::gameplay::health::{Died, check_death};
use crate::gameplay::input::{Action, ActionState};
use crate::gameplay::player::Player;
use crate::menus::Menu;
use crate::{GameSet, gameplay_running};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnExit(GameState::InGame), close_menus);
    app.add_systems(
        Update,
        (
            open_pause_menu.after(GameSet::Input).before(GameSet::Ai),
            open_game_over.in_set(GameSet::Death).after(check_death),
        )
            .run_if(gameplay_running),
    );
}

fn open_pause_menu(actions: Res<ActionState>, mut next_menu: ResMut<NextState<Menu>>) {
    if actions.pressed(Action::Pause) {
        next_menu.set(Menu::Pause);
    }
}

fn open_game_over(
    mut died: MessageReader<Died>,
    players: Query<(), With<Player>>,
    mut next_menu: ResMut<NextState<Menu>>,
) {
    if died.read().any(|death| players.contains(death.entity)) {
        info!("Player died, game over");
        next_menu.set(Menu::GameOver);
    }
}

fn close_menus(mut next_menu: ResMut<NextState<Menu>>) {
    next_menu.set(Menu::None);
}
