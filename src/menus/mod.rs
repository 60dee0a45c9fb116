//! Menu overlays shown on top of the level.
//!
//! `Menu` is orthogonal to `GameState`: menus are overlays, not screens.
//! Any open menu pauses virtual time, which freezes physics and every
//! gate and timer in the game.

mod game_over;
mod pause;

use bevy::prelude::*;

use crate::gameplay::score::Score;
use crate::screens::GameState;

/// Menu overlay states. Orthogonal to `GameState`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
#[states(scoped_entities)]
pub enum Menu {
    /// No menu overlay is active.
    #[default]
    None,
    /// Pause menu.
    Pause,
    /// Shown after the player dies.
    GameOver,
}

pub(super) fn plugin(app: &mut App) {
    app.init_state::<Menu>();
    app.add_plugins((pause::plugin, game_over::plugin));

    // Avian steps in FixedPostUpdate, which accumulates from Time<Virtual>.
    app.add_systems(OnExit(Menu::None), pause_virtual_time);
    app.add_systems(OnEnter(Menu::None), unpause_virtual_time);
}

fn pause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn unpause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}

/// Tears the level down and builds a fresh one. The best score survives.
fn restart(
    next_game: &mut NextState<GameState>,
    next_menu: &mut NextState<Menu>,
    score: &mut Score,
) {
    info!("Restarting level (best score {})", score.best);
    score.reset();
    next_menu.set(Menu::None);
    next_game.set(GameState::Loading);
}
