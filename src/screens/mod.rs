//! Top-level game states and the screens that own them.

mod in_game;
mod loading;

use bevy::prelude::*;

/// Primary game states.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
#[states(scoped_entities)]
pub enum GameState {
    /// Initial state; also the stop between a game over and a restart.
    #[default]
    Loading,
    /// The level is live.
    InGame,
}

pub(super) fn plugin(app: &mut App) {
    app.init_state::<GameState>();
    app.add_plugins((loading::plugin, in_game::plugin));
}
