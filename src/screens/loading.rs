//! Loading screen. Nothing is streamed from disk, so it hands over to the
//! level on the next frame.

use bevy::prelude::*;

use super::GameState;
use crate::theme::widget;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Loading), spawn_loading_screen)
        .add_systems(
            Update,
            finish_loading.run_if(in_state(GameState::Loading)),
        );
}

fn spawn_loading_screen(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Loading Screen"),
        DespawnOnExit(GameState::Loading),
        children![widget::header("Loading...")],
    ));
}

fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}
