//! Game-over overlay: final and best score, and a way back in.

use bevy::prelude::*;

use super::{Menu, restart};
use crate::GameSet;
use crate::gameplay::input::{Action, ActionState};
use crate::gameplay::score::Score;
use crate::screens::GameState;
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::GameOver), spawn_game_over_screen);
    app.add_systems(
        Update,
        handle_game_over_input
            .after(GameSet::Input)
            .run_if(in_state(Menu::GameOver)),
    );
}

fn spawn_game_over_screen(mut commands: Commands, score: Res<Score>) {
    commands.spawn((
        widget::overlay(),
        DespawnOnExit(Menu::GameOver),
        children![(
            Name::new("Game Over Panel"),
            Node {
                width: Val::Px(500.0),
                min_height: Val::Px(300.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceEvenly,
                padding: UiRect::all(Val::Px(40.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(palette::PANEL_BACKGROUND),
            BorderColor::all(palette::PANEL_BORDER),
            children![
                (
                    Text::new("GAME OVER"),
                    TextFont::from_font_size(palette::FONT_SIZE_HEADER),
                    TextColor(palette::HAZARD),
                ),
                widget::label(format!("Score {}   Best {}", score.current, score.best)),
                widget::button(
                    "Restart",
                    |_: On<Pointer<Click>>,
                     mut next_game: ResMut<NextState<GameState>>,
                     mut next_menu: ResMut<NextState<Menu>>,
                     mut score: ResMut<Score>| {
                        restart(&mut next_game, &mut next_menu, &mut score);
                    },
                ),
            ],
        )],
    ));
}

fn handle_game_over_input(
    actions: Res<ActionState>,
    mut next_menu: ResMut<NextState<Menu>>,
    mut next_game: ResMut<NextState<GameState>>,
    mut score: ResMut<Score>,
) {
    if actions.pressed(Action::Restart) || actions.pressed(Action::Jump) {
        restart(&mut next_game, &mut next_menu, &mut score);
    }
}
