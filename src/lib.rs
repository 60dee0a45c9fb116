//! Platformer kit: timed-gate jumping, patrol/chase AI, and the small
//! gameplay systems around them, packaged as Bevy plugins.

#[cfg(feature = "dev")]
pub mod dev_tools;
pub mod gameplay;
pub mod menus;
pub mod screens;
#[cfg(test)]
pub mod testing;
mod theme;
pub mod third_party;

use bevy::prelude::*;

use crate::menus::Menu;
use crate::screens::GameState;

// === Render Layers ===

/// Z depth for level geometry (platforms, hazards).
pub const Z_LEVEL: f32 = 0.0;

/// Z depth for pickups.
pub const Z_PICKUP: f32 = 1.0;

/// Z depth for characters (player, patrol agents).
pub const Z_CHARACTER: f32 = 2.0;

// === System Ordering ===

/// Per-frame ordering of gameplay systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Sample raw input into `ActionState`.
    Input,
    /// Grounded checks and AI decisions.
    Ai,
    /// Velocity writes (jump, run, patrol steering).
    Movement,
    /// Overlaps, damage, pickups.
    Combat,
    /// Death detection and cleanup.
    Death,
    /// HUD and camera.
    Ui,
}

/// Run condition: in-game with no menu overlay open.
#[must_use]
pub fn gameplay_running(game_state: Res<State<GameState>>, menu: Res<State<Menu>>) -> bool {
    *game_state.get() == GameState::InGame && *menu.get() == Menu::None
}

/// Registers every gameplay plugin. Windowing, rendering and `dev_tools` are added by the binary.
pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Ai,
            GameSet::Movement,
            GameSet::Combat,
            GameSet::Death,
            GameSet::Ui,
        )
            .chain(),
    );

    app.add_plugins((
        screens::plugin,
        menus::plugin,
        gameplay::plugin,
        theme::plugin,
        third_party::plugin,
    ));
}
