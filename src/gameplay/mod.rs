//! Gameplay domain plugins: the jump controller, patrol agents, and the
//! health, contact, score, inventory, camera and HUD systems around them.

pub mod camera;
pub mod contact;
pub mod health;
pub mod hud;
pub mod input;
pub mod inventory;
pub mod level;
pub mod patrol;
pub mod player;
pub mod score;
pub mod timed_gate;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        input::plugin,
        player::plugin,
        patrol::plugin,
        health::plugin,
        contact::plugin,
        score::plugin,
        inventory::plugin,
        camera::plugin,
        hud::plugin,
        level::plugin,
    ));
}
