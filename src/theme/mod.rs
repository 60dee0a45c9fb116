//! Shared look: color palette, button feedback, and reusable widget constructors.

pub mod interaction;
pub mod palette;
pub mod widget;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(palette::BACKGROUND));
    app.add_plugins(interaction::plugin);
}
