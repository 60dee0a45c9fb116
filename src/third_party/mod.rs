//! Third-party plugin isolation.

mod avian;

pub use avian::{CollisionLayer, PIXELS_PER_METER, WORLD_GRAVITY, probe_ground};

pub fn plugin(app: &mut bevy::prelude::App) {
    app.add_plugins(avian::plugin);
}
