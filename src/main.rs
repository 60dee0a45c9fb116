//! Platformer kit demo entry point.

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Platformer Kit".to_string(),
                    resolution: (1280, 720).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins(platformer_kit::plugin);

    #[cfg(feature = "dev")]
    app.add_plugins(platformer_kit::dev_tools::plugin);

    app.run();
}
