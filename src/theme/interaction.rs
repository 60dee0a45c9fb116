//! Button hover/press feedback for menu buttons.

use bevy::picking::hover::Hovered;
use bevy::prelude::*;
use bevy::ui::Pressed;

/// Background colors for a button's idle, hovered and pressed looks.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
#[require(Hovered)]
pub struct InteractionPalette {
    pub none: Color,
    pub hovered: Color,
    pub pressed: Color,
}

impl InteractionPalette {
    /// Pressed wins over hovered.
    #[must_use]
    pub const fn pick(&self, pressed: bool, hovered: bool) -> Color {
        match (pressed, hovered) {
            (true, _) => self.pressed,
            (false, true) => self.hovered,
            (false, false) => self.none,
        }
    }
}

fn apply_interaction_palette(
    mut buttons: Query<
        (
            Has<Pressed>,
            &Hovered,
            &InteractionPalette,
            &mut BackgroundColor,
        ),
        Changed<Interaction>,
    >,
) {
    for (pressed, Hovered(hovered), palette, mut background) in &mut buttons {
        *background = palette.pick(pressed, *hovered).into();
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<InteractionPalette>();
    app.add_systems(Update, apply_interaction_palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette;
    use pretty_assertions::assert_eq;

    fn menu_palette() -> InteractionPalette {
        InteractionPalette {
            none: palette::BUTTON_BACKGROUND,
            hovered: palette::BUTTON_HOVERED_BACKGROUND,
            pressed: palette::BUTTON_PRESSED_BACKGROUND,
        }
    }

    #[test]
    fn pressed_beats_hovered() {
        let palette = menu_palette();
        assert_eq!(palette.pick(true, true), palette::BUTTON_PRESSED_BACKGROUND);
        assert_eq!(palette.pick(false, true), palette::BUTTON_HOVERED_BACKGROUND);
        assert_eq!(palette.pick(false, false), palette::BUTTON_BACKGROUND);
    }

    #[test]
    fn idle_button_gets_idle_color() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, apply_interaction_palette);

        app.world_mut().spawn((
            Button,
            BackgroundColor(Color::BLACK),
            menu_palette(),
            Interaction::None,
        ));
        app.update();

        let mut query = app.world_mut().query::<&BackgroundColor>();
        let background = query.single(app.world()).unwrap();
        assert_eq!(background.0, palette::BUTTON_BACKGROUND);
    }
}
