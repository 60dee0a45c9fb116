//! UI building blocks for the loading screen, the pause menu and the
//! game-over panel.

use bevy::ecs::hierarchy::ChildSpawner;
use bevy::ecs::spawn::SpawnWith;
use bevy::ecs::system::IntoObserverSystem;
use bevy::prelude::*;

use super::interaction::InteractionPalette;
use super::palette;

const STACK_GAP: f32 = 20.0;
const BUTTON_SIZE: Vec2 = Vec2::new(260.0, 56.0);

/// Centered column covering the whole window.
pub fn ui_root(name: impl Into<std::borrow::Cow<'static, str>>) -> impl Bundle {
    (
        Name::new(name),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(STACK_GAP),
            ..default()
        },
    )
}

/// `ui_root` over a dimmed backdrop, drawn above the HUD.
pub fn overlay() -> impl Bundle {
    (
        ui_root("Overlay"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        GlobalZIndex(1),
    )
}

fn text(content: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(content),
        TextFont::from_font_size(size),
        TextColor(color),
    )
}

pub fn header(content: impl Into<String>) -> impl Bundle {
    text(content, palette::FONT_SIZE_HEADER, palette::HEADER_TEXT)
}

pub fn label(content: impl Into<String>) -> impl Bundle {
    text(content, palette::FONT_SIZE_LABEL, palette::BODY_TEXT)
}

/// Key hints under the menu buttons.
pub fn prompt(content: impl Into<String>) -> impl Bundle {
    text(content, palette::FONT_SIZE_PROMPT, palette::BODY_TEXT)
}

/// Menu button that runs `action` when clicked. The clickable node is a
/// child so the observer sees the `Pointer` events on the `Button` itself.
pub fn button<E, B, M, I>(caption: impl Into<String>, action: I) -> impl Bundle
where
    E: EntityEvent,
    B: Bundle,
    I: IntoObserverSystem<E, B, M>,
{
    let caption = caption.into();
    let action = IntoObserverSystem::into_system(action);
    (
        Name::new("Button"),
        Node::default(),
        Children::spawn(SpawnWith(move |parent: &mut ChildSpawner| {
            parent
                .spawn((
                    Name::new("Button Inner"),
                    Button,
                    Node {
                        width: Val::Px(BUTTON_SIZE.x),
                        height: Val::Px(BUTTON_SIZE.y),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(palette::BUTTON_BACKGROUND),
                    BorderColor::all(palette::PANEL_BORDER),
                    InteractionPalette {
                        none: palette::BUTTON_BACKGROUND,
                        hovered: palette::BUTTON_HOVERED_BACKGROUND,
                        pressed: palette::BUTTON_PRESSED_BACKGROUND,
                    },
                    children![(
                        text(caption, palette::FONT_SIZE_LABEL, palette::BUTTON_TEXT),
                        Pickable::IGNORE,
                    )],
                ))
                .observe(action);
        })),
    )
}
