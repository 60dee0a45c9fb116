//! Heads-up display: player health, score and inventory text, plus overhead
//! health bars on anything carrying a `HealthBar`.

use bevy::prelude::*;

use crate::gameplay::health::Health;
use crate::gameplay::inventory::Inventory;
use crate::gameplay::player::Player;
use crate::gameplay::score::Score;
use crate::screens::GameState;
use crate::theme::palette;
use crate::{GameSet, gameplay_running};

// === Components ===

/// Marker for the player health text.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HealthDisplay;

/// Marker for the score text.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ScoreDisplay;

/// Marker for the inventory text.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct InventoryDisplay;

/// Overhead health bar sizing. The bar children are spawned when this is added.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HealthBar {
    pub width: f32,
    pub height: f32,
    pub y_offset: f32,
}

/// Marker: red background bar (full width).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HealthBarBackground;

/// Marker: green foreground bar (scales with current/max HP).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HealthBarFill;

// === Formatting ===

#[must_use]
pub fn health_label(health: &Health) -> String {
    format!("HP {:.0}/{:.0}", health.current.ceil(), health.max)
}

#[must_use]
pub fn score_label(score: &Score) -> String {
    format!("Score {}   Best {}", score.current, score.best)
}

#[must_use]
pub fn inventory_label(inventory: &Inventory) -> String {
    if inventory.items().is_empty() {
        return "Items: none".to_owned();
    }
    let stacks: Vec<String> = inventory
        .items()
        .iter()
        .map(|stack| format!("{} x{}", stack.name, stack.quantity))
        .collect();
    format!("Items: {}", stacks.join(", "))
}

// === Systems ===

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("HUD"),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(12.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
        children![
            (
                HealthDisplay,
                Text::new(""),
                TextFont::from_font_size(palette::FONT_SIZE_HUD),
                TextColor(palette::HEADER_TEXT),
            ),
            (
                ScoreDisplay,
                Text::new(""),
                TextFont::from_font_size(palette::FONT_SIZE_HUD),
                TextColor(palette::SCORE_TEXT),
            ),
            (
                InventoryDisplay,
                Text::new(""),
                TextFont::from_font_size(palette::FONT_SIZE_HUD),
                TextColor(palette::BODY_TEXT),
            ),
        ],
    ));
}

fn update_health_display(
    players: Query<&Health, With<Player>>,
    mut texts: Query<&mut Text, With<HealthDisplay>>,
) {
    let Ok(health) = players.single() else {
        return;
    };
    let label = health_label(health);
    for mut text in &mut texts {
        if text.0 != label {
            text.0.clone_from(&label);
        }
    }
}

fn update_score_display(score: Res<Score>, mut texts: Query<&mut Text, With<ScoreDisplay>>) {
    let label = score_label(&score);
    for mut text in &mut texts {
        if text.0 != label {
            text.0.clone_from(&label);
        }
    }
}

fn update_inventory_display(
    players: Query<&Inventory, With<Player>>,
    mut texts: Query<&mut Text, With<InventoryDisplay>>,
) {
    let Ok(inventory) = players.single() else {
        return;
    };
    let label = inventory_label(inventory);
    for mut text in &mut texts {
        if text.0 != label {
            text.0.clone_from(&label);
        }
    }
}

fn spawn_health_bars(add: On<Add, HealthBar>, bars: Query<&HealthBar>, mut commands: Commands) {
    let Ok(bar) = bars.get(add.entity) else {
        return;
    };
    let size = Vec2::new(bar.width, bar.height);
    commands.entity(add.entity).with_children(|parent| {
        parent.spawn((
            Name::new("Health Bar BG"),
            HealthBarBackground,
            Sprite::from_color(palette::HEALTH_BAR_BG, size),
            Transform::from_xyz(0.0, bar.y_offset, 1.0),
        ));
        parent.spawn((
            Name::new("Health Bar Fill"),
            HealthBarFill,
            Sprite::from_color(palette::HEALTH_BAR_FILL, size),
            Transform::from_xyz(0.0, bar.y_offset, 1.1),
        ));
    });
}

/// Scales each bar fill to the owner's health fraction, left-aligned.
fn update_health_bars(
    owners: Query<(&Health, &HealthBar, &Children)>,
    mut fills: Query<&mut Transform, With<HealthBarFill>>,
) {
    for (health, bar, children) in &owners {
        let ratio = health.fraction();
        for child in children.iter() {
            if let Ok(mut transform) = fills.get_mut(child) {
                transform.scale.x = ratio;
                transform.translation.x = -bar.width * (1.0 - ratio) / 2.0;
            }
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<HealthDisplay>()
        .register_type::<ScoreDisplay>()
        .register_type::<InventoryDisplay>()
        .register_type::<HealthBar>()
        .register_type::<HealthBarBackground>()
        .register_type::<HealthBarFill>();

    app.add_observer(spawn_health_bars);
    app.add_systems(OnEnter(GameState::InGame), spawn_hud);
    app.add_systems(
        Update,
        (
            update_health_display,
            update_score_display,
            update_inventory_display,
            update_health_bars,
        )
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn health_label_rounds_partial_health_up() {
        let health = Health {
            current: 1.5,
            max: 3.0,
        };
        assert_eq!(health_label(&health), "HP 2/3");
    }

    #[test]
    fn score_label_shows_current_and_best() {
        let score = Score {
            current: 20,
            best: 50,
            ..default()
        };
        assert_eq!(score_label(&score), "Score 20   Best 50");
    }

    #[test]
    fn inventory_label_lists_stacks_in_slot_order() {
        let mut inventory = Inventory::default();
        assert_eq!(inventory_label(&inventory), "Items: none");

        inventory.add("gem", 2);
        inventory.add("key", 1);
        assert_eq!(inventory_label(&inventory), "Items: gem x2, key x1");
    }
}
