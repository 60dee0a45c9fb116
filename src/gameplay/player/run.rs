//! Horizontal running with acceleration, deceleration and reduced air control.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::Player;
use super::ground::Grounded;
use crate::gameplay::input::{ActionState, InputAxis};

/// Below this axis magnitude the player is treated as not steering.
const AXIS_DEADZONE: f32 = 0.01;

/// Tuning for horizontal movement.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct RunSettings {
    /// Top horizontal speed (pixels per second).
    pub max_speed: f32,
    /// Rate (per second) at which the speed gap closes while steering.
    pub acceleration: f32,
    /// Rate (per second) at which the speed gap closes with no input.
    pub deceleration: f32,
    /// Multiplier on both rates while airborne. In `[0, 1]`.
    pub air_control: f32,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            max_speed: 256.0,
            acceleration: 10.0,
            deceleration: 10.0,
            air_control: 0.5,
        }
    }
}

/// New horizontal velocity after one tick of steering with `axis`.
///
/// Closes the gap to `axis * max_speed` by `rate * dt` of the gap, never
/// overshooting the target speed.
#[must_use]
pub fn run_velocity(
    settings: &RunSettings,
    current_vx: f32,
    axis: f32,
    grounded: bool,
    dt: f32,
) -> f32 {
    let target = axis.clamp(-1.0, 1.0) * settings.max_speed;
    let mut rate = if axis.abs() > AXIS_DEADZONE {
        settings.acceleration
    } else {
        settings.deceleration
    };
    if !grounded {
        rate *= settings.air_control;
    }
    let blend = (rate * dt.max(0.0)).clamp(0.0, 1.0);
    (target - current_vx).mul_add(blend, current_vx)
}

/// Steers the player horizontally. Runs in `GameSet::Movement`.
pub(super) fn player_run(
    time: Res<Time>,
    actions: Res<ActionState>,
    mut players: Query<(&RunSettings, &Grounded, &mut LinearVelocity), With<Player>>,
) {
    let axis = actions.axis(InputAxis::Horizontal);
    let dt = time.delta_secs();
    for (settings, grounded, mut velocity) in &mut players {
        velocity.x = run_velocity(settings, velocity.x, axis, grounded.0, dt);
    }
}
