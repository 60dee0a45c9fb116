//! Jumping: coyote time, jump buffering, variable height, and heavier falls.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::Player;
use super::ground::Grounded;
use crate::gameplay::input::{Action, ActionState};
use crate::gameplay::timed_gate::TimedGate;

// === Constants ===

/// Default peak jump height (pixels).
pub const DEFAULT_JUMP_HEIGHT: f32 = 96.0;

/// Default time to reach the peak of a jump (seconds).
pub const DEFAULT_JUMP_TIME_TO_APEX: f32 = 0.4;

/// Default grace period after leaving the ground (seconds).
pub const DEFAULT_COYOTE_TIME: f32 = 0.1;

/// Default grace period before landing for an early jump press (seconds).
pub const DEFAULT_JUMP_BUFFER_TIME: f32 = 0.1;

/// Rising faster than this (pixels per second) counts as airborne, even if
/// the ground probe has not caught up with the last physics step yet.
const TAKEOFF_SPEED: f32 = 1.0;

// === Settings ===

/// Tuning for a jumping body.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct JumpSettings {
    /// Upward velocity set on takeoff (pixels per second).
    pub jump_speed: f32,
    /// Gravity this body should feel (pixels per second squared, positive).
    pub gravity: f32,
    pub coyote_time: f32,
    pub buffer_time: f32,
    /// Vertical velocity multiplier applied once when the jump is released early. In `(0, 1)`.
    pub cut_multiplier: f32,
    /// Extra gravity while falling, as a multiple of `gravity`. `1.0` disables it.
    pub fall_multiplier: f32,
}

impl JumpSettings {
    /// Derives takeoff speed and gravity from a desired peak height and time to apex.
    #[must_use]
    pub fn from_height_and_apex(height: f32, time_to_apex: f32) -> Self {
        let gravity = 2.0 * height / (time_to_apex * time_to_apex);
        Self {
            jump_speed: gravity * time_to_apex,
            gravity,
            coyote_time: DEFAULT_COYOTE_TIME,
            buffer_time: DEFAULT_JUMP_BUFFER_TIME,
            cut_multiplier: 0.5,
            fall_multiplier: 1.5,
        }
    }

    /// `GravityScale` that makes a body feel `self.gravity` under `world_gravity`.
    #[must_use]
    pub fn gravity_scale(&self, world_gravity: f32) -> f32 {
        if world_gravity.abs() < f32::EPSILON {
            return 0.0;
        }
        self.gravity / world_gravity.abs()
    }
}

impl Default for JumpSettings {
    fn default() -> Self {
        Self::from_height_and_apex(DEFAULT_JUMP_HEIGHT, DEFAULT_JUMP_TIME_TO_APEX)
    }
}

// === Controller ===

/// Jump timing state: coyote window, input buffer, and the one-shot release cut.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct JumpController {
    pub coyote: TimedGate,
    pub buffer: TimedGate,
    cut_available: bool,
}

impl JumpController {
    /// Advances both windows by one tick and decides whether a jump fires now.
    ///
    /// When it fires, both windows are closed so the same press cannot fire
    /// twice and a second jump needs fresh ground contact.
    pub fn tick(
        &mut self,
        settings: &JumpSettings,
        grounded: bool,
        jump_pressed: bool,
        dt: f32,
    ) -> bool {
        if grounded {
            self.coyote.arm(settings.coyote_time);
        } else {
            self.coyote.tick(dt);
        }

        if jump_pressed {
            self.buffer.arm(settings.buffer_time);
        } else {
            self.buffer.tick(dt);
        }

        if self.buffer.is_open() && self.coyote.is_open() {
            self.buffer.clear();
            self.coyote.clear();
            self.cut_available = true;
            return true;
        }
        false
    }

    /// Shortens the current ascent if the jump input is no longer held.
    ///
    /// Returns the new vertical velocity the first time it applies during an
    /// ascent, and `None` otherwise.
    pub fn release_cut(&mut self, settings: &JumpSettings, held: bool, vy: f32) -> Option<f32> {
        if vy <= 0.0 {
            self.cut_available = false;
            return None;
        }
        if held || !self.cut_available {
            return None;
        }
        self.cut_available = false;
        Some(vy * settings.cut_multiplier)
    }
}

/// Extra downward velocity for one tick of falling.
#[must_use]
pub fn fall_boost(settings: &JumpSettings, vy: f32, dt: f32) -> f32 {
    if vy >= 0.0 || settings.fall_multiplier <= 1.0 {
        return 0.0;
    }
    -settings.gravity * (settings.fall_multiplier - 1.0) * dt
}

// === Systems ===

/// Applies jump decisions to the player's velocity. Runs in `GameSet::Movement`.
pub(super) fn player_jump(
    time: Res<Time>,
    actions: Res<ActionState>,
    mut players: Query<
        (
            Entity,
            &JumpSettings,
            &mut JumpController,
            &Grounded,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let pressed = actions.pressed(Action::Jump);
    let held = actions.held(Action::Jump);

    for (entity, settings, mut controller, grounded, mut velocity) in &mut players {
        let on_ground = grounded.0 && velocity.y <= TAKEOFF_SPEED;
        if controller.tick(settings, on_ground, pressed, dt) {
            velocity.y = settings.jump_speed;
            debug!("{entity} jumped");
            continue;
        }

        if let Some(vy) = controller.release_cut(settings, held, velocity.y) {
            velocity.y = vy;
        }
        velocity.y += fall_boost(settings, velocity.y, dt);
    }
}
