//! The patrol/chase state machine. Pure logic: positions in, velocity out.

use bevy::prelude::*;

use super::route::PatrolRoute;
use crate::gameplay::timed_gate::TimedGate;

/// Default patrol speed (pixels/second).
pub const DEFAULT_MOVE_SPEED: f32 = 64.0;

/// Default chase speed (pixels/second).
pub const DEFAULT_CHASE_SPEED: f32 = 128.0;

/// Default pause at each waypoint (seconds).
pub const DEFAULT_WAIT_SECS: f32 = 1.0;

/// Default detection radius (pixels).
pub const DEFAULT_DETECTION_RANGE: f32 = 160.0;

/// Default time the agent keeps chasing after losing sight of the target (seconds).
pub const DEFAULT_ALERT_SECS: f32 = 3.0;

/// Default distance at which a waypoint counts as reached (pixels).
pub const DEFAULT_ARRIVE_DISTANCE: f32 = 3.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum PatrolState {
    #[default]
    Patrolling,
    Chasing,
    /// Terminal. Entered through [`PatrolBrain::kill`].
    Dead,
}

/// Tuning for one patrol agent.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PatrolSettings {
    pub move_speed: f32,
    pub chase_speed: f32,
    pub wait_time: f32,
    pub detection_range: f32,
    pub alert_duration: f32,
    pub arrive_distance: f32,
}

impl Default for PatrolSettings {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            chase_speed: DEFAULT_CHASE_SPEED,
            wait_time: DEFAULT_WAIT_SECS,
            detection_range: DEFAULT_DETECTION_RANGE,
            alert_duration: DEFAULT_ALERT_SECS,
            arrive_distance: DEFAULT_ARRIVE_DISTANCE,
        }
    }
}

/// What the agent should do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolStep {
    pub velocity: Vec2,
    /// Set on the tick a waypoint is reached.
    pub snap_to: Option<Vec2>,
}

impl PatrolStep {
    pub const IDLE: Self = Self {
        velocity: Vec2::ZERO,
        snap_to: None,
    };
}

#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PatrolBrain {
    state: PatrolState,
    alert: TimedGate,
    wait: TimedGate,
}

impl PatrolBrain {
    #[must_use]
    pub const fn state(&self) -> PatrolState {
        self.state
    }

    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        self.wait.remaining() > 0.0
    }

    /// Seconds of alert left while chasing an out-of-range target.
    #[must_use]
    pub const fn alert_remaining(&self) -> f32 {
        self.alert.remaining()
    }

    /// Stops the agent for good.
    pub fn kill(&mut self) {
        self.state = PatrolState::Dead;
        self.alert.clear();
        self.wait.clear();
    }

    /// Advances the state machine by `dt` seconds.
    ///
    /// `target` is the tracked entity's position, or `None` when there is
    /// nothing to track. Detection is a plain distance check.
    pub fn tick(
        &mut self,
        settings: &PatrolSettings,
        route: &mut PatrolRoute,
        position: Vec2,
        target: Option<Vec2>,
        dt: f32,
    ) -> PatrolStep {
        if self.state == PatrolState::Dead {
            return PatrolStep::IDLE;
        }

        let detected = target.is_some_and(|t| position.distance(t) <= settings.detection_range);
        if detected {
            self.alert.arm(settings.alert_duration);
            self.state = PatrolState::Chasing;
        } else if self.state == PatrolState::Chasing {
            self.alert.tick(dt);
            if !self.alert.is_open() {
                self.state = PatrolState::Patrolling;
            }
        }

        match self.state {
            PatrolState::Chasing => target.map_or(PatrolStep::IDLE, |t| PatrolStep {
                velocity: (t - position).normalize_or_zero() * settings.chase_speed,
                snap_to: None,
            }),
            PatrolState::Patrolling => self.patrol(settings, route, position, dt),
            PatrolState::Dead => PatrolStep::IDLE,
        }
    }

    fn patrol(
        &mut self,
        settings: &PatrolSettings,
        route: &mut PatrolRoute,
        position: Vec2,
        dt: f32,
    ) -> PatrolStep {
        if self.wait.is_open() {
            self.wait.tick(dt);
            return PatrolStep::IDLE;
        }

        let Some(waypoint) = route.current_waypoint() else {
            return PatrolStep::IDLE;
        };

        let offset = waypoint - position;
        let distance = offset.length();
        if distance <= settings.arrive_distance {
            self.wait.arm(settings.wait_time);
            route.advance();
            return PatrolStep {
                velocity: Vec2::ZERO,
                snap_to: Some(waypoint),
            };
        }

        // Never overshoot the waypoint in a single step.
        let speed = if dt > 0.0 {
            settings.move_speed.min(distance / dt)
        } else {
            settings.move_speed
        };
        PatrolStep {
            velocity: offset / distance * speed,
            snap_to: None,
        }
    }
}
