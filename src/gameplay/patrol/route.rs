//! Ordered waypoint routes with looping or ping-pong traversal.

use bevy::prelude::*;

/// Waypoints a patrol agent cycles through, and where it is headed next.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct PatrolRoute {
    waypoints: Vec<Vec2>,
    /// Wrap from the last waypoint to the first instead of reversing.
    pub looping: bool,
    current: usize,
    moving_forward: bool,
}

impl PatrolRoute {
    #[must_use]
    pub const fn new(waypoints: Vec<Vec2>, looping: bool) -> Self {
        Self {
            waypoints,
            looping,
            current: 0,
            moving_forward: true,
        }
    }

    #[must_use]
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// Replaces the waypoints and restarts from the first one.
    pub fn set_waypoints(&mut self, waypoints: Vec<Vec2>) {
        self.waypoints = waypoints;
        self.current = 0;
        self.moving_forward = true;
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn is_moving_forward(&self) -> bool {
        self.moving_forward
    }

    /// The waypoint being steered toward, if the route has any.
    #[must_use]
    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(self.current).copied()
    }

    /// Moves on to the next waypoint.
    ///
    /// Looping routes wrap `(i + 1) mod len`. Non-looping routes walk back
    /// and forth: past the last index they turn around to `len - 2`, and
    /// past index 0 they turn around to 1. Routes with fewer than two
    /// waypoints stay where they are.
    pub fn advance(&mut self) {
        let len = self.waypoints.len();
        if len < 2 {
            self.current = 0;
            return;
        }

        if self.looping {
            self.current = (self.current + 1) % len;
            return;
        }

        if self.moving_forward {
            if self.current + 1 >= len {
                self.current = len - 2;
                self.moving_forward = false;
            } else {
                self.current += 1;
            }
        } else if self.current == 0 {
            self.current = 1;
            self.moving_forward = true;
        } else {
            self.current -= 1;
        }
    }
}
