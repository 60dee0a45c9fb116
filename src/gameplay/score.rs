//! Score keeping: current run score and best score across restarts.

use bevy::prelude::*;

use crate::screens::GameState;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct Score {
    pub current: u32,
    pub best: u32,
    /// This run has already passed the best it started with.
    pub record_run: bool,
}

impl Score {
    /// Adds `points`. Returns `true` if this set a new best.
    pub const fn add(&mut self, points: u32) -> bool {
        self.current = self.current.saturating_add(points);
        if self.current > self.best {
            self.best = self.current;
            self.record_run = true;
            return true;
        }
        false
    }

    /// Starts a new run. The best score is kept.
    pub const fn reset(&mut self) {
        self.current = 0;
        self.record_run = false;
    }
}

/// The score changed because of a pickup.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChanged {
    pub current: u32,
    pub new_best: bool,
}

fn reset_score(mut score: ResMut<Score>) {
    score.reset();
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Score>().init_resource::<Score>();
    app.add_message::<ScoreChanged>();
    app.add_systems(OnEnter(GameState::InGame), reset_score);
}
