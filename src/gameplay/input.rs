//! Input sampling: keyboard state folded into a per-frame `ActionState` snapshot.
//!
//! Gameplay systems never read `ButtonInput<KeyCode>` directly. They read
//! named action edges and axes from [`ActionState`], which tests can set by hand.

use bevy::prelude::*;

use crate::GameSet;

/// Discrete actions the player can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Action {
    Jump,
    Pause,
    Restart,
}

impl Action {
    pub const ALL: [Self; 3] = [Self::Jump, Self::Pause, Self::Restart];

    const fn index(self) -> usize {
        match self {
            Self::Jump => 0,
            Self::Pause => 1,
            Self::Restart => 2,
        }
    }
}

/// Continuous axes in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum InputAxis {
    Horizontal,
}

/// Edge state of one action for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct ButtonEdges {
    pub pressed: bool,
    pub held: bool,
    pub released: bool,
}

/// Key bindings for every action and axis direction.
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct InputBindings {
    pub jump: Vec<KeyCode>,
    pub pause: Vec<KeyCode>,
    pub restart: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            jump: vec![KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp],
            pause: vec![KeyCode::Escape],
            restart: vec![KeyCode::KeyR],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
        }
    }
}

impl InputBindings {
    #[must_use]
    pub fn keys(&self, action: Action) -> &[KeyCode] {
        match action {
            Action::Jump => &self.jump,
            Action::Pause => &self.pause,
            Action::Restart => &self.restart,
        }
    }
}

/// Snapshot of all actions and axes, refreshed once per frame in `GameSet::Input`.
#[derive(Resource, Debug, Clone, Default, Reflect)]
#[reflect(Resource)]
pub struct ActionState {
    buttons: [ButtonEdges; 3],
    horizontal: f32,
}

impl ActionState {
    #[must_use]
    pub const fn edges(&self, action: Action) -> ButtonEdges {
        self.buttons[action.index()]
    }

    /// Went down this frame.
    #[must_use]
    pub const fn pressed(&self, action: Action) -> bool {
        self.edges(action).pressed
    }

    /// Down this frame (including the frame it went down).
    #[must_use]
    pub const fn held(&self, action: Action) -> bool {
        self.edges(action).held
    }

    /// Went up this frame.
    #[must_use]
    pub const fn released(&self, action: Action) -> bool {
        self.edges(action).released
    }

    #[must_use]
    pub const fn axis(&self, axis: InputAxis) -> f32 {
        match axis {
            InputAxis::Horizontal => self.horizontal,
        }
    }

    pub const fn set_edges(&mut self, action: Action, edges: ButtonEdges) {
        self.buttons[action.index()] = edges;
    }

    /// Marks `action` as pressed and held this frame.
    pub const fn press(&mut self, action: Action) {
        self.set_edges(
            action,
            ButtonEdges {
                pressed: true,
                held: true,
                released: false,
            },
        );
    }

    /// Marks `action` as released this frame.
    pub const fn release(&mut self, action: Action) {
        self.set_edges(
            action,
            ButtonEdges {
                pressed: false,
                held: false,
                released: true,
            },
        );
    }

    pub fn set_axis(&mut self, axis: InputAxis, value: f32) {
        match axis {
            InputAxis::Horizontal => self.horizontal = value.clamp(-1.0, 1.0),
        }
    }
}

fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut state: ResMut<ActionState>,
) {
    for action in Action::ALL {
        let keys = bindings.keys(action);
        state.set_edges(
            action,
            ButtonEdges {
                pressed: keyboard.any_just_pressed(keys.iter().copied()),
                held: keyboard.any_pressed(keys.iter().copied()),
                released: keyboard.any_just_released(keys.iter().copied()),
            },
        );
    }

    let mut horizontal = 0.0;
    if keyboard.any_pressed(bindings.right.iter().copied()) {
        horizontal += 1.0;
    }
    if keyboard.any_pressed(bindings.left.iter().copied()) {
        horizontal -= 1.0;
    }
    state.set_axis(InputAxis::Horizontal, horizontal);
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<InputBindings>()
        .register_type::<ActionState>()
        .init_resource::<InputBindings>()
        .init_resource::<ActionState>();

    // Sampled every frame, paused or not, so menus see fresh edges.
    app.add_systems(Update, sample_input.in_set(GameSet::Input));
}
