//! Main camera: smooth follow of the player, clamped to level bounds, plus
//! a decaying random shake when the player gets hit.

use bevy::prelude::*;
use rand::Rng;

use crate::gameplay::health::DamageTaken;
use crate::gameplay::player::Player;
use crate::gameplay::timed_gate::TimedGate;
use crate::{GameSet, gameplay_running};

// === Constants ===

/// How quickly the camera closes on its target (fraction per second).
pub const DEFAULT_FOLLOW_SPEED: f32 = 4.0;

/// Shake applied when the player takes damage (seconds).
pub const HIT_SHAKE_SECS: f32 = 0.3;

/// Peak shake offset when the player takes damage (pixels).
pub const HIT_SHAKE_INTENSITY: f32 = 8.0;

// === Components ===

/// Marker for the main game camera.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MainCamera;

/// Smoothly tracks `target`, keeping the anchor inside `bounds`.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct CameraFollow {
    pub target: Option<Entity>,
    pub speed: f32,
    pub offset: Vec2,
    pub bounds: Option<Rect>,
    /// Where the camera sits before shake is added.
    pub anchor: Vec2,
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self {
            target: None,
            speed: DEFAULT_FOLLOW_SPEED,
            offset: Vec2::ZERO,
            bounds: None,
            anchor: Vec2::ZERO,
        }
    }
}

/// Random jitter around the anchor that fades out over `duration`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CameraShake {
    pub window: TimedGate,
    pub duration: f32,
    pub intensity: f32,
}

impl CameraShake {
    /// Starts a new shake, replacing any shake in progress.
    pub fn start(&mut self, duration: f32, intensity: f32) {
        self.window.arm(duration);
        self.duration = duration;
        self.intensity = intensity;
    }

    /// Current offset. Each axis is uniform in `[-strength, strength]`,
    /// where strength decays linearly to zero as the window closes.
    pub fn offset(&self, rng: &mut impl Rng) -> Vec2 {
        if !self.window.is_open() {
            return Vec2::ZERO;
        }
        let strength = self.intensity * self.window.fraction_of(self.duration);
        Vec2::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        ) * strength
    }
}

// === Messages ===

/// Request a camera shake.
#[derive(Message, Debug, Clone, Copy)]
pub struct ShakeRequest {
    pub duration: f32,
    pub intensity: f32,
}

// === Pure Logic ===

/// Next anchor position when following `target_position`.
#[must_use]
pub fn follow_step(follow: &CameraFollow, target_position: Vec2, dt: f32) -> Vec2 {
    let mut desired = target_position + follow.offset;
    if let Some(bounds) = follow.bounds {
        desired = desired.clamp(bounds.min, bounds.max);
    }
    let blend = (follow.speed * dt).clamp(0.0, 1.0);
    follow.anchor.lerp(desired, blend)
}

// === Systems ===

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Main Camera"),
        MainCamera,
        Camera2d,
        CameraFollow::default(),
        CameraShake::default(),
    ));
}

/// Points the camera at the player as soon as one exists.
fn follow_new_player(add: On<Add, Player>, mut cameras: Query<&mut CameraFollow>) {
    for mut follow in &mut cameras {
        follow.target = Some(add.entity);
    }
}

fn shake_on_player_damage(
    mut taken: MessageReader<DamageTaken>,
    players: Query<(), With<Player>>,
    mut shake: MessageWriter<ShakeRequest>,
) {
    if taken.read().any(|hit| players.contains(hit.entity)) {
        shake.write(ShakeRequest {
            duration: HIT_SHAKE_SECS,
            intensity: HIT_SHAKE_INTENSITY,
        });
    }
}

fn start_shake(mut requests: MessageReader<ShakeRequest>, mut shakes: Query<&mut CameraShake>) {
    let Some(request) = requests.read().last() else {
        return;
    };
    for mut shake in &mut shakes {
        shake.start(request.duration, request.intensity);
    }
}

/// Moves the camera anchor toward its target and applies shake. Runs in `GameSet::Ui`.
fn update_camera(
    time: Res<Time>,
    mut cameras: Query<(&mut Transform, &mut CameraFollow, &mut CameraShake)>,
    targets: Query<&GlobalTransform>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::rng();
    for (mut transform, mut follow, mut shake) in &mut cameras {
        if let Some(target) = follow.target.and_then(|e| targets.get(e).ok()) {
            follow.anchor = follow_step(&follow, target.translation().xy(), dt);
        }
        shake.window.tick(dt);
        let position = follow.anchor + shake.offset(&mut rng);
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<MainCamera>()
        .register_type::<CameraFollow>()
        .register_type::<CameraShake>();

    app.add_message::<ShakeRequest>();
    app.add_systems(Startup, spawn_camera);
    app.add_observer(follow_new_player);

    app.add_systems(
        Update,
        (shake_on_player_damage, start_shake, update_camera)
            .chain()
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}
