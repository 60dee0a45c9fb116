//! Patrol/chase behavior driven through the public brain and route types.

use bevy::math::Vec2;
use platformer_kit::gameplay::patrol::{PatrolBrain, PatrolRoute, PatrolSettings, PatrolState};
use pretty_assertions::assert_eq;

const DT: f32 = 0.05;

fn settings() -> PatrolSettings {
    PatrolSettings {
        move_speed: 2.0,
        chase_speed: 4.0,
        wait_time: 1.0,
        detection_range: 5.0,
        alert_duration: 3.0,
        arrive_distance: 0.01,
    }
}

/// Ticks until the brain reports a waypoint arrival. Returns (waypoint, ticks).
fn travel(
    brain: &mut PatrolBrain,
    route: &mut PatrolRoute,
    position: &mut Vec2,
) -> (Vec2, usize) {
    for ticks in 1..=1000 {
        let step = brain.tick(&settings(), route, *position, None, DT);
        *position += step.velocity * DT;
        if let Some(waypoint) = step.snap_to {
            *position = waypoint;
            return (waypoint, ticks);
        }
    }
    panic!("agent never arrived");
}

#[test]
fn non_looping_route_reverses_toward_middle() {
    let w = [Vec2::ZERO, Vec2::new(4.0, 0.0), Vec2::new(8.0, 0.0)];
    let mut route = PatrolRoute::new(w.to_vec(), false);
    let mut brain = PatrolBrain::default();
    let mut position = w[0];

    let visits: Vec<Vec2> = (0..6)
        .map(|_| travel(&mut brain, &mut route, &mut position).0)
        .collect();

    assert_eq!(visits, vec![w[0], w[1], w[2], w[1], w[0], w[1]]);
}

#[test]
fn travel_time_matches_speed_plus_wait() {
    let w = [Vec2::ZERO, Vec2::new(4.0, 0.0)];
    let mut route = PatrolRoute::new(w.to_vec(), true);
    let mut brain = PatrolBrain::default();
    let mut position = w[0];

    travel(&mut brain, &mut route, &mut position);
    let (_, ticks) = travel(&mut brain, &mut route, &mut position);

    // 1s wait + 4 units at 2 units/s, in 0.05s ticks.
    #[allow(clippy::cast_precision_loss)]
    let seconds = ticks as f32 * DT;
    assert!((seconds - 3.0).abs() <= 3.0 * DT, "took {seconds}s");
}

#[test]
fn chase_lasts_while_target_stays_close() {
    let mut route = PatrolRoute::new(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)], true);
    let mut brain = PatrolBrain::default();
    assert_eq!(brain.state(), PatrolState::Patrolling);

    let mut position = Vec2::ZERO;
    for _ in 0..40 {
        let target = position + Vec2::new(0.0, 4.5);
        let step = brain.tick(&settings(), &mut route, position, Some(target), DT);
        position += step.velocity * DT;
        assert_eq!(brain.state(), PatrolState::Chasing);
    }
}

#[test]
fn alert_expires_after_target_leaves() {
    let mut route = PatrolRoute::new(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)], true);
    let mut brain = PatrolBrain::default();
    brain.tick(&settings(), &mut route, Vec2::ZERO, Some(Vec2::X), DT);
    assert_eq!(brain.state(), PatrolState::Chasing);

    let far = Some(Vec2::new(500.0, 0.0));
    let mut ticks = 0;
    while brain.state() == PatrolState::Chasing {
        brain.tick(&settings(), &mut route, Vec2::ZERO, far, DT);
        ticks += 1;
        assert!(ticks < 1000, "alert never expired");
    }

    #[allow(clippy::cast_precision_loss)]
    let seconds = ticks as f32 * DT;
    assert!((seconds - 3.0).abs() <= 2.0 * DT, "alert lasted {seconds}s");
}
