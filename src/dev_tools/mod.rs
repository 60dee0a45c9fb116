//! Development tools, only built with the `dev` feature.
//!
//! Gizmo overlays for patrol routes, detection radii and ground probes,
//! plus a world inspector toggled with F1.

use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::gameplay::patrol::{PatrolBrain, PatrolRoute, PatrolSettings, PatrolState};
use crate::gameplay::player::{GroundProbe, Grounded};
use crate::theme::palette;

/// Radius of a waypoint marker (pixels).
const WAYPOINT_RADIUS: f32 = 6.0;

/// Radius of the marker around the waypoint being steered toward (pixels).
const CURRENT_WAYPOINT_RADIUS: f32 = 9.0;

/// Whether the world inspector window is shown.
#[derive(Resource, Debug, Default)]
struct InspectorVisible(bool);

/// Line segments joining consecutive waypoints. Looping routes close the loop.
fn route_segments(route: &PatrolRoute) -> Vec<(Vec2, Vec2)> {
    let points = route.waypoints();
    let mut segments: Vec<_> = points.windows(2).map(|w| (w[0], w[1])).collect();
    if route.looping && points.len() > 2 {
        segments.push((points[points.len() - 1], points[0]));
    }
    segments
}

fn draw_patrol_gizmos(
    mut gizmos: Gizmos,
    agents: Query<(&GlobalTransform, &PatrolRoute, &PatrolSettings, &PatrolBrain)>,
) {
    for (transform, route, settings, brain) in &agents {
        for (from, to) in route_segments(route) {
            gizmos.line_2d(from, to, palette::GIZMO_ROUTE);
        }
        for &waypoint in route.waypoints() {
            gizmos.circle_2d(
                Isometry2d::from_translation(waypoint),
                WAYPOINT_RADIUS,
                palette::GIZMO_ROUTE,
            );
        }
        if let Some(current) = route.current_waypoint() {
            gizmos.circle_2d(
                Isometry2d::from_translation(current),
                CURRENT_WAYPOINT_RADIUS,
                palette::GIZMO_WAYPOINT_TARGET,
            );
        }
        let color = match brain.state() {
            PatrolState::Chasing => palette::GIZMO_DETECTION_ALERT,
            PatrolState::Patrolling | PatrolState::Dead => palette::GIZMO_DETECTION_IDLE,
        };
        gizmos.circle_2d(
            Isometry2d::from_translation(transform.translation().xy()),
            settings.detection_range,
            color,
        );
    }
}

fn draw_ground_probes(
    mut gizmos: Gizmos,
    probes: Query<(&GlobalTransform, &GroundProbe, &Grounded)>,
) {
    for (transform, probe, grounded) in &probes {
        let origin = transform.translation().xy();
        let end = origin - Vec2::Y * probe.distance;
        let color = if grounded.0 {
            palette::GIZMO_GROUND_PROBE
        } else {
            palette::GIZMO_WAYPOINT_TARGET
        };
        gizmos.line_2d(origin, end, color);
    }
}

fn toggle_inspector(keyboard: Res<ButtonInput<KeyCode>>, mut visible: ResMut<InspectorVisible>) {
    if keyboard.just_pressed(KeyCode::F1) {
        visible.0 = !visible.0;
    }
}

fn inspector_visible(visible: Res<InspectorVisible>) -> bool {
    visible.0
}

pub fn plugin(app: &mut App) {
    app.init_resource::<InspectorVisible>();
    app.add_plugins((
        EguiPlugin::default(),
        WorldInspectorPlugin::new().run_if(inspector_visible),
    ));
    app.add_systems(
        Update,
        (
            toggle_inspector,
            (draw_patrol_gizmos, draw_ground_probes).in_set(crate::GameSet::Ui),
        ),
    );
}
