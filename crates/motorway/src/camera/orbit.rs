//! Mouse-driven orbit camera.
//!
//! Left-drag rotates around the car, scroll zooms. Active only while
//! [`super::CameraMode::Orbit`] is selected.

use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use super::MainCamera;
use crate::{input::DriveAction, vehicle::CarConfig};

/// Radians of rotation per pixel of mouse movement.
const ROTATE_SPEED: f32 = 0.005;
/// Zoom factor per scroll step.
const ZOOM_SPEED: f32 = 1.2;
/// Closest orbit distance to the car.
const MIN_DISTANCE: f32 = 10.0;
/// Furthest orbit distance from the car.
const MAX_DISTANCE: f32 = 500.0;
/// Pitch limit just short of the poles to avoid flipping.
const PITCH_LIMIT: f32 = 1.54;

/// Orbit state around the car.
#[derive(Component)]
pub struct OrbitCamera {
    /// Yaw angle around the car in radians.
    pub yaw: f32,
    /// Pitch angle above the horizon in radians.
    pub pitch: f32,
    /// Distance from the car in meters.
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.4,
            distance: 12.0,
        }
    }
}

/// Rotate and zoom the camera around the car from mouse input.
pub(super) fn orbit_camera_system(
    action_query: Query<&ActionState<DriveAction>>,
    car_query: Query<&Transform, (With<CarConfig>, Without<MainCamera>)>,
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera), With<MainCamera>>,
) {
    let Ok(action_state) = action_query.single() else {
        return;
    };
    let Ok(car_transform) = car_query.single() else {
        return;
    };
    let Ok((mut camera_transform, mut orbit)) = camera_query.single_mut() else {
        return;
    };

    if action_state.pressed(&DriveAction::OrbitDrag) {
        let delta = action_state.axis_pair(&DriveAction::OrbitLook);
        orbit.yaw -= delta.x * ROTATE_SPEED;
        orbit.pitch = (orbit.pitch + delta.y * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    let scroll = action_state.clamped_value(&DriveAction::OrbitZoom);
    if scroll != 0.0 {
        let factor = ZOOM_SPEED.powf(-scroll);
        orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    let target = car_transform.translation;
    camera_transform.translation = orbit_position(target, &orbit);
    camera_transform.look_at(target, Vec3::Y);
}

/// Camera position for the given orbit state around a target.
pub(crate) fn orbit_position(target: Vec3, orbit: &OrbitCamera) -> Vec3 {
    let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, -orbit.pitch, 0.0);
    target + rotation * (Vec3::Z * orbit.distance)
}
