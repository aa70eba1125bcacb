//! Fixed-offset chase camera.

use bevy::prelude::*;

use super::MainCamera;
use crate::{constants, vehicle::CarConfig};

/// Position the camera at a fixed offset above and behind the car.
///
/// No smoothing or collision avoidance: the camera tracks the car
/// translation exactly, and its orientation is left untouched.
pub(super) fn chase_camera_system(
    car_query: Query<&Transform, (With<CarConfig>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(car_transform) = car_query.single() else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    camera_transform.translation = chase_position(car_transform.translation);
}

/// Chase camera position for a given car body position.
///
/// The offset is measured from the visible car model, which hangs
/// [`constants::CAR_MODEL_Y_OFFSET`] below the body origin.
pub(crate) fn chase_position(car_position: Vec3) -> Vec3 {
    car_position + Vec3::new(0.0, constants::CAR_MODEL_Y_OFFSET, 0.0)
        + constants::CHASE_CAMERA_OFFSET
}
