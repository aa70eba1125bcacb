//! Chase and orbit cameras for watching the car.
//!
//! Exactly one of the two modes is active at any time, selected by the
//! [`CameraMode`] resource (toggled from the debug panel):
//!
//! - **Chase**: fixed-offset camera that tracks the car translation.
//! - **Orbit**: free mouse orbit around the car.

mod chase;
mod orbit;

use bevy::prelude::*;

pub use orbit::OrbitCamera;

/// Marker component for the single render camera.
#[derive(Component)]
pub struct MainCamera;

/// Camera mode. Chase and orbit are mutually exclusive; switching modes is
/// a single resource write, so there is never a frame where both (or
/// neither) control the camera.
#[derive(Resource, Default, PartialEq, Eq, Clone, Copy, Debug, clap::ValueEnum)]
pub enum CameraMode {
    /// Fixed-offset chase camera behind the car (default).
    #[default]
    Chase,
    /// Free mouse orbit around the car.
    Orbit,
}

/// Run condition: chase mode is active.
fn is_chase_mode(mode: Res<CameraMode>) -> bool {
    *mode == CameraMode::Chase
}

/// Run condition: orbit mode is active.
fn is_orbit_mode(mode: Res<CameraMode>) -> bool {
    *mode == CameraMode::Orbit
}

/// Plugin for camera mode management.
pub struct CameraControllerPlugin;

impl Plugin for CameraControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                chase::chase_camera_system.run_if(is_chase_mode),
                orbit::orbit_camera_system.run_if(is_orbit_mode),
            ),
        );
    }
}
