//! Car component definitions.

use bevy::prelude::*;

use crate::constants;

/// Tuning parameters for the player car. Doubles as the car marker.
#[derive(Component, Clone)]
pub struct CarConfig {
    /// Continuous drive force along the body's local Z axis.
    pub drive_force: f32,
    /// Continuous steering torque about the body's local Y axis.
    pub turn_torque: f32,
    /// Body mass in kilograms.
    pub mass: f32,
    /// Half-extents of the main box collider, also used for the inertia
    /// approximation.
    pub collider_half_extents: Vec3,
    /// Simulated seconds between forced angular-velocity resets.
    pub spin_reset_interval: f32,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            drive_force: constants::DRIVE_FORCE,
            turn_torque: constants::TURN_TORQUE,
            mass: constants::CAR_MASS,
            collider_half_extents: constants::CAR_HALF_EXTENTS,
            spin_reset_interval: constants::SPIN_RESET_INTERVAL,
        }
    }
}

/// Driver input for the car, captured from the action map every frame.
#[derive(Component, Default)]
pub struct DriveInput {
    /// Throttle in [-1, 1]; positive drives along the body's local +Z.
    pub throttle: f32,
    /// Steering in [-1, 1]; positive steers right.
    pub steer: f32,
}

/// Runtime state for the car.
#[derive(Component, Default)]
pub struct CarState {
    /// Simulated seconds since angular velocity was last forcibly zeroed.
    pub spin_timer: f32,
    /// Current speed magnitude for the debug panel.
    pub speed: f32,
    /// Total force applied this tick.
    pub total_force: Vec3,
    /// Total torque applied this tick.
    pub total_torque: Vec3,
}
