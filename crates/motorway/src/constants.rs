//! Shared tuning constants for the demo.

use std::f32::consts::PI;

use bevy::math::Vec3;

/// Fixed physics timestep in seconds (60 Hz).
pub const FIXED_TIMESTEP: f64 = 1.0 / 60.0;

/// Gravity acceleration (m/s²), Y-down.
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);

/// Continuous drive force magnitude along the car's local Z axis.
pub const DRIVE_FORCE: f32 = 500.0;

/// Continuous steering torque magnitude about the car's local Y axis.
pub const TURN_TORQUE: f32 = 200.0;

/// Simulated seconds between forced angular-velocity resets.
///
/// Steering torque accumulates spin with no counteracting friction on the
/// slippery road, so the controller zeroes angular velocity on this cadence.
pub const SPIN_RESET_INTERVAL: f32 = 1.0;

/// Car mass in kilograms.
pub const CAR_MASS: f32 = 100.0;

/// Half-extents of the car's main box collider.
pub const CAR_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 1.3, 2.0);

/// Linear velocity damping applied to the car body.
pub const CAR_LINEAR_DAMPING: f32 = 0.5;

/// Car spawn and respawn position.
pub const CAR_SPAWN_POSITION: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Car spawn and respawn yaw in radians: faces back down the road.
pub const CAR_SPAWN_YAW: f32 = PI;

/// Below this Y position the car is considered to have fallen off the road.
pub const FALL_RESET_Y: f32 = -10.0;

/// Vertical offset of the car model relative to its physics body, so the
/// wheels line up with the collider bottom.
pub const CAR_MODEL_Y_OFFSET: f32 = -1.3;

/// Chase camera offset from the car position.
pub const CHASE_CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 10.0);

/// Friction coefficient shared by the car and the road ("slippery" pairing).
pub const ROAD_FRICTION: f32 = 0.0;

/// Restitution (bounciness) shared by the car and the road.
pub const ROAD_RESTITUTION: f32 = 0.1;
