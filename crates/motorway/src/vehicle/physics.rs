//! Car driving physics and the fall-off respawn.

use avian3d::prelude::*;
use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use super::components::{CarConfig, CarState, DriveInput};
use crate::{constants, input::DriveAction};

/// Capture driver input from the action map.
pub fn drive_input_system(
    action_query: Query<&ActionState<DriveAction>>,
    mut query: Query<&mut DriveInput, With<CarConfig>>,
) {
    let Ok(action_state) = action_query.single() else {
        return;
    };

    let axes = action_state.clamped_axis_pair(&DriveAction::Drive);
    for mut input in &mut query {
        // Throttle: W/S on the Y axis of the virtual DPad.
        input.throttle = axes.y;
        // Steering: A/D on the X axis.
        input.steer = axes.x;
    }
}

/// World-space drive force for the given throttle.
pub(crate) fn drive_force(rotation: Quat, throttle: f32, magnitude: f32) -> Vec3 {
    rotation * (Vec3::Z * throttle * magnitude)
}

/// World-space steering torque for the given input. Positive steer (right)
/// yields a negative torque about the body's local Y axis.
pub(crate) fn steer_torque(rotation: Quat, steer: f32, magnitude: f32) -> Vec3 {
    rotation * (Vec3::Y * -steer * magnitude)
}

/// Apply driving forces to the car each fixed tick.
///
/// Force and torque are continuous per-tick applications, integrated
/// directly into velocity (dv = F/m·dt). Accumulated spin is forcibly
/// zeroed once per [`CarConfig::spin_reset_interval`], whether or not a
/// steering key is held.
pub fn car_physics_system(
    time: Res<Time<Fixed>>,
    mut query: Query<(
        &CarConfig,
        &DriveInput,
        &mut CarState,
        &Rotation,
        &mut LinearVelocity,
        &mut AngularVelocity,
    )>,
) {
    let dt = time.delta_secs();

    for (config, input, mut state, rotation, mut linear_velocity, mut angular_velocity) in
        &mut query
    {
        let total_force = drive_force(rotation.0, input.throttle, config.drive_force);
        let total_torque = steer_torque(rotation.0, input.steer, config.turn_torque);

        let inv_mass = 1.0 / config.mass.max(0.1);
        linear_velocity.0 += total_force * inv_mass * dt;

        // Crude inertia approximation: I ≈ m·r² with r the average half-extent.
        let he = config.collider_half_extents;
        let avg_extent = (he.x + he.y + he.z) / 3.0;
        let inertia = config.mass * avg_extent * avg_extent;
        angular_velocity.0 += total_torque / inertia.max(0.1) * dt;

        state.spin_timer += dt;
        if state.spin_timer > config.spin_reset_interval {
            angular_velocity.0 = Vec3::ZERO;
            state.spin_timer = 0.0;
        }

        state.speed = linear_velocity.0.length();
        state.total_force = total_force;
        state.total_torque = total_torque;
    }
}

/// Teleport the car back to the spawn pose once it falls off the road.
///
/// Runs after the physics step. The teleport is instantaneous: position and
/// orientation snap to the spawn pose and both velocities are zeroed.
pub fn respawn_fallen_car(
    mut query: Query<
        (
            &mut Position,
            &mut Rotation,
            &mut LinearVelocity,
            &mut AngularVelocity,
        ),
        With<CarConfig>,
    >,
) {
    for (mut position, mut rotation, mut linear_velocity, mut angular_velocity) in &mut query {
        if position.0.y >= constants::FALL_RESET_Y {
            continue;
        }

        position.0 = constants::CAR_SPAWN_POSITION;
        rotation.0 = Quat::from_rotation_y(constants::CAR_SPAWN_YAW);
        linear_velocity.0 = Vec3::ZERO;
        angular_velocity.0 = Vec3::ZERO;

        tracing::info!(
            "Car fell below y = {}, respawning at {:?}",
            constants::FALL_RESET_Y,
            constants::CAR_SPAWN_POSITION
        );
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    const EPSILON: f32 = 1e-4;

    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(Time::<Fixed>::from_seconds(constants::FIXED_TIMESTEP));
        app.add_systems(Update, (car_physics_system, respawn_fallen_car).chain());
        app
    }

    fn spawn_car(app: &mut App, input: DriveInput) -> Entity {
        app.world_mut()
            .spawn((
                CarConfig::default(),
                input,
                CarState::default(),
                Position(constants::CAR_SPAWN_POSITION),
                Rotation::default(),
                LinearVelocity::default(),
                AngularVelocity::default(),
            ))
            .id()
    }

    /// Advance the fixed clock by one timestep and run the schedule.
    fn step(app: &mut App, steps: u32) {
        for _ in 0..steps {
            let period = app.world().resource::<Time<Fixed>>().timestep();
            app.world_mut()
                .resource_mut::<Time<Fixed>>()
                .advance_by(period);
            app.update();
        }
    }

    #[test]
    fn forward_throttle_accelerates_along_local_forward() {
        let mut app = test_app();
        let car = spawn_car(
            &mut app,
            DriveInput {
                throttle: 1.0,
                steer: 0.0,
            },
        );
        step(&mut app, 1);

        let velocity = app.world().get::<LinearVelocity>(car).unwrap().0;
        let dt = constants::FIXED_TIMESTEP as f32;
        let expected = constants::DRIVE_FORCE / constants::CAR_MASS * dt;
        assert!((velocity.z - expected).abs() < EPSILON, "{velocity:?}");
        assert_eq!(velocity.x, 0.0);
        assert_eq!(velocity.y, 0.0);

        // No steering input: no angular displacement.
        let angular = app.world().get::<AngularVelocity>(car).unwrap().0;
        assert_eq!(angular, Vec3::ZERO);
    }

    #[test]
    fn force_reapplies_every_tick_while_held() {
        let mut app = test_app();
        let car = spawn_car(
            &mut app,
            DriveInput {
                throttle: 1.0,
                steer: 0.0,
            },
        );
        step(&mut app, 120);

        // 120 ticks of continuous force: v = F/m * 120·dt = 10 m/s.
        let velocity = app.world().get::<LinearVelocity>(car).unwrap().0;
        assert!((velocity.z - 10.0).abs() < 1e-2, "{velocity:?}");
    }

    #[test]
    fn no_input_applies_no_force() {
        let mut app = test_app();
        let car = spawn_car(&mut app, DriveInput::default());
        step(&mut app, 60);

        assert_eq!(app.world().get::<LinearVelocity>(car).unwrap().0, Vec3::ZERO);
        assert_eq!(
            app.world().get::<AngularVelocity>(car).unwrap().0,
            Vec3::ZERO
        );
    }

    #[test]
    fn drive_force_follows_body_orientation() {
        // Spawn yaw is 180°: local +Z points along world -Z.
        let rotation = Quat::from_rotation_y(PI);
        let force = drive_force(rotation, 1.0, constants::DRIVE_FORCE);
        assert!((force.z + constants::DRIVE_FORCE).abs() < 1e-3, "{force:?}");
        assert!(force.x.abs() < 1e-3);
    }

    #[test]
    fn steering_right_applies_negative_yaw_torque() {
        let torque = steer_torque(Quat::IDENTITY, 1.0, constants::TURN_TORQUE);
        assert_eq!(torque, Vec3::new(0.0, -constants::TURN_TORQUE, 0.0));

        let torque = steer_torque(Quat::IDENTITY, -1.0, constants::TURN_TORQUE);
        assert_eq!(torque, Vec3::new(0.0, constants::TURN_TORQUE, 0.0));
    }

    #[test]
    fn spin_is_zeroed_once_per_interval() {
        let mut app = test_app();
        let car = spawn_car(
            &mut app,
            DriveInput {
                throttle: 0.0,
                steer: 1.0,
            },
        );

        // The timer is exactly zero only on the tick that reset it.
        let mut reset_steps = Vec::new();
        for step_index in 1..=122_u32 {
            step(&mut app, 1);
            let state = app.world().get::<CarState>(car).unwrap();
            if state.spin_timer == 0.0 {
                reset_steps.push(step_index);
                // Spin is fully cleared on the reset tick, even though
                // steering torque was applied this tick.
                assert_eq!(
                    app.world().get::<AngularVelocity>(car).unwrap().0,
                    Vec3::ZERO
                );
            }
        }

        // One reset per simulated second at 60 Hz, with a steady cadence.
        assert_eq!(reset_steps.len(), 2, "{reset_steps:?}");
        assert!((60..=61).contains(&reset_steps[0]), "{reset_steps:?}");
        assert_eq!(reset_steps[1] - reset_steps[0], reset_steps[0]);

        // Held steering keeps accumulating spin between resets.
        step(&mut app, 10);
        let angular = app.world().get::<AngularVelocity>(car).unwrap().0;
        assert!(angular.y < 0.0, "{angular:?}");
    }

    #[test]
    fn spin_reset_happens_without_steering_input() {
        let mut app = test_app();
        let car = spawn_car(&mut app, DriveInput::default());

        // Seed residual spin, e.g. from a collision.
        app.world_mut().get_mut::<AngularVelocity>(car).unwrap().0 = Vec3::new(0.0, 3.0, 0.0);

        step(&mut app, 61);
        assert_eq!(
            app.world().get::<AngularVelocity>(car).unwrap().0,
            Vec3::ZERO
        );
    }

    #[test]
    fn falling_below_threshold_respawns_at_spawn_pose() {
        let mut app = test_app();
        let car = spawn_car(&mut app, DriveInput::default());

        {
            let mut entity = app.world_mut().entity_mut(car);
            entity.get_mut::<Position>().unwrap().0 = Vec3::new(4.0, -10.5, -30.0);
            entity.get_mut::<LinearVelocity>().unwrap().0 = Vec3::new(0.0, -20.0, -5.0);
            entity.get_mut::<AngularVelocity>().unwrap().0 = Vec3::new(1.0, 2.0, 3.0);
        }

        step(&mut app, 1);

        let position = app.world().get::<Position>(car).unwrap().0;
        assert_eq!(position, constants::CAR_SPAWN_POSITION);
        assert_eq!(app.world().get::<LinearVelocity>(car).unwrap().0, Vec3::ZERO);
        assert_eq!(
            app.world().get::<AngularVelocity>(car).unwrap().0,
            Vec3::ZERO
        );

        let rotation = app.world().get::<Rotation>(car).unwrap().0;
        let expected = Quat::from_rotation_y(constants::CAR_SPAWN_YAW);
        assert!(rotation.angle_between(expected) < EPSILON);
    }

    #[test]
    fn car_above_threshold_is_not_respawned() {
        let mut app = test_app();
        let car = spawn_car(&mut app, DriveInput::default());

        let start = Vec3::new(4.0, -9.9, -30.0);
        app.world_mut().get_mut::<Position>(car).unwrap().0 = start;

        step(&mut app, 1);
        assert_eq!(app.world().get::<Position>(car).unwrap().0, start);
    }
}
