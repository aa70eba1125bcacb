//! Player car: spawning, driving forces, and fall-off respawn.

mod components;
mod physics;

use avian3d::prelude::*;
use bevy::prelude::*;

pub use components::{CarConfig, CarState, DriveInput};

use crate::constants;

/// Plugin for car functionality.
pub struct CarPlugin;

impl Plugin for CarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_car)
            .add_systems(Update, physics::drive_input_system)
            .add_systems(FixedPreUpdate, physics::car_physics_system)
            .add_systems(
                FixedPostUpdate,
                physics::respawn_fallen_car.after(PhysicsSystems::Last),
            );
    }
}

/// Spawn the car body, colliders, and model at the spawn pose.
fn spawn_car(mut commands: Commands, asset_server: Res<AssetServer>) {
    let config = CarConfig::default();
    let collider = car_collider(&config);

    let body = commands
        .spawn((
            DriveInput::default(),
            CarState::default(),
            RigidBody::Dynamic,
            collider,
            Mass(config.mass),
            LinearDamping(constants::CAR_LINEAR_DAMPING),
            Friction::new(constants::ROAD_FRICTION),
            Restitution::new(constants::ROAD_RESTITUTION),
            Transform::from_translation(constants::CAR_SPAWN_POSITION)
                .with_rotation(Quat::from_rotation_y(constants::CAR_SPAWN_YAW)),
            config,
        ))
        .id();

    // The render model is a child of the physics body: avian writes the body
    // transform and the hierarchy carries it to the model, offset so the
    // wheels line up with the collider bottom.
    let model = commands
        .spawn((
            SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/car.glb"))),
            Transform::from_xyz(0.0, constants::CAR_MODEL_Y_OFFSET, 0.0),
        ))
        .id();
    commands.entity(body).add_child(model);

    tracing::info!("Car spawned at {:?}", constants::CAR_SPAWN_POSITION);
}

/// Compound collider: cabin box behind, convex hood wedge in front.
fn car_collider(config: &CarConfig) -> Collider {
    let he = config.collider_half_extents;
    let mut parts = vec![(
        Vec3::new(0.0, 0.0, -1.0),
        Quat::IDENTITY,
        Collider::cuboid(he.x * 2.0, he.y * 2.0, he.z * 2.0),
    )];

    let wedge_points = vec![
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 2.0),
        Vec3::new(2.0, 2.0, 0.0),
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 2.0),
        Vec3::new(0.0, 2.0, 0.0),
    ];
    if let Some(wedge) = Collider::convex_hull(wedge_points) {
        parts.push((Vec3::new(-1.0, -1.3, 1.0), Quat::IDENTITY, wedge));
    } else {
        tracing::warn!("Hood wedge hull construction failed; using box collider only");
    }

    Collider::compound(parts)
}
