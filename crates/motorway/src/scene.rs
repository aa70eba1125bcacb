//! One-time scene construction: road, obstacles, backdrop, lighting, camera.

use avian3d::prelude::*;
use bevy::light::light_consts::lux;
use bevy::prelude::*;

use crate::{
    camera::{MainCamera, OrbitCamera},
    constants,
};

/// Number of obstacle boxes on the road.
const OBSTACLE_COUNT: usize = 5;
/// Spacing between obstacles along the road (meters).
const OBSTACLE_SPACING: f32 = 15.0;
/// Obstacle cube edge length (meters).
const OBSTACLE_SIZE: f32 = 2.0;
/// Obstacle mass in kilograms.
const OBSTACLE_MASS: f32 = 1.0;

/// Road dimensions: width, thickness, length.
const ROAD_SIZE: Vec3 = Vec3::new(20.0, 0.02, 300.0);
/// Road center position; the road extends down -Z from the spawn.
const ROAD_POSITION: Vec3 = Vec3::new(0.0, 0.0, -90.0);

/// Marker component for obstacle entities. Body, collider, and mesh live on
/// the same entity, so their transforms can never fall out of step.
#[derive(Component)]
pub struct Obstacle;

/// Plugin for scene construction.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (setup_camera_and_light, setup_road, setup_obstacles, setup_backdrop),
        );
    }
}

/// Sky-tinted ambient fill, approximating a hemisphere light.
const AMBIENT_COLOR: Color = Color::srgb(1.0, 1.0, 0.73);
/// Ambient fill brightness in lux.
const AMBIENT_BRIGHTNESS: f32 = 300.0;

/// Spawn the render camera and lighting: a directional sun plus an
/// ambient fill so the car model is lit from all sides.
fn setup_camera_and_light(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(constants::CHASE_CAMERA_OFFSET),
        Projection::Perspective(PerspectiveProjection {
            fov: 75_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..Default::default()
        }),
        MainCamera,
        OrbitCamera::default(),
    ));

    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: lux::OVERCAST_DAY,
            ..default()
        },
        Transform::from_xyz(1.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: AMBIENT_COLOR,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
}

/// Spawn the static road: one body carrying both the collider and the
/// textured mesh.
fn setup_road(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    commands.spawn((
        RigidBody::Static,
        Collider::cuboid(ROAD_SIZE.x, ROAD_SIZE.y, ROAD_SIZE.z),
        Friction::new(constants::ROAD_FRICTION),
        Restitution::new(constants::ROAD_RESTITUTION),
        Mesh3d(meshes.add(Cuboid::new(ROAD_SIZE.x, ROAD_SIZE.y, ROAD_SIZE.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load("textures/road.jpg")),
            unlit: true,
            ..Default::default()
        })),
        Transform::from_translation(ROAD_POSITION),
    ));
}

/// Spawn the obstacle boxes spaced down the road.
fn setup_obstacles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let mesh = meshes.add(Cuboid::new(OBSTACLE_SIZE, OBSTACLE_SIZE, OBSTACLE_SIZE));
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load("textures/obstacle.png")),
        unlit: true,
        ..Default::default()
    });

    for i in 0..OBSTACLE_COUNT {
        #[allow(clippy::cast_precision_loss)]
        let z = -((i as f32 + 1.0) * OBSTACLE_SPACING);
        commands.spawn((
            Obstacle,
            RigidBody::Dynamic,
            Collider::cuboid(OBSTACLE_SIZE, OBSTACLE_SIZE, OBSTACLE_SIZE),
            Mass(OBSTACLE_MASS),
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(0.0, 5.0, z),
        ));
    }

    tracing::info!("Spawned {OBSTACLE_COUNT} obstacles");
}

/// Spawn the mountain backdrop and sky dome. These are render-only; they
/// have no physics bodies.
fn setup_backdrop(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/mountain.glb"))),
        Transform::from_xyz(0.0, 60.0, -90.0)
            .with_rotation(Quat::from_rotation_y(-90_f32.to_radians()))
            .with_scale(Vec3::splat(0.008)),
    ));

    commands.spawn((
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/skydome.glb"))),
        Transform::from_xyz(0.0, -40.0, 0.0)
            .with_rotation(Quat::from_rotation_y(-90_f32.to_radians()))
            .with_scale(Vec3::splat(0.1)),
    ));
}
