//! Physics integration using Avian 3D.
//!
//! Configures the fixed-step world (gravity, timestep) and the collider
//! wireframe debug view. Avian owns body integration, contact resolution,
//! and writing body transforms back to the render hierarchy after each step.

use avian3d::debug_render::{PhysicsDebugPlugin, PhysicsGizmos};
use avian3d::prelude::*;
use bevy::color::palettes::css::LIME;
use bevy::gizmos::config::{GizmoConfig, GizmoConfigStore};
use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::{constants, input::DriveAction, launch_params::LaunchParams};

/// Plugin for physics world setup and debug rendering.
pub struct PhysicsIntegrationPlugin;

impl Plugin for PhysicsIntegrationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsPlugins::default())
            .add_plugins(PhysicsDebugPlugin)
            .insert_resource(Gravity(constants::GRAVITY))
            .insert_resource(Time::<Fixed>::from_seconds(constants::FIXED_TIMESTEP))
            .add_systems(Startup, configure_physics_debug)
            .add_systems(Update, toggle_physics_debug);
    }
}

/// Configure physics debug rendering on startup (hidden unless requested).
fn configure_physics_debug(mut config_store: ResMut<GizmoConfigStore>, params: Res<LaunchParams>) {
    let physics_gizmos = PhysicsGizmos {
        collider_color: Some(LIME.into()),
        ..Default::default()
    };

    // Use negative depth_bias to render gizmos on top of geometry.
    let gizmo_config = GizmoConfig {
        enabled: params.debug_physics,
        depth_bias: -1.0,
        ..Default::default()
    };

    config_store.insert(gizmo_config, physics_gizmos);
}

/// Toggle the collider wireframes with F.
fn toggle_physics_debug(
    action_query: Query<&ActionState<DriveAction>>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    let Ok(action_state) = action_query.single() else {
        return;
    };
    if !action_state.just_pressed(&DriveAction::TogglePhysicsDebug) {
        return;
    }

    let (config, _) = config_store.config_mut::<PhysicsGizmos>();
    config.enabled = !config.enabled;
    tracing::info!("Physics debug wireframes: {}", config.enabled);
}
