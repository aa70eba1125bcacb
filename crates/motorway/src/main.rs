//! Small driving demo: a car, a road, five obstacle boxes, and a fixed-step
//! rigid-body simulation keeping the visuals in sync with physics.
//!
//! Drive with WASD. G toggles the debug panel, F toggles the physics
//! collider wireframes. The debug panel's "Orbit controls" checkbox swaps
//! the chase camera for a free mouse orbit around the car.

mod camera;
mod constants;
mod input;
mod launch_params;
mod physics;
mod scene;
mod ui;
mod vehicle;

use bevy::prelude::*;
use clap::Parser;

use camera::CameraControllerPlugin;
use launch_params::LaunchParams;
use physics::PhysicsIntegrationPlugin;
use scene::ScenePlugin;
use ui::DebugUiPlugin;
use vehicle::CarPlugin;

/// Plugin for the main application.
pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            input::InputPlugin,
            PhysicsIntegrationPlugin,
            ScenePlugin,
            CarPlugin,
            CameraControllerPlugin,
            DebugUiPlugin,
        ));
    }
}

fn main() {
    // Initialize tracing.
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let params = LaunchParams::parse();

    let window = Window {
        title: "motorway".to_string(),
        resolution: (1280, 720).into(),
        position: WindowPosition::Centered(MonitorSelection::Primary),
        ..Default::default()
    };

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(window),
        ..Default::default()
    }));

    app.insert_resource(params.camera_mode);
    app.insert_resource(params);
    app.add_plugins(AppPlugin).run();
}
