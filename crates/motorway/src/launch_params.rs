//! Launch parameter parsing from command-line arguments.

use bevy::prelude::*;
use clap::Parser;

use crate::camera::CameraMode;

/// Launch parameters for the demo.
#[derive(Parser, Resource, Debug)]
#[command(version, about = "Small driving demo with fixed-step rigid-body physics")]
pub struct LaunchParams {
    /// Initial camera mode.
    #[arg(long, value_enum, default_value_t = CameraMode::Chase)]
    pub camera_mode: CameraMode,

    /// Start with physics collider wireframes visible.
    #[arg(long)]
    pub debug_physics: bool,

    /// Start with the debug panel visible.
    #[arg(long)]
    pub show_panel: bool,
}
