//! Debug panel: camera mode toggle and car diagnostics.
//!
//! Hidden by default; G shows and hides it.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};
use leafwing_input_manager::prelude::*;

use crate::{
    camera::CameraMode,
    input::DriveAction,
    launch_params::LaunchParams,
    vehicle::{CarConfig, CarState},
};

/// Resource controlling whether the debug panel is visible.
#[derive(Resource, Default)]
pub struct PanelVisible(pub bool);

/// Plugin for the debug panel overlay.
pub struct DebugUiPlugin;

impl Plugin for DebugUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .init_resource::<PanelVisible>()
            .add_systems(Startup, apply_initial_visibility)
            .add_systems(Update, toggle_panel_visible)
            .add_systems(
                EguiPrimaryContextPass,
                debug_panel_system.run_if(|visible: Res<PanelVisible>| visible.0),
            );
    }
}

/// Apply the launch parameter for initial panel visibility.
fn apply_initial_visibility(params: Res<LaunchParams>, mut visible: ResMut<PanelVisible>) {
    visible.0 = params.show_panel;
}

/// Toggle panel visibility with G.
fn toggle_panel_visible(
    action_query: Query<&ActionState<DriveAction>>,
    mut visible: ResMut<PanelVisible>,
) {
    let Ok(action_state) = action_query.single() else {
        return;
    };

    if action_state.just_pressed(&DriveAction::ToggleDebugPanel) {
        visible.0 = !visible.0;
    }
}

/// Render the debug panel.
fn debug_panel_system(
    mut contexts: EguiContexts,
    mut mode: ResMut<CameraMode>,
    car_query: Query<(&Transform, &CarState, &CarConfig)>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::Window::new("Debug")
        .default_pos([10.0, 10.0])
        .show(ctx, |ui| {
            // Chase and orbit are mutually exclusive; the checkbox flips the
            // single mode resource.
            let mut orbit = *mode == CameraMode::Orbit;
            if ui.checkbox(&mut orbit, "Orbit controls").changed() {
                *mode = if orbit {
                    CameraMode::Orbit
                } else {
                    CameraMode::Chase
                };
                tracing::info!("Camera mode: {:?}", *mode);
            }

            ui.separator();

            if let Ok((transform, state, config)) = car_query.single() {
                let p = transform.translation;
                ui.label(format!("Position: ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z));
                ui.label(format!("Speed: {:.1} m/s", state.speed));
                ui.label(format!(
                    "Spin reset in: {:.2} s",
                    (config.spin_reset_interval - state.spin_timer).max(0.0)
                ));
            }
        });

    Ok(())
}
