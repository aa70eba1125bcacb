//! Input action definitions and focus management.
//!
//! Defines all gameplay actions using `leafwing-input-manager` for
//! declarative, rebindable input mapping, and disables keyboard-bound
//! actions while egui has keyboard focus.

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use leafwing_input_manager::{plugin::InputManagerSystem, prelude::*};

// ============================================================================
// Action enum
// ============================================================================

/// Actions for driving the car and toggling debug views.
#[derive(Actionlike, PartialEq, Eq, Hash, Clone, Copy, Debug, Reflect)]
pub enum DriveAction {
    /// WASD driving (throttle on Y, steering on X).
    #[actionlike(DualAxis)]
    Drive,
    /// Mouse look for the orbit camera (yaw/pitch).
    #[actionlike(DualAxis)]
    OrbitLook,
    /// Orbit zoom with mouse scroll.
    #[actionlike(Axis)]
    OrbitZoom,
    /// Held while dragging to rotate the orbit camera (left mouse button).
    OrbitDrag,
    /// Show/hide the debug panel (G).
    ToggleDebugPanel,
    /// Show/hide the physics collider wireframes (F).
    TogglePhysicsDebug,
}

/// Create the default input map for drive actions.
pub fn default_drive_input_map() -> InputMap<DriveAction> {
    InputMap::default()
        .with_dual_axis(DriveAction::Drive, VirtualDPad::wasd())
        .with_dual_axis(DriveAction::OrbitLook, MouseMove::default())
        .with_axis(DriveAction::OrbitZoom, MouseScrollAxis::Y)
        .with(DriveAction::OrbitDrag, MouseButton::Left)
        .with(DriveAction::ToggleDebugPanel, KeyCode::KeyG)
        .with(DriveAction::TogglePhysicsDebug, KeyCode::KeyF)
}

// ============================================================================
// Plugin
// ============================================================================

/// Plugin that registers the action type and the input focus management system.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<DriveAction>::default())
            .add_systems(Startup, spawn_input_map)
            .add_systems(
                PreUpdate,
                manage_input_focus.after(InputManagerSystem::Update),
            );
    }
}

/// Spawn the entity holding the shared action state.
fn spawn_input_map(mut commands: Commands) {
    commands.spawn((default_drive_input_map(), ActionState::<DriveAction>::default()));
}

// ============================================================================
// Input focus management
// ============================================================================

/// Keyboard-bound actions that should be disabled when egui wants keyboard input.
const KEYBOARD_ACTIONS: &[DriveAction] = &[DriveAction::Drive];

/// Drop keyboard-bound drive input while egui has keyboard focus.
///
/// The debug toggles and mouse-bound orbit actions stay enabled so the
/// panel remains reachable.
fn manage_input_focus(
    mut query: Query<&mut ActionState<DriveAction>>,
    mut contexts: EguiContexts,
) {
    let egui_wants_kb = contexts
        .ctx_mut()
        .ok()
        .is_some_and(|ctx| ctx.wants_keyboard_input());

    for mut action_state in &mut query {
        for action in KEYBOARD_ACTIONS {
            if egui_wants_kb {
                action_state.disable_action(action);
            } else {
                action_state.enable_action(action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Headless app with real input processing: Bevy's input plugin feeds
    /// the action map exactly as it would in the running game.
    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            bevy::time::TimePlugin,
            bevy::input::InputPlugin,
            InputManagerPlugin::<DriveAction>::default(),
        ));
        app.world_mut()
            .spawn((default_drive_input_map(), ActionState::<DriveAction>::default()));
        app.update();
        app
    }

    fn press_key(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        app.update();
    }

    fn release_key(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
        app.update();
    }

    fn actions(app: &mut App) -> ActionState<DriveAction> {
        let mut query = app.world_mut().query::<&ActionState<DriveAction>>();
        query.single(app.world()).unwrap().clone()
    }

    #[test]
    fn wasd_maps_to_the_drive_dual_axis() {
        let mut app = test_app();

        press_key(&mut app, KeyCode::KeyW);
        assert_eq!(actions(&mut app).axis_pair(&DriveAction::Drive), Vec2::Y);

        release_key(&mut app, KeyCode::KeyW);
        press_key(&mut app, KeyCode::KeyS);
        press_key(&mut app, KeyCode::KeyD);
        assert_eq!(
            actions(&mut app).axis_pair(&DriveAction::Drive),
            Vec2::new(1.0, -1.0)
        );

        release_key(&mut app, KeyCode::KeyD);
        press_key(&mut app, KeyCode::KeyA);
        assert_eq!(
            actions(&mut app).axis_pair(&DriveAction::Drive),
            Vec2::new(-1.0, -1.0)
        );
    }

    #[test]
    fn g_and_f_map_to_the_debug_toggles() {
        let mut app = test_app();

        press_key(&mut app, KeyCode::KeyG);
        let state = actions(&mut app);
        assert!(state.pressed(&DriveAction::ToggleDebugPanel));
        assert!(!state.pressed(&DriveAction::TogglePhysicsDebug));

        release_key(&mut app, KeyCode::KeyG);
        press_key(&mut app, KeyCode::KeyF);
        let state = actions(&mut app);
        assert!(state.pressed(&DriveAction::TogglePhysicsDebug));
        assert!(!state.pressed(&DriveAction::ToggleDebugPanel));
    }

    #[test]
    fn left_mouse_maps_to_orbit_drag() {
        let mut app = test_app();

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        assert!(actions(&mut app).pressed(&DriveAction::OrbitDrag));
    }

    #[test]
    fn unbound_keys_have_no_effect() {
        let mut app = test_app();

        for key in [
            KeyCode::KeyP,
            KeyCode::Space,
            KeyCode::ArrowUp,
            KeyCode::ShiftLeft,
        ] {
            press_key(&mut app, key);
        }

        let state = actions(&mut app);
        assert!(state.get_pressed().is_empty());
        assert_eq!(state.axis_pair(&DriveAction::Drive), Vec2::ZERO);
        assert_eq!(state.value(&DriveAction::OrbitZoom), 0.0);
    }
}
