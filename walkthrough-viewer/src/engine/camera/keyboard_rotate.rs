use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::window::WindowFocused;

use constants::camera::{MOVE_RATE_PER_SPEED, YAW_RATE};

use crate::engine::camera::held_keys::HeldKeys;
use crate::engine::camera::walk_state::{WalkState, sync_camera_transform};
use crate::engine::core::app_state::AppState;

/// Camera delta a bound key contributes each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAction {
    RotateLeft,
    RotateRight,
    MoveForward,
    MoveBackward,
}

/// Key-to-action bindings: arrow keys plus WASD.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub rotate_left: Vec<KeyCode>,
    pub rotate_right: Vec<KeyCode>,
    pub move_forward: Vec<KeyCode>,
    pub move_backward: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            rotate_left: vec![KeyCode::ArrowLeft, KeyCode::KeyA],
            rotate_right: vec![KeyCode::ArrowRight, KeyCode::KeyD],
            move_forward: vec![KeyCode::ArrowUp, KeyCode::KeyW],
            move_backward: vec![KeyCode::ArrowDown, KeyCode::KeyS],
        }
    }
}

impl KeyBindings {
    /// Action a key is bound to, if any.
    pub fn action(&self, key: KeyCode) -> Option<CameraAction> {
        if self.rotate_left.contains(&key) {
            Some(CameraAction::RotateLeft)
        } else if self.rotate_right.contains(&key) {
            Some(CameraAction::RotateRight)
        } else if self.move_forward.contains(&key) {
            Some(CameraAction::MoveForward)
        } else if self.move_backward.contains(&key) {
            Some(CameraAction::MoveBackward)
        } else {
            None
        }
    }

    pub fn binds(&self, key: KeyCode) -> bool {
        self.action(key).is_some()
    }
}

/// Keyboard rotate/walk input for the walkthrough camera.
///
/// Registers the held-key set and the track → clear-on-focus-loss →
/// integrate → sync system chain. Attach and detach are the engine's
/// plugin lifecycle; no listener bookkeeping happens outside the world.
pub struct KeyboardRotatePlugin;

impl Plugin for KeyboardRotatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeldKeys>()
            .init_resource::<KeyBindings>()
            .init_resource::<WalkState>()
            .add_systems(
                Update,
                (
                    track_held_keys,
                    clear_held_keys_on_focus_loss,
                    integrate_held_keys,
                    sync_camera_transform,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}

/// Maintain the held-key set from raw key events. Unbound keys never enter
/// the set.
pub fn track_held_keys(
    mut held: ResMut<HeldKeys>,
    bindings: Res<KeyBindings>,
    mut key_events: EventReader<KeyboardInput>,
) {
    for event in key_events.read() {
        if !bindings.binds(event.key_code) {
            continue;
        }
        match event.state {
            ButtonState::Pressed => held.press(event.key_code),
            ButtonState::Released => held.release(event.key_code),
        }
    }
}

/// Release everything when the window loses focus so no key sticks across
/// a refocus.
pub fn clear_held_keys_on_focus_loss(
    mut held: ResMut<HeldKeys>,
    mut focus_events: EventReader<WindowFocused>,
) {
    for event in focus_events.read() {
        if !event.focused && !held.is_empty() {
            info!("Window focus lost, releasing held movement keys");
            held.clear();
        }
    }
}

/// Integrate held keys into the walk pose once per rendered frame.
pub fn integrate_held_keys(
    mut walk: ResMut<WalkState>,
    held: Res<HeldKeys>,
    bindings: Res<KeyBindings>,
    time: Res<Time>,
) {
    if held.is_empty() {
        return;
    }
    let actions = held.iter().filter_map(|key| bindings.action(key));
    apply_actions(&mut walk, actions, time.delta_secs());
}

/// Apply each action's delta to the pose, in held order. Yaw changes take
/// effect immediately, so a move key held alongside a rotate key walks
/// along the updated heading within the same frame.
pub fn apply_actions(
    walk: &mut WalkState,
    actions: impl Iterator<Item = CameraAction>,
    dt: f32,
) {
    for action in actions {
        match action {
            CameraAction::RotateLeft => walk.yaw += YAW_RATE * dt,
            CameraAction::RotateRight => walk.yaw -= YAW_RATE * dt,
            CameraAction::MoveForward => {
                let step = walk.forward() * walk.speed * MOVE_RATE_PER_SPEED * dt;
                walk.position += step;
            }
            CameraAction::MoveBackward => {
                let step = walk.forward() * walk.speed * MOVE_RATE_PER_SPEED * dt;
                walk.position -= step;
            }
        }
    }
}
