use bevy::math::EulerRot;
use bevy::prelude::*;

use constants::camera::{DEFAULT_CAMERA_SPEED, PITCH_CLAMP, TRANSFORM_EASE_RATE};

/// Marker for the camera entity driven by the walkthrough input.
#[derive(Component)]
pub struct WalkthroughCamera;

/// Integrated camera pose. Input systems mutate this; the camera transform
/// eases toward it once per rendered frame.
#[derive(Resource, Debug, Clone)]
pub struct WalkState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Base walk speed, scaled by the movement rate constant.
    pub speed: f32,
}

impl WalkState {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, speed: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: pitch.clamp(-PITCH_CLAMP, PITCH_CLAMP),
            speed,
        }
    }

    /// View rotation for the current pose.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// World-space view-forward direction.
    pub fn forward(&self) -> Vec3 {
        (self.rotation() * Vec3::NEG_Z).normalize()
    }
}

impl Default for WalkState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            speed: DEFAULT_CAMERA_SPEED,
        }
    }
}

/// Ease the camera transform toward the integrated pose, standing in for
/// the host engine's camera inertia.
pub fn sync_camera_transform(
    mut cameras: Query<&mut Transform, With<WalkthroughCamera>>,
    walk: Res<WalkState>,
    time: Res<Time>,
) {
    if let Ok(mut transform) = cameras.single_mut() {
        let ease = (TRANSFORM_EASE_RATE * time.delta_secs()).min(1.0);
        transform.translation = transform.translation.lerp(walk.position, ease);
        transform.rotation = transform.rotation.slerp(walk.rotation(), ease);
    }
}
