/// Yaw rate in radians per second (0.01 rad per frame at a 60 Hz baseline).
pub const YAW_RATE: f32 = 0.6;

/// Forward/backward rate multiplier applied to the manifest camera speed.
/// A quarter of the camera speed per frame at a 60 Hz baseline.
pub const MOVE_RATE_PER_SPEED: f32 = 15.0;

/// Pitch clamp to keep the camera away from the poles.
pub const PITCH_CLAMP: f32 = 1.55;

/// Near clip plane distance.
pub const CAMERA_NEAR: f32 = 0.1;

/// Easing rate for the camera transform chasing the integrated walk pose.
pub const TRANSFORM_EASE_RATE: f32 = 12.0;

/// Fallback camera speed when the manifest omits one.
pub const DEFAULT_CAMERA_SPEED: f32 = 0.1;
