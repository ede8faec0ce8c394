/// Default hemisphere-style light intensity when the manifest omits one.
pub const DEFAULT_LIGHT_INTENSITY: f32 = 0.7;

/// Directional illuminance (lux) at intensity 1.0.
pub const DIRECTIONAL_ILLUMINANCE: f32 = 4_000.0;

/// Ambient brightness at intensity 1.0, approximating the sky bounce of a
/// hemispheric light.
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

/// Default ground plane extent in metres per side.
pub const DEFAULT_GROUND_EXTENT: f32 = 100.0;
