use bevy::math::EulerRot;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::camera::DEFAULT_CAMERA_SPEED;
use constants::render_settings::{DEFAULT_GROUND_EXTENT, DEFAULT_LIGHT_INTENSITY};

/// Camera spawn pose and base walk speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSpawn {
    pub position: [f32; 3],
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
    #[serde(default = "default_camera_speed")]
    pub speed: f32,
}

fn default_camera_speed() -> f32 {
    DEFAULT_CAMERA_SPEED
}

impl CameraSpawn {
    pub fn translation(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

/// Flat ground plane dimensions in metres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundSpec {
    pub width: f32,
    pub depth: f32,
}

impl Default for GroundSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_GROUND_EXTENT,
            depth: DEFAULT_GROUND_EXTENT,
        }
    }
}

/// Hemisphere-style scene light: a sky direction and an intensity scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightSpec {
    pub direction: [f32; 3],
    pub intensity: f32,
}

impl Default for LightSpec {
    fn default() -> Self {
        Self {
            direction: [0.0, 1.0, 0.0],
            intensity: DEFAULT_LIGHT_INTENSITY,
        }
    }
}

/// One model import: a glTF scene path plus placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelImport {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub yaw: f32,
    #[serde(default = "default_model_scale")]
    pub scale: [f32; 3],
}

fn default_model_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl ModelImport {
    /// Placement transform for the imported scene root.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.position))
            .with_rotation(Quat::from_rotation_y(self.yaw))
            .with_scale(Vec3::from_array(self.scale))
    }
}

/// Complete scene manifest as a Bevy asset. Mirrors the JSON structure
/// exactly and doubles as a resource once loaded.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneManifest {
    pub camera: CameraSpawn,
    #[serde(default)]
    pub ground: GroundSpec,
    #[serde(default)]
    pub light: LightSpec,
    #[serde(default)]
    pub models: Vec<ModelImport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "camera": {
            "position": [100.0, 70.0, 50.0],
            "yaw": 1.5708,
            "pitch": -0.15708,
            "speed": 0.1
        },
        "ground": { "width": 100.0, "depth": 100.0 },
        "light": { "direction": [0.0, 1.0, 0.0], "intensity": 0.7 },
        "models": [
            { "name": "pavilion", "path": "models/pavilion.glb", "scale": [0.005, 0.005, 0.005] }
        ]
    }"#;

    #[test]
    fn sample_manifest_deserializes() {
        let manifest: SceneManifest = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.camera.position, [100.0, 70.0, 50.0]);
        assert_eq!(manifest.models.len(), 1);
        assert_eq!(manifest.models[0].path, "models/pavilion.glb");
    }

    #[test]
    fn omitted_sections_fall_back_to_defaults() {
        let manifest: SceneManifest =
            serde_json::from_str(r#"{ "camera": { "position": [0.0, 2.0, 5.0] } }"#).unwrap();
        assert_eq!(manifest.camera.speed, DEFAULT_CAMERA_SPEED);
        assert_eq!(manifest.ground.width, DEFAULT_GROUND_EXTENT);
        assert_eq!(manifest.light.intensity, DEFAULT_LIGHT_INTENSITY);
        assert!(manifest.models.is_empty());
    }

    #[test]
    fn model_placement_sets_position_and_per_axis_scale() {
        let import = ModelImport {
            name: "office-block".into(),
            path: "models/office_block.glb".into(),
            position: [-20.0, 3.0, 23.0],
            yaw: std::f32::consts::PI,
            scale: [3.0, 5.0, 3.0],
        };
        let transform = import.transform();
        assert_eq!(transform.translation, Vec3::new(-20.0, 3.0, 23.0));
        assert_eq!(transform.scale, Vec3::new(3.0, 5.0, 3.0));
    }

    #[test]
    fn shipped_manifest_carries_every_placement() {
        let manifest: SceneManifest =
            serde_json::from_str(include_str!("../../../assets/scene/manifest.json")).unwrap();
        // Primary model, four cottages, the bamboo house, the office block
        // and the road.
        assert_eq!(manifest.models.len(), 8);
        let road = manifest
            .models
            .iter()
            .find(|model| model.name == "road")
            .unwrap();
        assert_eq!(road.scale, [6.0, 0.5, 12.0]);
    }
}
