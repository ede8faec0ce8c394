use bevy::prelude::*;

use constants::render_settings::{AMBIENT_BRIGHTNESS, DIRECTIONAL_ILLUMINANCE};

use crate::engine::assets::scene_manifest::LightSpec;

/// Spawn scene lighting from the manifest. A hemispheric light splits into
/// an ambient term and a directional light shining against the sky
/// direction.
pub fn spawn_lighting(commands: &mut Commands, spec: &LightSpec) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS * spec.intensity,
        ..default()
    });

    let shine = (-Vec3::from_array(spec.direction))
        .try_normalize()
        .unwrap_or(Vec3::NEG_Y);
    // A straight-down shine direction is collinear with the default up axis.
    let up = if shine.x.abs() < 1e-4 && shine.z.abs() < 1e-4 {
        Vec3::Z
    } else {
        Vec3::Y
    };

    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE * spec.intensity,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(shine, up),
    ));
}
