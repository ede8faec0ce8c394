use bevy::prelude::*;

use crate::engine::assets::scene_manifest::GroundSpec;

/// Spawn the flat ground plane described by the manifest.
pub fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    spec: &GroundSpec,
) {
    let ground_mesh = meshes.add(Plane3d::default().mesh().size(spec.width, spec.depth));
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.36, 0.42, 0.36),
        perceptual_roughness: 1.0,
        ..default()
    });

    commands.spawn((
        Mesh3d(ground_mesh),
        MeshMaterial3d(ground_material),
        Transform::IDENTITY,
    ));
}
