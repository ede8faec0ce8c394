use bevy::prelude::*;

use constants::camera::CAMERA_NEAR;

use crate::engine::assets::scene_manifest::{CameraSpawn, SceneManifest};
use crate::engine::camera::walk_state::WalkthroughCamera;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::ground::spawn_ground;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::models::spawn_models;

/// Spawn the scene once the manifest resource exists: camera, lighting,
/// ground plane and model imports, in one linear pass.
pub fn build_scene_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest: Option<Res<SceneManifest>>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if loading_progress.scene_spawned || !loading_progress.manifest_loaded {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    spawn_camera(&mut commands, &manifest.camera);
    spawn_lighting(&mut commands, &manifest.light);
    spawn_ground(&mut commands, &mut meshes, &mut materials, &manifest.ground);
    spawn_models(&mut commands, &asset_server, &manifest.models);

    println!("✓ Scene spawned with {} model import(s)", manifest.models.len());
    loading_progress.scene_spawned = true;
}

fn spawn_camera(commands: &mut Commands, spawn: &CameraSpawn) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: CAMERA_NEAR,
            ..default()
        }),
        Transform::from_translation(spawn.translation()).with_rotation(spawn.rotation()),
        WalkthroughCamera,
    ));
}
