use bevy::prelude::*;

use constants::path::RELATIVE_MANIFEST_PATH;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::walk_state::WalkState;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    let manifest_path = format!("{}/manifest.json", RELATIVE_MANIFEST_PATH);
    println!("Loading scene manifest from: {}", manifest_path);
    manifest_loader.handle = Some(asset_server.load(&manifest_path));
}

/// Apply the manifest once parsed: publish it as a resource and seed the
/// walk pose from the camera spawn.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    manifests: Res<Assets<SceneManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    if let Some(ref handle) = manifest_loader.handle {
        if let Some(manifest) = manifests.get(handle) {
            println!("✓ Scene manifest loaded");
            commands.insert_resource(WalkState::new(
                manifest.camera.translation(),
                manifest.camera.yaw,
                manifest.camera.pitch,
                manifest.camera.speed,
            ));
            commands.insert_resource(manifest.clone());
            loading_progress.manifest_loaded = true;
        }
    }
}
