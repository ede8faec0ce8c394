use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::engine::assets::scene_manifest::ModelImport;

/// Spawn each manifest model as a glTF scene instance. Parsing and mesh
/// construction are the engine's job; this only places the roots.
pub fn spawn_models(commands: &mut Commands, asset_server: &AssetServer, models: &[ModelImport]) {
    for model in models {
        println!("Importing model: {} ({})", model.name, model.path);
        let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(model.path.clone()));
        commands.spawn((
            SceneRoot(scene),
            model.transform(),
            Name::new(model.name.clone()),
        ));
    }
}
