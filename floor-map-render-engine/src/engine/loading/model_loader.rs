use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::engine::assets::map_manifest::MapManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::composer::{ActiveFloor, spawn_floors};

const MANIFEST_PATH: &str = "map/manifest.json";

#[derive(Resource, Default)]
pub struct ModelLoader {
    manifest: Option<Handle<MapManifest>>,
    model: Option<Handle<Scene>>,
}

// Start the loading process
pub fn start_loading(mut model_loader: ResMut<ModelLoader>, asset_server: Res<AssetServer>) {
    info!("Loading map manifest from: {}", MANIFEST_PATH);
    model_loader.manifest = Some(asset_server.load(MANIFEST_PATH));
}

// Read the manifest and request the building model when ready
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    mut model_loader: ResMut<ModelLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<MapManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    let Some(handle) = model_loader.manifest.clone() else {
        return;
    };

    if let LoadState::Failed(err) = asset_server.load_state(&handle) {
        loading_progress.failure = Some(format!("map manifest failed to load: {err}"));
        return;
    }

    if let Some(manifest) = manifests.get(&handle) {
        info!("Map manifest loaded: {} floors", manifest.floor_count);

        // The model handle is cloned into every floor, so the asset
        // server fetches the file once and reuses it across the stack.
        let model = asset_server.load(GltfAssetLabel::Scene(0).from_asset(manifest.model_path.clone()));
        model_loader.model = Some(model);

        commands.insert_resource(ActiveFloor {
            index: manifest.clamped_initial_floor(),
        });
        commands.insert_resource(manifest.clone());

        loading_progress.manifest_loaded = true;
        loading_progress.model_requested = true;
    }
}

// Spawn the floor stack once the model and its dependencies are in memory
pub fn check_model_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    model_loader: Res<ModelLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifest: Option<Res<MapManifest>>,
    active_floor: Option<Res<ActiveFloor>>,
) {
    if loading_progress.floors_spawned || !loading_progress.model_requested {
        return;
    }

    let Some(model) = model_loader.model.clone() else {
        return;
    };

    if let LoadState::Failed(err) = asset_server.load_state(&model) {
        loading_progress.failure = Some(format!("building model failed to load: {err}"));
        return;
    }

    if !asset_server.is_loaded_with_dependencies(&model) {
        return;
    }

    let (Some(manifest), Some(active_floor)) = (manifest, active_floor) else {
        return;
    };

    spawn_floors(&mut commands, manifest.floor_count, active_floor.index, model);
    loading_progress.floors_spawned = true;
}
