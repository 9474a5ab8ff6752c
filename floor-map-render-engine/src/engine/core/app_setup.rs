// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::map_manifest::MapManifest;
use crate::engine::camera::iso_rig::{
    CameraAnimating, FocusCameraEvent, animate_camera_focus, camera_controller,
    handle_focus_requests, spawn_iso_camera,
};
use crate::engine::core::app_state::{AppState, transition_to_load_failed, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::floors::floor::{animate_floor_opacity, animate_floor_positions};
use crate::engine::floors::hover::{HoverState, begin_hover, end_hover, setup_hover_highlight};
use crate::engine::floors::markers::{marker_button_interaction, update_marker_overlay};
use crate::engine::floors::prepare::{MarkerDerivations, prepare_floor_scenes};
use crate::engine::loading::model_loader::{
    ModelLoader, check_model_loading, load_manifest_system, start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::composer::apply_floor_layout;
use crate::engine::scene::lighting::spawn_lighting;

// Crate interface modules
use crate::interface::floor_select::{
    floor_select_interaction, spawn_floor_select_ui, update_floor_select_highlight,
};
use crate::interface::status::{
    fps_text_update_system, spawn_load_failed_overlay, spawn_status_overlay,
};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MeshPickingPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers MapManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<MapManifest>::new(&["json"]))
        .init_state::<AppState>();

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ModelLoader>()
        .init_resource::<MarkerDerivations>()
        .init_resource::<HoverState>()
        .init_resource::<CameraAnimating>()
        .add_event::<FocusCameraEvent>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, setup_hover_highlight, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_manifest_system,
                check_model_loading,
                transition_to_running,
                transition_to_load_failed,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), spawn_floor_select_ui)
        .add_systems(OnEnter(AppState::LoadFailed), spawn_load_failed_overlay);

    // Runtime systems - only run once the floor stack exists
    let runtime_systems = (
        (prepare_floor_scenes, apply_floor_layout).chain(),
        animate_floor_positions,
        animate_floor_opacity,
        begin_hover,
        end_hover,
        update_marker_overlay,
        marker_button_interaction,
        floor_select_interaction,
        update_floor_select_highlight,
        (handle_focus_requests, animate_camera_focus, camera_controller).chain(),
    );
    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app.add_systems(Update, fps_text_update_system);

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_iso_camera(&mut commands);
    spawn_status_overlay(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
