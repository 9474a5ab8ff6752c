use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub model_requested: bool,
    pub floors_spawned: bool,
    pub failure: Option<String>,
}
