use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    LoadFailed,
}

// Transition to Running once the floor stack has been spawned
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.floors_spawned {
        info!("-> All assets ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

// Any recorded asset failure routes to the visible failure state instead
// of leaving an empty scene on screen
pub fn transition_to_load_failed(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.failure.is_some() {
        next_state.set(AppState::LoadFailed);
    }
}
