use bevy::picking::Pickable;
use bevy::prelude::*;

use crate::engine::floors::floor::Floor;
use crate::engine::floors::hover::HoverState;
use crate::engine::floors::markers::PoiMarker;
use crate::engine::floors::prepare::{FloorMesh, pickable_for};

/// Currently selected floor index. Owned by the page-level selector;
/// the composer only consumes it.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ActiveFloor {
    pub index: usize,
}

/// Spawn one floor per level, all sharing the cached model handle. The
/// active floor sits at height zero and the rest stack above and below.
pub fn spawn_floors(
    commands: &mut Commands,
    floor_count: usize,
    active_index: usize,
    model: Handle<Scene>,
) {
    for index in 0..floor_count {
        let floor = Floor::new(index, active_index);
        commands.spawn((
            Name::new(format!("Floor{index}")),
            Transform::from_translation(floor.target_position),
            Visibility::default(),
            SceneRoot(model.clone()),
            floor,
        ));
    }
    info!("Spawned {} floors, active index {}", floor_count, active_index);
}

/// Re-derive the stack layout whenever the selection changes: per-floor
/// depth and animation targets, hover restoration on floors that lost
/// focus, picking behaviour, and marker visibility.
pub fn apply_floor_layout(
    active: Res<ActiveFloor>,
    mut floors: Query<(Entity, &mut Floor)>,
    mut mesh_nodes: Query<(Entity, &FloorMesh, &mut Pickable, &mut MeshMaterial3d<StandardMaterial>)>,
    mut markers: Query<(&PoiMarker, &mut Visibility)>,
    mut hover: ResMut<HoverState>,
) {
    if !active.is_changed() {
        return;
    }

    for (_, mut floor) in &mut floors {
        floor.retarget(active.index);
    }

    // A floor that lost focus must not keep nodes stuck on the highlight
    // material; restore its outstanding hover entries before disabling
    // picking on it.
    let stale: Vec<Entity> = hover
        .hovered_nodes()
        .filter(|node| match mesh_nodes.get(*node) {
            Ok((_, mesh, _, _)) => floors
                .get(mesh.floor)
                .map(|(_, floor)| !floor.is_active)
                .unwrap_or(true),
            Err(_) => true,
        })
        .collect();
    for node in stale {
        if let Some(original) = hover.end(node) {
            if let Ok((_, _, _, mut material)) = mesh_nodes.get_mut(node) {
                material.0 = original;
            }
        }
    }

    for (_, mesh, mut pickable, _) in &mut mesh_nodes {
        let Ok((_, floor)) = floors.get(mesh.floor) else {
            continue;
        };
        *pickable = pickable_for(floor.is_active);
    }

    for (marker, mut visibility) in &mut markers {
        let Ok((_, floor)) = floors.get(marker.floor) else {
            continue;
        };
        *visibility = if floor.is_active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
