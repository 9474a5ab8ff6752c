use std::collections::HashMap;

use bevy::picking::events::{Out, Over, Pointer};
use bevy::prelude::*;

use constants::interface::HOVER_HIGHLIGHT_COLOUR;

use crate::engine::floors::floor::Floor;
use crate::engine::floors::prepare::FloorMesh;

/// Pre-hover materials for nodes currently under the pointer.
///
/// At most one entry per node; an entry exists only while the pointer is
/// over that node with hover enabled. The swap is idempotent while an
/// entry exists, so racing enter events cannot double-swap.
#[derive(Resource, Default)]
pub struct HoverState {
    original: HashMap<Entity, Handle<StandardMaterial>>,
}

impl HoverState {
    /// Record the pre-hover material for `node`. Returns false when the
    /// node is already hovered, in which case nothing was recorded.
    pub fn begin(&mut self, node: Entity, current: &Handle<StandardMaterial>) -> bool {
        if self.original.contains_key(&node) {
            return false;
        }
        self.original.insert(node, current.clone());
        true
    }

    /// Remove the entry for `node`, yielding the material to restore.
    pub fn end(&mut self, node: Entity) -> Option<Handle<StandardMaterial>> {
        self.original.remove(&node)
    }

    pub fn is_hovered(&self, node: Entity) -> bool {
        self.original.contains_key(&node)
    }

    pub fn hovered_nodes(&self) -> impl Iterator<Item = Entity> + '_ {
        self.original.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

/// The one material shared by every hovered node.
#[derive(Resource)]
pub struct HoverHighlight(pub Handle<StandardMaterial>);

pub fn setup_hover_highlight(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let handle = materials.add(StandardMaterial {
        base_color: HOVER_HIGHLIGHT_COLOUR,
        ..default()
    });
    commands.insert_resource(HoverHighlight(handle));
}

// Swap in the highlight on pointer-enter; active floor only
pub fn begin_hover(
    mut over_events: EventReader<Pointer<Over>>,
    mut hover: ResMut<HoverState>,
    highlight: Res<HoverHighlight>,
    floors: Query<&Floor>,
    mut mesh_nodes: Query<(&FloorMesh, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    for event in over_events.read() {
        let Ok((mesh, mut material)) = mesh_nodes.get_mut(event.target) else {
            continue;
        };
        let Ok(floor) = floors.get(mesh.floor) else {
            continue;
        };
        if !floor.is_active {
            continue;
        }
        if hover.begin(event.target, &material.0) {
            material.0 = highlight.0.clone();
        }
    }
}

// Restore the recorded material on pointer-leave. A node that has already
// been despawned or hidden just drops its entry.
pub fn end_hover(
    mut out_events: EventReader<Pointer<Out>>,
    mut hover: ResMut<HoverState>,
    mut mesh_nodes: Query<&mut MeshMaterial3d<StandardMaterial>>,
) {
    for event in out_events.read() {
        let Some(original) = hover.end(event.target) else {
            continue;
        };
        if let Ok(mut material) = mesh_nodes.get_mut(event.target) {
            material.0 = original;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(id: u128) -> Handle<StandardMaterial> {
        Handle::weak_from_u128(id)
    }

    #[test]
    fn hover_round_trip_restores_exact_material() {
        let mut hover = HoverState::default();
        let node = Entity::from_raw(1);
        let original = handle(7);

        assert!(hover.begin(node, &original));
        assert!(hover.is_hovered(node));

        let restored = hover.end(node).unwrap();
        assert_eq!(restored, original);
        assert!(hover.is_empty());
    }

    #[test]
    fn double_enter_does_not_overwrite_original() {
        let mut hover = HoverState::default();
        let node = Entity::from_raw(2);

        assert!(hover.begin(node, &handle(7)));
        // A second enter while hovered must not record the highlight as
        // the material to restore.
        assert!(!hover.begin(node, &handle(99)));
        assert_eq!(hover.len(), 1);
        assert_eq!(hover.end(node).unwrap(), handle(7));
    }

    #[test]
    fn leave_without_enter_is_a_no_op() {
        let mut hover = HoverState::default();
        assert!(hover.end(Entity::from_raw(3)).is_none());
    }
}
