use bevy::picking::Pickable;
use bevy::prelude::*;
use rand::Rng;

use crate::engine::floors::floor::Floor;
use crate::engine::floors::markers::spawn_marker;

/// A drawable node claimed by one floor. The floor exclusively owns the
/// referenced material; opacity animation writes to this handle rather
/// than whatever is currently assigned, so a hover swap never blocks it.
#[derive(Component)]
pub struct FloorMesh {
    pub floor: Entity,
    pub material: Handle<StandardMaterial>,
}

/// Present once a floor's scene instance has been prepared.
#[derive(Component)]
pub struct FloorReady;

/// Counts marker derivation passes; exactly one per floor scene instance.
#[derive(Resource, Default)]
pub struct MarkerDerivations(pub usize);

/// Claim the mesh nodes of each freshly spawned floor scene instance.
///
/// Runs until the scene spawner has produced the instance's children,
/// then exactly once per floor: every mesh node gets a random solid
/// colour material owned by the floor, picking behaviour matching the
/// floor's active flag, and one screen-space marker anchored to it.
pub fn prepare_floor_scenes(
    mut commands: Commands,
    floors: Query<(Entity, &Floor), Without<FloorReady>>,
    children: Query<&Children>,
    mesh_nodes: Query<Entity, With<Mesh3d>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut derivations: ResMut<MarkerDerivations>,
) {
    for (floor_entity, floor) in &floors {
        let descendants: Vec<Entity> = children.iter_descendants(floor_entity).collect();

        // Scene instance still spawning; try again next tick.
        if descendants.is_empty() {
            continue;
        }

        let node_entities: Vec<Entity> = descendants
            .iter()
            .copied()
            .filter(|entity| mesh_nodes.contains(*entity))
            .collect();

        // The instance has spawned but carries nothing drawable. Mark it
        // ready so this does not silently retry every tick.
        if node_entities.is_empty() {
            warn!("Floor {} scene instance has no mesh nodes", floor.index);
            commands.entity(floor_entity).insert(FloorReady);
            continue;
        }

        let mut rng = rand::thread_rng();
        for (node_index, node_entity) in node_entities.iter().enumerate() {
            let colour = Color::srgb(
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
            );
            let material = materials.add(StandardMaterial {
                base_color: colour.with_alpha(floor.current_opacity),
                alpha_mode: AlphaMode::Blend,
                ..default()
            });

            commands.entity(*node_entity).insert((
                FloorMesh {
                    floor: floor_entity,
                    material: material.clone(),
                },
                MeshMaterial3d(material),
                pickable_for(floor.is_active),
            ));

            spawn_marker(
                &mut commands,
                floor_entity,
                *node_entity,
                node_index,
                colour,
                floor.is_active,
            );
        }

        derivations.0 += 1;
        commands.entity(floor_entity).insert(FloorReady);
        info!(
            "Floor {} prepared: {} mesh nodes",
            floor.index,
            node_entities.len()
        );
    }
}

/// Only the active floor accepts pointer-over/out.
pub fn pickable_for(is_active: bool) -> Pickable {
    if is_active {
        Pickable::default()
    } else {
        Pickable::IGNORE
    }
}
