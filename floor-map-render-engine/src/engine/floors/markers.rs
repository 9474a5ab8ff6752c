use bevy::prelude::*;
use bevy::render::primitives::Aabb;

use constants::interface::MARKER_SIZE_PX;

use crate::engine::camera::iso_rig::FocusCameraEvent;

/// Screen-anchored point-of-interest marker derived from one mesh node.
#[derive(Component)]
pub struct PoiMarker {
    pub floor: Entity,
    /// Mesh node the marker tracks.
    pub anchor: Entity,
    pub node_index: usize,
    /// World-space bounding-box centre of the anchor, refreshed each tick
    /// before projection so it follows the floor's animated position.
    pub world_position: Vec3,
}

pub fn spawn_marker(
    commands: &mut Commands,
    floor: Entity,
    anchor: Entity,
    node_index: usize,
    colour: Color,
    is_active: bool,
) {
    commands.spawn((
        PoiMarker {
            floor,
            anchor,
            node_index,
            world_position: Vec3::ZERO,
        },
        Name::new(format!("PoiMarker{node_index}")),
        Button,
        BackgroundColor(colour),
        BorderRadius::MAX,
        Node {
            width: Val::Px(MARKER_SIZE_PX),
            height: Val::Px(MARKER_SIZE_PX),
            position_type: PositionType::Absolute,
            ..default()
        },
        if is_active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        },
    ));
}

// Reproject visible marker anchors into viewport space each tick
pub fn update_marker_overlay(
    mut markers: Query<(&mut PoiMarker, &mut Node, &Visibility)>,
    anchors: Query<(&GlobalTransform, &Aabb)>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (mut marker, mut node, visibility) in &mut markers {
        if *visibility == Visibility::Hidden {
            continue;
        }
        let Ok((anchor_transform, aabb)) = anchors.get(marker.anchor) else {
            continue;
        };
        marker.world_position = anchor_transform.transform_point(Vec3::from(aabb.center));

        let Ok(screen) = camera.world_to_viewport(camera_transform, marker.world_position) else {
            continue;
        };
        node.left = Val::Px(screen.x - MARKER_SIZE_PX * 0.5);
        node.top = Val::Px(screen.y - MARKER_SIZE_PX * 0.5);
    }
}

// Marker activation only signals upward; the camera rig owns the response
pub fn marker_button_interaction(
    markers: Query<(&Interaction, &PoiMarker), (Changed<Interaction>, With<Button>)>,
    mut focus_events: EventWriter<FocusCameraEvent>,
) {
    for (interaction, marker) in &markers {
        if *interaction == Interaction::Pressed {
            focus_events.write(FocusCameraEvent {
                target: marker.world_position,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::engine::camera::iso_rig::{CameraAnimating, IsoCameraRig, handle_focus_requests};

    #[test]
    fn marker_press_retargets_camera_rig() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<IsoCameraRig>()
            .init_resource::<CameraAnimating>()
            .add_event::<FocusCameraEvent>()
            .add_systems(
                Update,
                (marker_button_interaction, handle_focus_requests).chain(),
            );

        let target = Vec3::new(1.0, 0.5, -0.3);
        app.world_mut().spawn((
            PoiMarker {
                floor: Entity::from_raw(1),
                anchor: Entity::from_raw(2),
                node_index: 0,
                world_position: target,
            },
            Button,
            Interaction::Pressed,
        ));

        app.update();

        let rig = app.world().resource::<IsoCameraRig>();
        assert_eq!(rig.requested_target, target);
        assert!(rig.animating);
        assert!(app.world().resource::<CameraAnimating>().0);
    }
}
