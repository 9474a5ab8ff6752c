use bevy::prelude::*;

use constants::floor::{ACTIVE_OPACITY, FLOOR_DAMPING, FLOOR_SPACING, INACTIVE_OPACITY_BASE};

use crate::engine::floors::prepare::FloorMesh;

/// One visible building level. Created when the floor stack spawns, never
/// destroyed while mounted, retargeted whenever the selection changes and
/// mutated every animation tick.
#[derive(Component, Debug)]
pub struct Floor {
    /// Position in the floor stack, 0 = ground.
    pub index: usize,
    /// Signed distance from the active floor, in levels.
    pub depth: i32,
    pub is_active: bool,
    pub target_position: Vec3,
    pub target_opacity: f32,
    pub current_opacity: f32,
}

impl Floor {
    pub fn new(index: usize, active_index: usize) -> Self {
        let mut floor = Self {
            index,
            depth: 0,
            is_active: false,
            target_position: Vec3::ZERO,
            target_opacity: 0.0,
            current_opacity: 0.0,
        };
        floor.retarget(active_index);
        // Mounting starts at the target so the stack does not fade in from black.
        floor.current_opacity = floor.target_opacity;
        floor
    }

    /// Recompute depth, active flag, and animation targets for a newly
    /// selected floor. The active floor sits at height zero and the rest
    /// stack above and below it.
    pub fn retarget(&mut self, active_index: usize) {
        self.depth = self.index as i32 - active_index as i32;
        self.is_active = self.depth == 0;
        self.target_position = Vec3::new(0.0, self.depth as f32 * FLOOR_SPACING, 0.0);
        self.target_opacity = target_opacity(self.depth, self.is_active);
    }
}

/// Target opacity for a floor `depth` levels away from the active one.
/// A zero depth on an inactive floor is degenerate input; it is clamped
/// to one level so the division can never feed NaN or infinity into the
/// render pipeline.
pub fn target_opacity(depth: i32, is_active: bool) -> f32 {
    if is_active {
        return ACTIVE_OPACITY;
    }
    let levels = depth.unsigned_abs().max(1) as f32;
    (INACTIVE_OPACITY_BASE / levels).clamp(0.0, 1.0)
}

/// Exponential smoothing toward a target by a fixed fraction per tick.
/// Asymptotic, never overshoots, and a fixed point once current == target.
pub fn damp(current: f32, target: f32, fraction: f32) -> f32 {
    current + (target - current) * fraction
}

// Per-tick position smoothing toward each floor's slot in the stack
pub fn animate_floor_positions(mut floors: Query<(&Floor, &mut Transform)>) {
    for (floor, mut transform) in &mut floors {
        transform.translation = transform.translation.lerp(floor.target_position, FLOOR_DAMPING);
    }
}

// Per-tick opacity smoothing, written through to the floor-owned materials
pub fn animate_floor_opacity(
    mut floors: Query<&mut Floor>,
    mesh_nodes: Query<&FloorMesh>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for mut floor in &mut floors {
        floor.current_opacity = damp(floor.current_opacity, floor.target_opacity, FLOOR_DAMPING);
    }

    for mesh in &mesh_nodes {
        let Ok(floor) = floors.get(mesh.floor) else {
            continue;
        };
        if let Some(material) = materials.get_mut(&mesh.material) {
            material.base_color.set_alpha(floor.current_opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn active_floor_targets_full_opacity() {
        assert_relative_eq!(target_opacity(0, true), 1.0);
    }

    #[test]
    fn inactive_opacity_falls_off_with_depth() {
        assert_relative_eq!(target_opacity(1, false), 0.1);
        assert_relative_eq!(target_opacity(-1, false), 0.1);
        assert_relative_eq!(target_opacity(2, false), 0.05);
        assert_relative_eq!(target_opacity(-3, false), 0.1 / 3.0);
    }

    #[test]
    fn degenerate_zero_depth_inactive_stays_finite() {
        let opacity = target_opacity(0, false);
        assert!(opacity.is_finite());
        assert!((0.0..=1.0).contains(&opacity));
        assert_relative_eq!(opacity, 0.1);
    }

    #[test]
    fn damping_fixed_point_at_target() {
        let mut value = 0.42;
        for _ in 0..5 {
            value = damp(value, 0.42, 0.1);
        }
        assert_relative_eq!(value, 0.42);
    }

    #[test]
    fn damping_converges_toward_target() {
        let mut value = 0.0;
        for _ in 0..200 {
            value = damp(value, 1.0, 0.1);
        }
        assert!((1.0 - value).abs() < 1e-6);
    }

    #[test]
    fn three_floor_scenario_ground_active() {
        let floors: Vec<Floor> = (0..3).map(|index| Floor::new(index, 0)).collect();

        assert!(floors[0].is_active);
        assert_relative_eq!(floors[0].target_opacity, 1.0);
        assert_eq!(floors[0].target_position, Vec3::ZERO);

        assert_eq!(floors[1].depth, 1);
        assert_relative_eq!(floors[1].target_opacity, 0.1);
        assert_eq!(floors[1].target_position, Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(floors[2].depth, 2);
        assert_relative_eq!(floors[2].target_opacity, 0.05);
        assert_eq!(floors[2].target_position, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn three_floor_scenario_top_selected() {
        let mut floors: Vec<Floor> = (0..3).map(|index| Floor::new(index, 0)).collect();
        for floor in &mut floors {
            floor.retarget(2);
        }

        assert_eq!(floors[0].target_position, Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(floors[1].target_position, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(floors[2].target_position, Vec3::ZERO);
        assert!(floors[2].is_active);
        assert!(!floors[0].is_active);
    }
}
