use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Complete map manifest as a Bevy asset. Mirrors the JSON structure exactly.
/// Names the building model and describes the floor stack built from it.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct MapManifest {
    /// Asset path of the building model, relative to the assets root.
    pub model_path: String,
    /// Number of floors instantiated from the model.
    pub floor_count: usize,
    /// Floor selected when the viewer mounts.
    #[serde(default)]
    pub initial_floor: usize,
}

impl MapManifest {
    /// Initial floor clamped into the valid floor range, so a stale
    /// manifest cannot select a floor that does not exist.
    pub fn clamped_initial_floor(&self) -> usize {
        self.initial_floor
            .min(self.floor_count.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_without_initial_floor() {
        let manifest: MapManifest =
            serde_json::from_str(r#"{"model_path": "map/svg_map.glb", "floor_count": 3}"#)
                .unwrap();
        assert_eq!(manifest.floor_count, 3);
        assert_eq!(manifest.initial_floor, 0);
    }

    #[test]
    fn initial_floor_clamps_to_stack() {
        let manifest = MapManifest {
            model_path: "map/svg_map.glb".into(),
            floor_count: 3,
            initial_floor: 7,
        };
        assert_eq!(manifest.clamped_initial_floor(), 2);

        let empty = MapManifest {
            model_path: "map/svg_map.glb".into(),
            floor_count: 0,
            initial_floor: 1,
        };
        assert_eq!(empty.clamped_initial_floor(), 0);
    }
}
