//! Page-level UI: the floor selector panel and status overlays.

/// Floor selector side panel; one numbered button per level.
pub mod floor_select;

/// FPS overlay and the asset-failure overlay.
pub mod status;
