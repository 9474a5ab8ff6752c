/// Map manifest loaded from JSON configuration.
pub mod map_manifest;
