//! Scene composition: the floor stack, its layout around the active
//! floor, and static lighting.

/// Floor stack spawning and active-floor layout.
pub mod composer;

/// Static ambient and directional lighting.
pub mod lighting;
