//! Shared tuning constants for the floor map render engine.

pub mod camera;
pub mod floor;
pub mod interface;
