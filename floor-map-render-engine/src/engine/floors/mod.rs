//! Per-floor visual state: damped opacity and position animation, owned
//! floor materials, hover highlighting, and point-of-interest markers.

/// Floor component, opacity maths, and per-tick animation systems.
pub mod floor;

/// Hover highlight swap with guaranteed material restoration.
pub mod hover;

/// Screen-anchored point-of-interest markers derived from mesh bounds.
pub mod markers;

/// One-shot per-scene-instance preparation of floor mesh nodes.
pub mod prepare;
