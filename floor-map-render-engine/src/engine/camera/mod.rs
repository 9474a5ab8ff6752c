//! Orthographic isometric camera for the floor map.
//!
//! Provides a locked-angle rig with bounded truck/zoom controls and
//! damped look-at transitions toward requested points of interest.

/// Camera rig resource, focus request event, and controller systems.
pub mod iso_rig;
