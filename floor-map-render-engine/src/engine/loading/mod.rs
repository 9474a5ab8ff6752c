//! Asset loading and initialisation systems for the floor map.
//!
//! Manages the two-stage loading pipeline from manifest parsing through
//! model fetching to the spawned floor stack, with progress tracking.

/// Manifest and GLTF model loading with failure capture.
///
/// The model is requested once and the cached handle shared by every floor.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
