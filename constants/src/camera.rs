use bevy::prelude::*;

/// Fixed offset from the look-at point to the camera (45 deg polar,
/// -45 deg azimuth). Deriving the transform from this offset every frame
/// is what locks the orbit to the isometric angle pair.
pub const ISO_VIEW_OFFSET: Vec3 = Vec3::new(-15.0, 15.0, 15.0);

pub const ORTHO_NEAR: f32 = 0.1;
pub const ORTHO_FAR: f32 = 1000.0;

/// World units visible vertically at zoom 1.0; horizontal extent follows
/// the viewport aspect ratio.
pub const ORTHO_VIEWPORT_HEIGHT: f32 = 2.0;

pub const MIN_ZOOM: f32 = 0.75;
pub const MAX_ZOOM: f32 = 2.5;

/// Fraction of the remaining distance the look-at point covers per tick.
pub const FOCUS_DAMPING: f32 = 0.1;

/// Distance below which a focus transition counts as settled.
pub const FOCUS_EPSILON: f32 = 0.01;

/// Truck boundary keeping the view from drifting off the map.
pub const PAN_BOUNDS_MIN: Vec3 = Vec3::new(-1.5, -1.5, -1.5);
pub const PAN_BOUNDS_MAX: Vec3 = Vec3::new(1.5, 1.5, 1.5);

/// World units trucked per pixel of mouse motion at zoom 1.0.
pub const PAN_SPEED: f32 = 0.0025;

/// Zoom multiplier per scroll line.
pub const ZOOM_STEP: f32 = 0.1;
