use bevy::prelude::*;

/// Diameter of a point-of-interest marker circle in logical pixels.
pub const MARKER_SIZE_PX: f32 = 14.0;

/// Material swapped onto a hovered mesh node on the active floor.
pub const HOVER_HIGHLIGHT_COLOUR: Color = Color::srgb(1.0, 0.41, 0.71);

pub const PANEL_BACKGROUND: Color = Color::srgb(0.10, 0.11, 0.13);
pub const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVERED: Color = Color::srgb(0.26, 0.28, 0.32);
pub const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
pub const BUTTON_SELECTED: Color = Color::srgb(0.20, 0.45, 0.85);
