/// Opacity of the active floor.
pub const ACTIVE_OPACITY: f32 = 1.0;

/// Base opacity for inactive floors; divided by the floor's distance
/// from the active one so further floors fade more.
pub const INACTIVE_OPACITY_BASE: f32 = 0.1;

/// Fraction of the remaining distance position and opacity cover per tick.
pub const FLOOR_DAMPING: f32 = 0.1;

/// Vertical world units between adjacent floors in the stack.
pub const FLOOR_SPACING: f32 = 1.0;
