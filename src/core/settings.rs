// Settings ///////////////////////////////////////////////////////////////////
// Behavior constants for the app. Visual constants live in ui::theme.

// Gesture Recognition ////////////////////////////////////////////////////////

/// How long a press must be held before it counts as a long press
pub const LONG_PRESS_SECONDS: f32 = 0.5;
/// Cursor travel beyond this radius turns a press into a camera pan
pub const TAP_SLOP_PIXELS: f32 = 8.0;

// Graticule //////////////////////////////////////////////////////////////////

/// Spacing between background grid lines, in world meters
pub const GRATICULE_SPACING_METERS: f32 = 100.0;
/// Half-extent of the grid drawn around the camera, in world meters
pub const GRATICULE_EXTENT_METERS: f32 = 2_000.0;
