//! Visual constants for the map view and HUD.
//!
//! Saved work areas take their stroke color from the tier table in
//! `editing::tier`; everything else lives here.

use bevy::prelude::*;

// Window Configuration
pub const WINDOW_TITLE: &str = "Fieldmark";
pub const WINDOW_WIDTH: f32 = 1024.0;
pub const WINDOW_HEIGHT: f32 = 768.0;

// Map Backdrop
pub const BACKGROUND_COLOR: Color = Color::srgb(0.12, 0.14, 0.12);
pub const GRATICULE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.06);

// In-Progress Drawing
pub const IN_PROGRESS_STROKE_COLOR: Color = Color::srgb(0.0, 0.8, 1.0);
pub const VERTEX_MARKER_COLOR: Color = Color::srgb(1.0, 0.3, 0.0);
pub const VERTEX_MARKER_SIZE: f32 = 6.0;

// Saved Work Areas
pub const SELECTED_STROKE_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
pub const LABEL_COLOR: Color = Color::srgb(0.9, 0.9, 0.85);
pub const LABEL_FONT_SIZE: f32 = 16.0;

// Overlay Z Order (markers above shapes, labels on top)
pub const MARKER_Z: f32 = 5.0;
pub const LABEL_Z: f32 = 6.0;

// HUD
pub const HUD_BACKGROUND_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.85);
pub const HUD_TEXT_COLOR: Color = Color::srgb(0.75, 0.75, 0.75);
pub const HUD_FONT_SIZE: f32 = 14.0;
pub const HUD_MARGIN: f32 = 12.0;
pub const HUD_PADDING: f32 = 8.0;
