//! Background graticule
//!
//! Faint world-space grid lines around the camera so panning has a visible
//! frame of reference, in place of map tiles.

use super::cameras::MapCamera;
use crate::core::settings::{GRATICULE_EXTENT_METERS, GRATICULE_SPACING_METERS};
use crate::ui::theme::GRATICULE_COLOR;
use bevy::prelude::*;

pub struct GraticulePlugin;

impl Plugin for GraticulePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_graticule);
    }
}

fn draw_graticule(mut gizmos: Gizmos, camera_query: Query<&Transform, With<MapCamera>>) {
    let center = camera_query
        .single()
        .map(|transform| transform.translation.truncate())
        .unwrap_or(Vec2::ZERO);

    let spacing = GRATICULE_SPACING_METERS;
    let half = GRATICULE_EXTENT_METERS;
    let min_x = ((center.x - half) / spacing).floor() * spacing;
    let max_x = ((center.x + half) / spacing).ceil() * spacing;
    let min_y = ((center.y - half) / spacing).floor() * spacing;
    let max_y = ((center.y + half) / spacing).ceil() * spacing;

    let mut x = min_x;
    while x <= max_x {
        gizmos.line_2d(Vec2::new(x, min_y), Vec2::new(x, max_y), GRATICULE_COLOR);
        x += spacing;
    }
    let mut y = min_y;
    while y <= max_y {
        gizmos.line_2d(Vec2::new(min_x, y), Vec2::new(max_x, y), GRATICULE_COLOR);
        y += spacing;
    }
}
