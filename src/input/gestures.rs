//! Pointer gesture recognition
//!
//! Turns raw mouse input into the tap / long-press stream the router
//! consumes, with screen positions already converted to geographic
//! coordinates through the map camera. A press that wanders past the slop
//! radius becomes a camera drag and never produces a gesture; a press held
//! past the threshold fires a single long press, and its release is then
//! swallowed.

use super::router::MapGesture;
use crate::core::settings::{LONG_PRESS_SECONDS, TAP_SLOP_PIXELS};
use crate::geo::map_space::{world_to_geo, MapOrigin};
use crate::geo::GeoPoint;
use crate::rendering::cameras::MapCamera;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Tracks the in-flight left-button press, if any.
#[derive(Resource, Debug, Default)]
pub struct PressState {
    press: Option<PressStart>,
}

#[derive(Debug, Clone, Copy)]
struct PressStart {
    screen: Vec2,
    started_at: f32,
    long_press_sent: bool,
}

/// System that classifies left-button activity into [`MapGesture`] events.
pub fn recognize_gestures(
    mut press_state: ResMut<PressState>,
    mut gestures: EventWriter<MapGesture>,
    mouse: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    origin: Res<MapOrigin>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MapCamera>>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let now = time.elapsed_secs();

    if mouse.just_pressed(MouseButton::Left) {
        if let Some(screen) = window.cursor_position() {
            press_state.press = Some(PressStart {
                screen,
                started_at: now,
                long_press_sent: false,
            });
        }
        return;
    }

    let Some(mut press) = press_state.press else {
        return;
    };

    // Past the slop radius the press is a pan, not a gesture.
    if let Some(current) = window.cursor_position() {
        if current.distance(press.screen) > TAP_SLOP_PIXELS {
            press_state.press = None;
            return;
        }
    }

    if mouse.pressed(MouseButton::Left) {
        if !press.long_press_sent && now - press.started_at >= LONG_PRESS_SECONDS {
            if let Some(point) = screen_to_geo(press.screen, &origin, &camera_query) {
                debug!("long press at {point}");
                gestures.write(MapGesture::LongPress(point));
            }
            press.long_press_sent = true;
            press_state.press = Some(press);
        }
        return;
    }

    if mouse.just_released(MouseButton::Left) {
        press_state.press = None;
        if !press.long_press_sent {
            if let Some(point) = screen_to_geo(press.screen, &origin, &camera_query) {
                debug!("tap at {point}");
                gestures.write(MapGesture::Tap(point));
            }
        }
    }
}

fn screen_to_geo(
    screen: Vec2,
    origin: &MapOrigin,
    camera_query: &Query<(&Camera, &GlobalTransform), With<MapCamera>>,
) -> Option<GeoPoint> {
    let (camera, camera_transform) = camera_query.single().ok()?;
    let world = camera.viewport_to_world_2d(camera_transform, screen).ok()?;
    Some(world_to_geo(origin.0, world))
}
