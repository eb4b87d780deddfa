//! Map camera
//!
//! A single 2D camera over world space (meters from the map origin), with
//! pan and zoom provided by `bevy_pancam`. Left-drag pans, which is why the
//! gesture recognizer treats any press that travels past the slop radius as
//! a pan rather than a tap.

use bevy::prelude::*;
use bevy_pancam::{PanCam, PanCamPlugin};

/// Marks the map view camera.
#[derive(Component)]
pub struct MapCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanCamPlugin)
            .add_systems(Startup, spawn_map_camera);
    }
}

fn spawn_map_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MapCamera, PanCam::default()));
}
