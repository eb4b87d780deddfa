//! Application initialization and configuration

use crate::core::cli::CliArgs;
use crate::editing::{DrawingSession, WorkAreaRegistry};
use crate::geo::map_space::MapOrigin;
use crate::geo::GeoPoint;
use crate::input::InputPlugin;
use crate::io::WorkspacePlugin;
use crate::rendering::cameras::CameraPlugin;
use crate::rendering::graticule::GraticulePlugin;
use crate::rendering::OverlayPlugin;
use crate::ui::theme::{BACKGROUND_COLOR, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::ui::HudPlugin;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Bevy application ready to run
pub fn create_app(cli_args: CliArgs) -> anyhow::Result<App> {
    cli_args.validate()?;

    let mut app = App::new();
    configure_app_settings(&mut app, cli_args);
    add_all_plugins(&mut app);
    Ok(app)
}

/// Sets up application resources and configuration
fn configure_app_settings(app: &mut App, cli_args: CliArgs) {
    let origin = MapOrigin(GeoPoint::new(cli_args.lat, cli_args.lon));

    app.init_resource::<DrawingSession>()
        .init_resource::<WorkAreaRegistry>()
        .insert_resource(origin)
        .insert_resource(cli_args)
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(WinitSettings::desktop_app());
}

/// Adds all plugins to the application in logical groups
fn add_all_plugins(app: &mut App) {
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.into(),
                    resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                    ..default()
                }),
                ..default()
            })
            .build()
            // the custom tracing subscriber is installed in main
            .disable::<bevy::log::LogPlugin>(),
    );

    add_rendering_plugins(app);
    add_editor_plugins(app);
}

/// Adds plugins for rendering and visual display
fn add_rendering_plugins(app: &mut App) {
    app.add_plugins((CameraPlugin, GraticulePlugin, OverlayPlugin));
}

/// Adds plugins for editing, input, and persistence
fn add_editor_plugins(app: &mut App) {
    app.add_plugins((InputPlugin, HudPlugin, WorkspacePlugin));
}
