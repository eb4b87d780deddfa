//! Heads-up readout
//!
//! A small fixed panel showing the current mode, the live measurements of
//! the drawing session, and the selected work area. Reads derived values
//! only; all mutation goes through the input layer.

use crate::editing::{DrawingSession, WorkAreaRegistry};
use crate::input::MapMode;
use crate::ui::theme::{
    HUD_BACKGROUND_COLOR, HUD_FONT_SIZE, HUD_MARGIN, HUD_PADDING, HUD_TEXT_COLOR,
};
use bevy::prelude::*;

/// Marks the HUD text node.
#[derive(Component)]
pub struct HudReadout;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, update_hud);
    }
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_MARGIN),
                top: Val::Px(HUD_MARGIN),
                padding: UiRect::all(Val::Px(HUD_PADDING)),
                ..default()
            },
            BackgroundColor(HUD_BACKGROUND_COLOR),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(HUD_TEXT_COLOR),
                HudReadout,
            ));
        });
}

fn update_hud(
    mode: Res<MapMode>,
    session: Res<DrawingSession>,
    registry: Res<WorkAreaRegistry>,
    mut readout: Query<&mut Text, With<HudReadout>>,
) {
    let Ok(mut text) = readout.single_mut() else {
        return;
    };

    let mut lines = Vec::new();
    match *mode {
        MapMode::Drawing => {
            lines.push("draw: tap to add, Enter saves, Esc clears".to_string());
            lines.push(format!(
                "vertices: {}  area: {:.2} ac  perimeter: {:.0} ft",
                session.vertex_count(),
                session.area_acres(),
                session.perimeter_feet()
            ));
            if !session.is_closable() {
                lines.push("need 3 vertices to save".to_string());
            }
        }
        MapMode::Viewing => {
            lines.push(format!(
                "view: {} work areas, Tab to draw",
                registry.len()
            ));
            if let Some(area) = registry.selected() {
                lines.push(format!(
                    "{}: {:.2} ac, {:.0} ft ({})",
                    area.name,
                    area.area_acres,
                    area.perimeter_feet,
                    area.tier.label()
                ));
                if let Some(created) = chrono::DateTime::from_timestamp(area.created_at, 0) {
                    lines.push(format!("saved {}", created.format("%Y-%m-%d %H:%M")));
                }
            }
        }
    }

    let next = lines.join("\n");
    if text.0 != next {
        text.0 = next;
    }
}
