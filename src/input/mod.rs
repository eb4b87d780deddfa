//! Input Handling
//!
//! Gesture recognition, gesture routing, and the editing keyboard:
//! - Tab toggles between viewing and drawing
//! - tap appends a vertex (drawing) or selects a work area (viewing)
//! - long press opens a work area's context actions (viewing only)
//! - Backspace undoes the last vertex, Escape is the two-stage cancel,
//!   Enter commits the session as a saved work area
//! - Delete removes the selected work area

pub mod gestures;
pub mod router;

// Re-export commonly used items
pub use router::{route, CancelOutcome, MapEvent, MapGesture, MapMode};

use crate::editing::{DrawingSession, SizeTier, WorkAreaRegistry};
use bevy::prelude::*;

/// Plugin wiring the gesture and keyboard systems into the app.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<gestures::PressState>()
            .init_resource::<MapMode>()
            .add_event::<MapGesture>()
            .add_event::<MapEvent>()
            .add_systems(
                Update,
                (
                    gestures::recognize_gestures,
                    route_gestures,
                    apply_map_events,
                    handle_editing_keys,
                )
                    .chain(),
            );
    }
}

/// Feeds recognized gestures through the pure router and publishes the
/// resulting events.
fn route_gestures(
    mut gesture_events: EventReader<MapGesture>,
    mut map_events: EventWriter<MapEvent>,
    mode: Res<MapMode>,
    mut session: ResMut<DrawingSession>,
    registry: Res<WorkAreaRegistry>,
) {
    for &gesture in gesture_events.read() {
        if let Some(event) = router::route(gesture, *mode, &mut session, &registry) {
            map_events.write(event);
        }
    }
}

/// Applies the caller-decides half of routed events: a tap toggles
/// selection, a long press selects and surfaces the context actions.
fn apply_map_events(
    mut events: EventReader<MapEvent>,
    mut registry: ResMut<WorkAreaRegistry>,
) {
    for event in events.read() {
        match *event {
            MapEvent::VertexAppended { index, position } => {
                debug!("vertex {index} appended at {position}");
            }
            MapEvent::AreaTapped(id) => {
                let now_selected = registry.toggle_select(id);
                debug!("work area {id} tapped, selected: {now_selected}");
            }
            MapEvent::AreaLongPressed(id) => {
                registry.select(id);
                if let Some(area) = registry.get(id) {
                    info!(
                        "'{}': {:.2} acres, {:.0} ft perimeter. Delete removes it.",
                        area.name, area.area_acres, area.perimeter_feet
                    );
                }
            }
        }
    }
}

fn handle_editing_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut mode: ResMut<MapMode>,
    mut session: ResMut<DrawingSession>,
    mut registry: ResMut<WorkAreaRegistry>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        match *mode {
            MapMode::Viewing => {
                *mode = MapMode::Drawing;
                info!("Entered drawing mode; tap to place vertices");
            }
            MapMode::Drawing => {
                // Leaving drawing mode cancels the session outright: no
                // partial commit, no residual overlay.
                if !session.is_empty() {
                    session.clear();
                }
                *mode = MapMode::Viewing;
                info!("Exited drawing mode");
            }
        }
        return;
    }

    match *mode {
        MapMode::Drawing => handle_drawing_keys(&keys, &mut mode, &mut session, &mut registry),
        MapMode::Viewing => handle_viewing_keys(&keys, &mut registry),
    }
}

fn handle_drawing_keys(
    keys: &ButtonInput<KeyCode>,
    mode: &mut ResMut<MapMode>,
    session: &mut ResMut<DrawingSession>,
    registry: &mut ResMut<WorkAreaRegistry>,
) {
    if keys.just_pressed(KeyCode::Backspace) {
        if let Some(point) = session.undo_last() {
            debug!("removed vertex at {point}");
        }
    }

    if keys.just_pressed(KeyCode::Escape) {
        match router::cancel_action(session) {
            CancelOutcome::ClearedVertices => info!("Cleared in-progress vertices"),
            CancelOutcome::ExitedDrawing => {
                **mode = MapMode::Viewing;
                info!("Exited drawing mode");
            }
        }
    }

    if keys.just_pressed(KeyCode::Enter) {
        let name = registry.default_name();
        let tier = SizeTier::for_area(session.area_acres());
        match session.commit(name, tier) {
            Ok(area) => {
                info!(
                    "Saved '{}': {:.2} acres, {:.0} ft perimeter ({})",
                    area.name,
                    area.area_acres,
                    area.perimeter_feet,
                    area.tier.label()
                );
                if let Err(err) = registry.add(area) {
                    warn!("Save rejected: {err}");
                    return;
                }
                session.clear();
                **mode = MapMode::Viewing;
            }
            Err(err) => warn!("Cannot save yet: {err}"),
        }
    }
}

fn handle_viewing_keys(keys: &ButtonInput<KeyCode>, registry: &mut ResMut<WorkAreaRegistry>) {
    if keys.just_pressed(KeyCode::Delete) {
        let selected_id = registry.selected().map(|area| area.id);
        if let Some(id) = selected_id {
            if let Some(area) = registry.remove(id) {
                info!("Deleted work area '{}'", area.name);
            }
        }
    }

    if keys.just_pressed(KeyCode::Escape) && registry.selected().is_some() {
        registry.deselect_all();
    }
}
