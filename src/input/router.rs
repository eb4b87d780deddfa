//! Gesture routing
//!
//! Pure decision logic between the recognized gesture stream and the editing
//! state. Routing returns an explicit event describing what happened instead
//! of mutating shared observer state, so the Bevy systems (and the tests)
//! just apply the result.

use crate::editing::{DrawingSession, WorkAreaId, WorkAreaRegistry};
use crate::geo::GeoPoint;
use bevy::prelude::*;

/// Interaction mode for the map view, owned by the input layer.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MapMode {
    /// Taps select saved work areas.
    #[default]
    Viewing,
    /// Taps append vertices to the drawing session.
    Drawing,
}

/// A recognized pointer gesture, already in geographic coordinates.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum MapGesture {
    Tap(GeoPoint),
    LongPress(GeoPoint),
}

/// What a routed gesture did.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    VertexAppended { index: usize, position: GeoPoint },
    AreaTapped(WorkAreaId),
    AreaLongPressed(WorkAreaId),
}

/// Routes one gesture. In drawing mode taps append to the session and long
/// presses are ignored (drawing uses taps exclusively, so the two gestures
/// never conflict). In viewing mode both gestures hit-test the registry;
/// landing outside every polygon produces no event, not an error.
pub fn route(
    gesture: MapGesture,
    mode: MapMode,
    session: &mut DrawingSession,
    registry: &WorkAreaRegistry,
) -> Option<MapEvent> {
    match (gesture, mode) {
        (MapGesture::Tap(point), MapMode::Drawing) => {
            session.append(point);
            Some(MapEvent::VertexAppended {
                index: session.vertex_count() - 1,
                position: point,
            })
        }
        (MapGesture::LongPress(_), MapMode::Drawing) => None,
        (MapGesture::Tap(point), MapMode::Viewing) => {
            registry.hit_test(point).map(MapEvent::AreaTapped)
        }
        (MapGesture::LongPress(point), MapMode::Viewing) => {
            registry.hit_test(point).map(MapEvent::AreaLongPressed)
        }
    }
}

/// Outcome of the overloaded cancel action while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    ClearedVertices,
    ExitedDrawing,
}

/// Two-stage cancel: the first press clears the in-progress vertices and
/// stays in drawing mode; pressing again on an empty session exits.
pub fn cancel_action(session: &mut DrawingSession) -> CancelOutcome {
    if session.is_empty() {
        CancelOutcome::ExitedDrawing
    } else {
        session.clear();
        CancelOutcome::ClearedVertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{SizeTier, WorkArea};

    fn registry_with_square() -> (WorkAreaRegistry, WorkAreaId) {
        let id = WorkAreaId::from_raw(7);
        let area = WorkArea::new(
            id,
            "lot".to_string(),
            vec![
                GeoPoint::new(37.0, -122.0),
                GeoPoint::new(37.0, -122.001),
                GeoPoint::new(37.001, -122.001),
                GeoPoint::new(37.001, -122.0),
            ],
            SizeTier::Plot,
        );
        let mut registry = WorkAreaRegistry::default();
        registry.add(area).unwrap();
        (registry, id)
    }

    #[test]
    fn drawing_taps_append_vertices_in_order() {
        let (registry, _) = registry_with_square();
        let mut session = DrawingSession::default();

        let first = route(
            MapGesture::Tap(GeoPoint::new(36.0, -121.0)),
            MapMode::Drawing,
            &mut session,
            &registry,
        );
        let second = route(
            MapGesture::Tap(GeoPoint::new(36.1, -121.0)),
            MapMode::Drawing,
            &mut session,
            &registry,
        );

        assert_eq!(
            first,
            Some(MapEvent::VertexAppended {
                index: 0,
                position: GeoPoint::new(36.0, -121.0)
            })
        );
        assert_eq!(
            second,
            Some(MapEvent::VertexAppended {
                index: 1,
                position: GeoPoint::new(36.1, -121.0)
            })
        );
        assert_eq!(session.vertex_count(), 2);
    }

    #[test]
    fn long_press_is_ignored_while_drawing() {
        let (registry, _) = registry_with_square();
        let mut session = DrawingSession::default();

        let event = route(
            MapGesture::LongPress(GeoPoint::new(37.0005, -122.0005)),
            MapMode::Drawing,
            &mut session,
            &registry,
        );

        assert_eq!(event, None);
        assert!(session.is_empty());
    }

    #[test]
    fn viewing_gestures_hit_test_the_registry() {
        let (registry, id) = registry_with_square();
        let mut session = DrawingSession::default();
        let inside = GeoPoint::new(37.0005, -122.0005);
        let outside = GeoPoint::new(12.0, 80.0);

        assert_eq!(
            route(MapGesture::Tap(inside), MapMode::Viewing, &mut session, &registry),
            Some(MapEvent::AreaTapped(id))
        );
        assert_eq!(
            route(
                MapGesture::LongPress(inside),
                MapMode::Viewing,
                &mut session,
                &registry
            ),
            Some(MapEvent::AreaLongPressed(id))
        );
        assert_eq!(
            route(MapGesture::Tap(outside), MapMode::Viewing, &mut session, &registry),
            None
        );
        assert!(session.is_empty());
    }

    #[test]
    fn cancel_clears_first_and_exits_second() {
        let mut session = DrawingSession::default();
        session.append(GeoPoint::new(37.0, -122.0));

        assert_eq!(cancel_action(&mut session), CancelOutcome::ClearedVertices);
        assert!(session.is_empty());
        assert_eq!(cancel_action(&mut session), CancelOutcome::ExitedDrawing);
    }
}
