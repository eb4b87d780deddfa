//! Overlay surface
//!
//! Applies reconciler ops to the ECS: one entity per overlay handle.
//! Markers are sprites and labels are world-space text, both retained;
//! shape outlines are retained as data components and stroked by a gizmo
//! system each frame. Entities are correlated to reconciler handles through
//! [`OverlaySurface`], never by comparing surface objects.

use super::overlay::{
    OverlayElement, OverlayHandle, OverlayOp, OverlayReconciler, ShapeStyle,
};
use crate::editing::{DrawingSession, WorkAreaRegistry};
use crate::geo::map_space::{geo_to_world, MapOrigin};
use crate::geo::GeoPoint;
use crate::ui::theme::{
    IN_PROGRESS_STROKE_COLOR, LABEL_COLOR, LABEL_FONT_SIZE, LABEL_Z, MARKER_Z,
    SELECTED_STROKE_COLOR, VERTEX_MARKER_COLOR, VERTEX_MARKER_SIZE,
};
use bevy::prelude::*;
use std::collections::HashMap;

/// Maps live reconciler handles to their spawned entities.
#[derive(Resource, Debug, Default)]
pub struct OverlaySurface {
    entities: HashMap<OverlayHandle, Entity>,
}

/// A polygon or open-path outline, projected into world space.
#[derive(Component, Debug)]
pub struct ShapeOverlay {
    pub points: Vec<Vec2>,
    pub closed: bool,
    pub style: ShapeStyle,
}

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverlayReconciler>()
            .init_resource::<OverlaySurface>()
            // PostUpdate, so a pass sees everything the input systems did
            // this frame
            .add_systems(PostUpdate, sync_overlays)
            .add_systems(Update, draw_shape_overlays);
    }
}

/// Runs a reconciliation pass whenever the editing state changed and applies
/// the resulting ops.
pub fn sync_overlays(
    mut commands: Commands,
    mut reconciler: ResMut<OverlayReconciler>,
    mut surface: ResMut<OverlaySurface>,
    session: Res<DrawingSession>,
    registry: Res<WorkAreaRegistry>,
    origin: Res<MapOrigin>,
) {
    if !session.is_changed() && !registry.is_changed() {
        return;
    }

    for op in reconciler.reconcile(&session, &registry) {
        match op {
            OverlayOp::Remove { handle } => {
                if let Some(entity) = surface.entities.remove(&handle) {
                    commands.entity(entity).despawn();
                }
            }
            OverlayOp::Add {
                handle,
                owner: _,
                element,
            } => {
                let entity = spawn_element(&mut commands, origin.0, element);
                surface.entities.insert(handle, entity);
            }
        }
    }
}

fn spawn_element(commands: &mut Commands, origin: GeoPoint, element: OverlayElement) -> Entity {
    match element {
        OverlayElement::Shape {
            vertices,
            closed,
            style,
        } => {
            let points = vertices
                .iter()
                .map(|&vertex| geo_to_world(origin, vertex))
                .collect();
            commands
                .spawn(ShapeOverlay {
                    points,
                    closed,
                    style,
                })
                .id()
        }
        OverlayElement::Marker { position } => {
            let world = geo_to_world(origin, position);
            commands
                .spawn((
                    Sprite::from_color(
                        VERTEX_MARKER_COLOR,
                        Vec2::splat(VERTEX_MARKER_SIZE),
                    ),
                    Transform::from_translation(world.extend(MARKER_Z)),
                ))
                .id()
        }
        OverlayElement::Label { position, text } => {
            let world = geo_to_world(origin, position);
            commands
                .spawn((
                    Text2d::new(text),
                    TextFont {
                        font_size: LABEL_FONT_SIZE,
                        ..default()
                    },
                    TextColor(LABEL_COLOR),
                    Transform::from_translation(world.extend(LABEL_Z)),
                ))
                .id()
        }
    }
}

/// Strokes every retained shape outline.
pub fn draw_shape_overlays(mut gizmos: Gizmos, shapes: Query<&ShapeOverlay>) {
    for shape in &shapes {
        if shape.points.len() < 2 {
            continue;
        }
        let color = shape_color(shape.style);
        if shape.closed {
            let mut ring = shape.points.clone();
            ring.push(shape.points[0]);
            gizmos.linestrip_2d(ring, color);
        } else {
            gizmos.linestrip_2d(shape.points.clone(), color);
        }
    }
}

fn shape_color(style: ShapeStyle) -> Color {
    match style {
        ShapeStyle::InProgress => IN_PROGRESS_STROKE_COLOR,
        ShapeStyle::Saved { tier, selected } => {
            if selected {
                SELECTED_STROKE_COLOR
            } else {
                tier.color()
            }
        }
    }
}
