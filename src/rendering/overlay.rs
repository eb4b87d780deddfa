//! Overlay reconciliation
//!
//! Translates the declarative editing state (drawing session + registry)
//! into imperative add/remove operations against the rendering surface.
//! Each pass diffs the target overlay set against what was last emitted:
//! unchanged overlays are never torn down and re-added, and no handle is
//! left dangling after its owner goes away.
//!
//! Handles are issued here and tagged with their owner, never compared by
//! surface-object identity; the surface correlates removals by handle.

use crate::editing::{DrawingSession, SizeTier, WorkAreaId, WorkAreaRegistry};
use crate::geo::GeoPoint;
use bevy::prelude::*;
use std::collections::BTreeMap;

/// Stable identifier for one drawn element on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayHandle(u64);

/// Which logical entity an overlay element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OverlayOwner {
    InProgress,
    Saved(WorkAreaId),
}

/// Per-owner element slot. A payload change in a slot replaces that slot's
/// overlay (remove then add) within a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OverlaySlot {
    Shape,
    Label,
    Marker(usize),
}

/// Stroke styling for a shape overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeStyle {
    InProgress,
    Saved { tier: SizeTier, selected: bool },
}

/// Geometry and styling payload of one overlay element.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayElement {
    /// Polygon outline, or open polyline while `closed` is false.
    Shape {
        vertices: Vec<GeoPoint>,
        closed: bool,
        style: ShapeStyle,
    },
    /// One in-progress vertex marker.
    Marker { position: GeoPoint },
    /// Name label at a work area's bounds center.
    Label { position: GeoPoint, text: String },
}

/// One imperative operation against the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayOp {
    Add {
        handle: OverlayHandle,
        owner: OverlayOwner,
        element: OverlayElement,
    },
    Remove {
        handle: OverlayHandle,
    },
}

type SlotMap = BTreeMap<OverlaySlot, OverlayElement>;

/// Diffing state between the editing stores and the rendering surface.
#[derive(Resource, Debug, Default)]
pub struct OverlayReconciler {
    next_handle: u64,
    drawn: BTreeMap<OverlayOwner, BTreeMap<OverlaySlot, (OverlayHandle, OverlayElement)>>,
}

impl OverlayReconciler {
    /// One reconciliation pass. Removals are emitted before adds so a slot
    /// replacement never has two live handles.
    pub fn reconcile(
        &mut self,
        session: &DrawingSession,
        registry: &WorkAreaRegistry,
    ) -> Vec<OverlayOp> {
        let target = target_elements(session, registry);
        let mut ops = Vec::new();

        self.drawn.retain(|owner, slots| match target.get(owner) {
            None => {
                for (handle, _) in std::mem::take(slots).into_values() {
                    ops.push(OverlayOp::Remove { handle });
                }
                false
            }
            Some(want) => {
                slots.retain(|slot, (handle, element)| {
                    if want.get(slot) == Some(&*element) {
                        true
                    } else {
                        ops.push(OverlayOp::Remove { handle: *handle });
                        false
                    }
                });
                true
            }
        });

        for (owner, want) in target {
            let drawn_slots = self.drawn.entry(owner).or_default();
            for (slot, element) in want {
                if drawn_slots.contains_key(&slot) {
                    continue;
                }
                self.next_handle += 1;
                let handle = OverlayHandle(self.next_handle);
                drawn_slots.insert(slot, (handle, element.clone()));
                ops.push(OverlayOp::Add {
                    handle,
                    owner,
                    element,
                });
            }
        }
        self.drawn.retain(|_, slots| !slots.is_empty());

        ops
    }

    /// Handles currently live for an owner; empty once the owner is gone.
    pub fn handles_for(&self, owner: OverlayOwner) -> Vec<OverlayHandle> {
        self.drawn
            .get(&owner)
            .map(|slots| slots.values().map(|(handle, _)| *handle).collect())
            .unwrap_or_default()
    }
}

/// The overlay set the surface should be showing right now: a shape per
/// saved area with at least 3 vertices plus its name label, the in-progress
/// shape once 2 vertices exist (an open path until the 3rd vertex closes
/// it), and a marker per in-progress vertex.
fn target_elements(
    session: &DrawingSession,
    registry: &WorkAreaRegistry,
) -> BTreeMap<OverlayOwner, SlotMap> {
    let mut target = BTreeMap::new();

    let vertices = session.vertices();
    if !vertices.is_empty() {
        let mut slots = SlotMap::new();
        if vertices.len() >= 2 {
            slots.insert(
                OverlaySlot::Shape,
                OverlayElement::Shape {
                    vertices: vertices.to_vec(),
                    closed: vertices.len() >= 3,
                    style: ShapeStyle::InProgress,
                },
            );
        }
        for (index, &vertex) in vertices.iter().enumerate() {
            slots.insert(
                OverlaySlot::Marker(index),
                OverlayElement::Marker { position: vertex },
            );
        }
        target.insert(OverlayOwner::InProgress, slots);
    }

    for area in registry.iter() {
        if area.vertices.len() < 3 {
            continue;
        }
        let mut slots = SlotMap::new();
        slots.insert(
            OverlaySlot::Shape,
            OverlayElement::Shape {
                vertices: area.vertices.clone(),
                closed: true,
                style: ShapeStyle::Saved {
                    tier: area.tier,
                    selected: area.selected,
                },
            },
        );
        if let Some(anchor) = area.label_anchor() {
            slots.insert(
                OverlaySlot::Label,
                OverlayElement::Label {
                    position: anchor,
                    text: area.name.clone(),
                },
            );
        }
        target.insert(OverlayOwner::Saved(area.id), slots);
    }

    target
}
