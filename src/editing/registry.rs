//! Saved work areas
//!
//! [`WorkAreaRegistry`] holds every committed polygon in insertion order,
//! keeps the at-most-one-selected invariant, and answers "which area
//! contains this point" for tap handling. All measured fields on a
//! [`WorkArea`] are snapshots taken when the drawing session was committed;
//! vertices are never edited in place after that.

use super::tier::SizeTier;
use crate::geo::{measure, GeoPoint};
use bevy::prelude::*;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier for a saved work area.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct WorkAreaId(u64);

impl WorkAreaId {
    /// Freshly generated random id, assigned once at commit time.
    pub fn generate() -> WorkAreaId {
        WorkAreaId(rand::random())
    }

    pub const fn from_raw(raw: u64) -> WorkAreaId {
        WorkAreaId(raw)
    }
}

impl fmt::Display for WorkAreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A saved, named polygon representing a parcel of land to be serviced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkArea {
    pub id: WorkAreaId,
    pub name: String,
    /// Ordered ring; edge i connects vertex i to vertex (i + 1) mod n.
    pub vertices: Vec<GeoPoint>,
    pub area_acres: f64,
    pub perimeter_feet: f64,
    pub tier: SizeTier,
    /// Unix seconds at commit time.
    pub created_at: i64,
    /// Transient display state, never persisted.
    #[serde(skip)]
    pub selected: bool,
}

impl WorkArea {
    /// Builds a work area from a snapshot of session vertices, measuring it
    /// once.
    pub fn new(
        id: WorkAreaId,
        name: String,
        vertices: Vec<GeoPoint>,
        tier: SizeTier,
    ) -> WorkArea {
        let area_acres = measure::area_acres(&vertices);
        let perimeter_feet = measure::perimeter_feet(&vertices);
        WorkArea {
            id,
            name,
            vertices,
            area_acres,
            perimeter_feet,
            tier,
            created_at: Utc::now().timestamp(),
            selected: false,
        }
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        measure::point_in_polygon(point, &self.vertices)
    }

    /// Where the name label goes: bounding-box center of the ring.
    pub fn label_anchor(&self) -> Option<GeoPoint> {
        measure::bounds_center(&self.vertices)
    }
}

/// Error from [`WorkAreaRegistry::add`]. Ids are generated, not
/// user-supplied, so a collision is an invariant violation rather than an
/// expected runtime path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateId(WorkAreaId),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateId(id) => {
                write!(f, "a work area with id {id} already exists")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Insertion-ordered set of saved work areas with at most one selected.
#[derive(Resource, Debug, Default, Clone)]
pub struct WorkAreaRegistry {
    areas: Vec<WorkArea>,
}

impl WorkAreaRegistry {
    pub fn iter(&self) -> impl Iterator<Item = &WorkArea> {
        self.areas.iter()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn get(&self, id: WorkAreaId) -> Option<&WorkArea> {
        self.areas.iter().find(|area| area.id == id)
    }

    /// Appends a work area, rejecting id collisions without touching the
    /// existing entries.
    pub fn add(&mut self, area: WorkArea) -> Result<(), RegistryError> {
        if self.get(area.id).is_some() {
            log::warn!("rejecting duplicate work area id {}", area.id);
            return Err(RegistryError::DuplicateId(area.id));
        }
        self.areas.push(area);
        Ok(())
    }

    /// Removes and returns the area; selection dies with it. No-op when the
    /// id is absent.
    pub fn remove(&mut self, id: WorkAreaId) -> Option<WorkArea> {
        let index = self.areas.iter().position(|area| area.id == id)?;
        Some(self.areas.remove(index))
    }

    /// Selects the target exclusively. Returns false if the id is absent.
    pub fn select(&mut self, id: WorkAreaId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        for area in &mut self.areas {
            area.selected = area.id == id;
        }
        true
    }

    /// Tap-to-select, tap-again-to-deselect. Returns whether the target is
    /// selected afterwards.
    pub fn toggle_select(&mut self, id: WorkAreaId) -> bool {
        let was_selected = self.get(id).map(|area| area.selected);
        match was_selected {
            None => false,
            Some(true) => {
                self.deselect_all();
                false
            }
            Some(false) => self.select(id),
        }
    }

    pub fn deselect_all(&mut self) {
        for area in &mut self.areas {
            area.selected = false;
        }
    }

    pub fn selected(&self) -> Option<&WorkArea> {
        self.areas.iter().find(|area| area.selected)
    }

    /// First work area containing `point`, in insertion order. The
    /// first-match rule is the tie-break when saved polygons overlap.
    pub fn hit_test(&self, point: GeoPoint) -> Option<WorkAreaId> {
        self.areas
            .iter()
            .find(|area| area.contains(point))
            .map(|area| area.id)
    }

    pub fn rename(&mut self, id: WorkAreaId, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(area) => {
                area.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn set_tier(&mut self, id: WorkAreaId, tier: SizeTier) -> bool {
        match self.get_mut(id) {
            Some(area) => {
                area.tier = tier;
                true
            }
            None => false,
        }
    }

    /// Fallback name for a commit with no user-supplied name.
    pub fn default_name(&self) -> String {
        format!("Work Area {}", self.areas.len() + 1)
    }

    fn get_mut(&mut self, id: WorkAreaId) -> Option<&mut WorkArea> {
        self.areas.iter_mut().find(|area| area.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(lat: f64, lon: f64, id: u64) -> WorkArea {
        WorkArea::new(
            WorkAreaId::from_raw(id),
            format!("area {id}"),
            vec![
                GeoPoint::new(lat, lon),
                GeoPoint::new(lat, lon + 0.001),
                GeoPoint::new(lat + 0.001, lon + 0.001),
                GeoPoint::new(lat + 0.001, lon),
            ],
            SizeTier::Plot,
        )
    }

    #[test]
    fn at_most_one_area_is_ever_selected() {
        let mut registry = WorkAreaRegistry::default();
        registry.add(square(37.0, -122.0, 1)).unwrap();
        registry.add(square(38.0, -122.0, 2)).unwrap();
        registry.add(square(39.0, -122.0, 3)).unwrap();

        registry.select(WorkAreaId::from_raw(1));
        registry.toggle_select(WorkAreaId::from_raw(2));
        registry.select(WorkAreaId::from_raw(3));
        registry.toggle_select(WorkAreaId::from_raw(1));

        let selected_count = registry.iter().filter(|area| area.selected).count();
        assert_eq!(selected_count, 1);
        assert_eq!(registry.selected().unwrap().id, WorkAreaId::from_raw(1));
    }

    #[test]
    fn toggle_select_deselects_on_second_tap() {
        let mut registry = WorkAreaRegistry::default();
        registry.add(square(37.0, -122.0, 1)).unwrap();

        assert!(registry.toggle_select(WorkAreaId::from_raw(1)));
        assert!(!registry.toggle_select(WorkAreaId::from_raw(1)));
        assert!(registry.selected().is_none());
    }

    #[test]
    fn removing_the_selected_area_clears_selection() {
        let mut registry = WorkAreaRegistry::default();
        registry.add(square(37.0, -122.0, 1)).unwrap();
        registry.select(WorkAreaId::from_raw(1));

        assert!(registry.remove(WorkAreaId::from_raw(1)).is_some());
        assert!(registry.selected().is_none());
        assert!(registry.remove(WorkAreaId::from_raw(1)).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected_without_corrupting_the_registry() {
        let mut registry = WorkAreaRegistry::default();
        registry.add(square(37.0, -122.0, 1)).unwrap();

        let err = registry.add(square(40.0, -100.0, 1)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId(WorkAreaId::from_raw(1)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(WorkAreaId::from_raw(1)).unwrap().name, "area 1");
    }

    #[test]
    fn hit_test_prefers_the_earliest_insertion() {
        let mut registry = WorkAreaRegistry::default();
        // Identical footprints; the first added wins.
        registry.add(square(37.0, -122.0, 1)).unwrap();
        registry.add(square(37.0, -122.0, 2)).unwrap();

        let inside = GeoPoint::new(37.0005, -121.9995);
        assert_eq!(registry.hit_test(inside), Some(WorkAreaId::from_raw(1)));

        let outside = GeoPoint::new(0.0, 0.0);
        assert_eq!(registry.hit_test(outside), None);
    }

    #[test]
    fn rename_and_retier_touch_only_their_target() {
        let mut registry = WorkAreaRegistry::default();
        registry.add(square(37.0, -122.0, 1)).unwrap();

        assert!(registry.rename(WorkAreaId::from_raw(1), "North Lot"));
        assert!(registry.set_tier(WorkAreaId::from_raw(1), SizeTier::Tract));
        assert!(!registry.rename(WorkAreaId::from_raw(9), "ghost"));

        let area = registry.get(WorkAreaId::from_raw(1)).unwrap();
        assert_eq!(area.name, "North Lot");
        assert_eq!(area.tier, SizeTier::Tract);
    }

    #[test]
    fn default_names_count_up_from_the_current_size() {
        let mut registry = WorkAreaRegistry::default();
        assert_eq!(registry.default_name(), "Work Area 1");
        registry.add(square(37.0, -122.0, 1)).unwrap();
        assert_eq!(registry.default_name(), "Work Area 2");
    }
}
