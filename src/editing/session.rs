//! The in-progress drawing session
//!
//! One polygon being authored, vertex by vertex. Measurements are always a
//! pure function of the current vertex list -- recomputed on every read, so
//! no stale derived state is ever observable between a mutation and the next
//! read. Committing snapshots the vertices into a [`WorkArea`]; the session
//! is deliberately left intact so the caller can show a confirmation step
//! before clearing.

use super::registry::{WorkArea, WorkAreaId};
use super::tier::SizeTier;
use crate::geo::{measure, GeoPoint};
use bevy::prelude::*;
use std::fmt;

/// Error from [`DrawingSession::commit`]. Recoverable: keep drawing mode
/// active and let the user add more points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitError {
    TooFewVertices { have: usize },
}

impl fmt::Display for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitError::TooFewVertices { have } => write!(
                f,
                "a work area needs at least 3 vertices, the session has {have}"
            ),
        }
    }
}

impl std::error::Error for CommitError {}

/// The polygon currently being drawn.
#[derive(Resource, Debug, Default, Clone)]
pub struct DrawingSession {
    vertices: Vec<GeoPoint>,
}

impl DrawingSession {
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends a vertex. Always succeeds; there is no upper bound.
    pub fn append(&mut self, point: GeoPoint) {
        self.vertices.push(point);
    }

    /// Removes and returns the most recent vertex; a no-op on an empty
    /// session.
    pub fn undo_last(&mut self) -> Option<GeoPoint> {
        self.vertices.pop()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Whether the session can be committed (closed) yet.
    ///
    /// Cheap and side-effect-free; the UI polls this every render to decide
    /// whether to offer the save action.
    pub fn is_closable(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Live area of the ring-so-far, in acres.
    pub fn area_acres(&self) -> f64 {
        measure::area_acres(&self.vertices)
    }

    /// Live closed-ring perimeter, in feet.
    pub fn perimeter_feet(&self) -> f64 {
        measure::perimeter_feet(&self.vertices)
    }

    /// Produces a new [`WorkArea`] with a fresh id and an independent copy
    /// of the current vertices. Does not clear the session; clearing is the
    /// caller's job after a successful commit.
    pub fn commit(
        &self,
        name: impl Into<String>,
        tier: SizeTier,
    ) -> Result<WorkArea, CommitError> {
        if !self.is_closable() {
            return Err(CommitError::TooFewVertices {
                have: self.vertices.len(),
            });
        }
        Ok(WorkArea::new(
            WorkAreaId::generate(),
            name.into(),
            self.vertices.clone(),
            tier,
        ))
    }
}
