//! Geographic coordinate primitives
//!
//! This module provides the core coordinate type for the map editor.
//! Geographic space is the fixed coordinate system where work areas and
//! drawing sessions are described, in decimal degrees on a spherical earth.
//! Conversions to and from Bevy world space live in
//! [`map_space`](super::map_space).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the earth's surface in decimal degrees.
///
/// Latitude is positive north, longitude positive east. The type is a plain
/// value; all measurement is done by free functions over slices of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint { lat, lon }
    }

    /// Latitude in radians, for spherical formulas.
    pub fn lat_rad(self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians, for spherical formulas.
    pub fn lon_rad(self) -> f64 {
        self.lon.to_radians()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
