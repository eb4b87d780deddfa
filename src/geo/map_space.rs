//! Map space coordinate system
//!
//! World space is a local equirectangular projection: meters east and north
//! of a fixed geographic origin, with longitude scaled by the cosine of the
//! origin latitude. When drawing to the screen or handling mouse input we
//! translate between world space and geographic space through this origin;
//! the camera handles world-to-screen.
//!
//! The projection is only honest near the origin, which matches how the app
//! is used: one job site per session.

use super::measure::EARTH_RADIUS_METERS;
use super::point::GeoPoint;
use bevy::prelude::*;

/// Geographic anchor of the world coordinate system, set from the CLI at
/// startup.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MapOrigin(pub GeoPoint);

/// Projects a geographic point into world units (meters from the origin).
pub fn geo_to_world(origin: GeoPoint, point: GeoPoint) -> Vec2 {
    let east =
        (point.lon_rad() - origin.lon_rad()) * origin.lat_rad().cos() * EARTH_RADIUS_METERS;
    let north = (point.lat_rad() - origin.lat_rad()) * EARTH_RADIUS_METERS;
    Vec2::new(east as f32, north as f32)
}

/// Inverse of [`geo_to_world`]: world units back to geographic degrees.
pub fn world_to_geo(origin: GeoPoint, world: Vec2) -> GeoPoint {
    let lat = origin.lat + (f64::from(world.y) / EARTH_RADIUS_METERS).to_degrees();
    let lon = origin.lon
        + (f64::from(world.x) / (EARTH_RADIUS_METERS * origin.lat_rad().cos())).to_degrees();
    GeoPoint::new(lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_world_zero() {
        let origin = GeoPoint::new(37.0, -122.0);
        assert_eq!(geo_to_world(origin, origin), Vec2::ZERO);
    }

    #[test]
    fn projection_round_trips_near_the_origin() {
        let origin = GeoPoint::new(37.0, -122.0);
        let point = GeoPoint::new(37.0008, -122.0011);
        let back = world_to_geo(origin, geo_to_world(origin, point));
        assert!((back.lat - point.lat).abs() < 1e-6);
        assert!((back.lon - point.lon).abs() < 1e-6);
    }

    #[test]
    fn one_thousandth_degree_of_latitude_is_about_111_meters() {
        let origin = GeoPoint::new(37.0, -122.0);
        let north = geo_to_world(origin, GeoPoint::new(37.001, -122.0));
        assert!((north.y - 111.19).abs() < 1.0, "got {}", north.y);
        assert!(north.x.abs() < 1e-3);
    }
}
