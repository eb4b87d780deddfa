//! Spherical measurement over geographic polygons
//!
//! Area uses the spherical-excess approximation from Chamberlain & Duquette,
//! "Some algorithms for polygons on a sphere"; perimeter sums great-circle
//! (haversine) distances around the closed ring. Both treat the earth as a
//! sphere of mean radius, which is adequate for parcel-scale work (under
//! ~100 km^2) and should not be used for large-scale geodesy.
//!
//! Point-in-polygon and bounding-box math treat (longitude, latitude) as a
//! flat plane. That degrades near the poles and for polygons spanning large
//! longitude ranges; fine at parcel scale.
//!
//! Degenerate rings (collinear, self-intersecting) are not rejected; the
//! formulas return whatever value they produce.

use super::point::GeoPoint;
use kurbo::{Point, Rect};

/// Mean earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Conversion from square meters to US survey-adjacent acres.
pub const ACRES_PER_SQUARE_METER: f64 = 0.000_247_105;

/// Conversion from meters to feet.
pub const FEET_PER_METER: f64 = 3.280_84;

/// Area of the closed ring described by `vertices`, in acres.
///
/// Returns 0.0 for fewer than 3 vertices; transient under-threshold states
/// are normal while the user is still tapping points, not an error.
pub fn area_acres(vertices: &[GeoPoint]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        sum += (b.lon_rad() - a.lon_rad()) * (2.0 + a.lat_rad().sin() + b.lat_rad().sin());
    }

    let square_meters = sum.abs() * EARTH_RADIUS_METERS * EARTH_RADIUS_METERS / 2.0;
    square_meters * ACRES_PER_SQUARE_METER
}

/// Perimeter of the closed ring described by `vertices`, in feet.
///
/// The wraparound edge from the last vertex back to the first is always
/// included, even while only two vertices exist and the shape is still an
/// open path on screen: the reported perimeter is what the boundary would
/// measure if the polygon were closed now. Returns 0.0 below 2 vertices.
pub fn perimeter_feet(vertices: &[GeoPoint]) -> f64 {
    if vertices.len() < 2 {
        return 0.0;
    }

    let mut meters = 0.0;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        meters += haversine_meters(a, b);
    }
    meters * FEET_PER_METER
}

/// Great-circle distance between two points, in meters.
pub fn haversine_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = b.lat_rad() - a.lat_rad();
    let dlon = b.lon_rad() - a.lon_rad();
    let h = (dlat / 2.0).sin().powi(2)
        + a.lat_rad().cos() * b.lat_rad().cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Even-odd ray-cast containment test in the (lon, lat) plane.
///
/// Returns false for fewer than 3 vertices. A point exactly on an edge may
/// land on either side; callers must not rely on a specific answer there.
pub fn point_in_polygon(point: GeoPoint, vertices: &[GeoPoint]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let (px, py) = (point.lon, point.lat);
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (xi, yi) = (vertices[i].lon, vertices[i].lat);
        let (xj, yj) = (vertices[j].lon, vertices[j].lat);
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Axis-aligned bounds of the vertex list in the (lon, lat) plane.
fn flat_bounds(vertices: &[GeoPoint]) -> Option<Rect> {
    let mut bounds: Option<Rect> = None;
    for vertex in vertices {
        let p = Point::new(vertex.lon, vertex.lat);
        bounds = Some(match bounds {
            Some(rect) => rect.union_pt(p),
            None => Rect::from_points(p, p),
        });
    }
    bounds
}

/// Center of the bounding box of `vertices` -- a label anchor, not a true
/// area centroid. None for an empty list.
pub fn bounds_center(vertices: &[GeoPoint]) -> Option<GeoPoint> {
    let center = flat_bounds(vertices)?.center();
    Some(GeoPoint::new(center.y, center.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A roughly square parcel, ~111m x ~89m at this latitude.
    fn parcel() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(37.0, -122.0),
            GeoPoint::new(37.0, -122.001),
            GeoPoint::new(37.001, -122.001),
            GeoPoint::new(37.001, -122.0),
        ]
    }

    fn unit_square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ]
    }

    #[test]
    fn parcel_area_is_a_few_acres() {
        let area = area_acres(&parcel());
        assert!(
            area > 1.0 && area < 4.0,
            "expected a parcel of 2-3 acres, got {area}"
        );
    }

    #[test]
    fn area_is_invariant_under_rotation_and_reversal() {
        let vertices = parcel();
        let baseline = area_acres(&vertices);

        for shift in 1..vertices.len() {
            let mut rotated = vertices.clone();
            rotated.rotate_left(shift);
            let delta = (area_acres(&rotated) - baseline).abs();
            assert!(delta < 1e-9, "rotation by {shift} changed area by {delta}");
        }

        let mut reversed = vertices.clone();
        reversed.reverse();
        let delta = (area_acres(&reversed) - baseline).abs();
        assert!(delta < 1e-9, "reversal changed area by {delta}");
    }

    #[test]
    fn perimeter_is_invariant_under_reversal() {
        let vertices = parcel();
        let mut reversed = vertices.clone();
        reversed.reverse();
        let delta = (perimeter_feet(&reversed) - perimeter_feet(&vertices)).abs();
        assert!(delta < 1e-9, "reversal changed perimeter by {delta}");
    }

    #[test]
    fn degenerate_inputs_measure_zero() {
        let p1 = GeoPoint::new(37.0, -122.0);
        let p2 = GeoPoint::new(37.001, -122.0);

        assert_eq!(area_acres(&[]), 0.0);
        assert_eq!(area_acres(&[p1]), 0.0);
        assert_eq!(area_acres(&[p1, p2]), 0.0);
        assert_eq!(perimeter_feet(&[]), 0.0);
        assert_eq!(perimeter_feet(&[p1]), 0.0);
    }

    #[test]
    fn two_point_perimeter_closes_the_ring() {
        let a = GeoPoint::new(37.0, -122.0);
        let b = GeoPoint::new(37.001, -122.0);
        let out_and_back = 2.0 * haversine_meters(a, b) * FEET_PER_METER;
        let delta = (perimeter_feet(&[a, b]) - out_and_back).abs();
        assert!(delta < 1e-9);
    }

    #[test]
    fn collinear_ring_has_vanishing_area() {
        let vertices = vec![
            GeoPoint::new(37.0, -122.0),
            GeoPoint::new(37.001, -122.0),
            GeoPoint::new(37.002, -122.0),
        ];
        assert!(area_acres(&vertices) < 1e-6);
    }

    #[test]
    fn point_in_polygon_on_known_square() {
        let square = unit_square();
        assert!(point_in_polygon(GeoPoint::new(0.5, 0.5), &square));
        assert!(!point_in_polygon(GeoPoint::new(2.0, 2.0), &square));
        assert!(!point_in_polygon(GeoPoint::new(-0.5, 0.5), &square));
    }

    #[test]
    fn point_in_polygon_needs_three_vertices() {
        let p = GeoPoint::new(0.5, 0.5);
        assert!(!point_in_polygon(p, &[]));
        assert!(!point_in_polygon(p, &[GeoPoint::new(0.0, 0.0)]));
        assert!(!point_in_polygon(
            p,
            &[GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]
        ));
    }

    #[test]
    fn bounds_center_is_the_box_midpoint() {
        let center = bounds_center(&unit_square()).unwrap();
        assert_eq!(center, GeoPoint::new(0.5, 0.5));
        assert!(bounds_center(&[]).is_none());
    }
}
