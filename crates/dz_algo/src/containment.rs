//! crates/dz_algo/src/containment.rs
//! Point-in-polygon by even-odd ray casting.
//!
//! A horizontal ray is cast from the point towards +lon; each ring edge it
//! crosses flips the inside flag. Points exactly on an edge fall on whichever
//! side the half-open crossing rule puts them; no special casing.

use dz_core::{GeoPoint, PolygonShape, ZoneGeometry};

/// Even-odd test against a single ring. The ring may be closed (first == last)
/// or open; the closing edge is implied either way. Rings with fewer than three
/// positions contain nothing.
pub fn point_in_ring(p: GeoPoint, ring: &[GeoPoint]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (ring[i].lon, ring[i].lat);
        let (xj, yj) = (ring[j].lon, ring[j].lat);
        // Edge straddles the ray's latitude and the crossing lies east of the point.
        if (yi > p.lat) != (yj > p.lat) && p.lon < (xj - xi) * (p.lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Inside the outer ring and not inside any hole.
pub fn point_in_polygon(p: GeoPoint, poly: &PolygonShape) -> bool {
    point_in_ring(p, poly.outer()) && !poly.holes().iter().any(|h| point_in_ring(p, h))
}

/// Polygon: see `point_in_polygon`. MultiPolygon: inside any member.
pub fn point_in_geometry(p: GeoPoint, g: &ZoneGeometry) -> bool {
    g.polygons().iter().any(|poly| point_in_polygon(p, poly))
}
