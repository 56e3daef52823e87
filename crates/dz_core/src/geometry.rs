//! crates/dz_core/src/geometry.rs
//! Zone geometry: points, rings, polygons with holes, and the closed
//! `ZoneGeometry` variant (Polygon | MultiPolygon). Coordinates are
//! `(longitude, latitude)`, longitude first.
//!
//! Wire shape (serde feature): GeoJSON-style `{"type": "...", "coordinates": [...]}`
//! with positions as `[lon, lat]` arrays.

use alloc::vec::Vec;
use core::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// WGS-84 position, longitude first.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        GeoPoint { lon, lat }
    }
}

impl From<[f64; 2]> for GeoPoint {
    #[inline]
    fn from(a: [f64; 2]) -> Self { GeoPoint { lon: a[0], lat: a[1] } }
}

impl From<GeoPoint> for [f64; 2] {
    #[inline]
    fn from(p: GeoPoint) -> Self { [p.lon, p.lat] }
}

impl From<(f64, f64)> for GeoPoint {
    #[inline]
    fn from((lon, lat): (f64, f64)) -> Self { GeoPoint { lon, lat } }
}

/// Closed ordered sequence of positions (first == last when well-formed).
pub type Ring = Vec<GeoPoint>;

/// True iff the ring has at least one point and its first and last points are identical.
pub fn ring_is_closed(ring: &[GeoPoint]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// One outer ring followed by zero or more hole rings.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PolygonShape {
    pub rings: Vec<Ring>,
}

impl PolygonShape {
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        let mut rings = Vec::with_capacity(1 + holes.len());
        rings.push(outer);
        rings.extend(holes);
        PolygonShape { rings }
    }

    /// Outer ring; empty when the polygon carries no rings at all.
    pub fn outer(&self) -> &[GeoPoint] {
        self.rings.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn holes(&self) -> &[Ring] {
        self.rings.get(1..).unwrap_or(&[])
    }

    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }
}

/// The only shapes a zone may carry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "coordinates"))]
pub enum ZoneGeometry {
    Polygon(PolygonShape),
    MultiPolygon(Vec<PolygonShape>),
}

impl ZoneGeometry {
    /// GeoJSON type name.
    pub fn kind(&self) -> &'static str {
        match self {
            ZoneGeometry::Polygon(_) => "Polygon",
            ZoneGeometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Member polygons in order (a Polygon is a one-element view).
    pub fn polygons(&self) -> &[PolygonShape] {
        match self {
            ZoneGeometry::Polygon(p) => slice::from_ref(p),
            ZoneGeometry::MultiPolygon(ps) => ps,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.polygons().iter().map(PolygonShape::vertex_count).sum()
    }

    /// Axis-aligned bounds over the outer rings; `None` when there are no points.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut it = self.polygons().iter().flat_map(|p| p.outer().iter());
        let first = it.next()?;
        let mut bb = BoundingBox {
            min_lon: first.lon,
            min_lat: first.lat,
            max_lon: first.lon,
            max_lat: first.lat,
        };
        for pt in it {
            bb.min_lon = bb.min_lon.min(pt.lon);
            bb.min_lat = bb.min_lat.min(pt.lat);
            bb.max_lon = bb.max_lon.max(pt.lon);
            bb.max_lat = bb.max_lat.max(pt.lat);
        }
        Some(bb)
    }
}

impl From<PolygonShape> for ZoneGeometry {
    fn from(p: PolygonShape) -> Self { ZoneGeometry::Polygon(p) }
}

/// Axis-aligned bounding box in lon/lat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Closed-interval test (edges included).
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        self.min_lon <= p.lon && p.lon <= self.max_lon && self.min_lat <= p.lat && p.lat <= self.max_lat
    }

    /// True when the two boxes share any point, edges included.
    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_lon <= other.max_lon
            && other.min_lon <= self.max_lon
            && self.min_lat <= other.max_lat
            && other.min_lat <= self.max_lat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn square(x0: f64, y0: f64, side: f64) -> Ring {
        vec![
            GeoPoint::new(x0, y0),
            GeoPoint::new(x0 + side, y0),
            GeoPoint::new(x0 + side, y0 + side),
            GeoPoint::new(x0, y0 + side),
            GeoPoint::new(x0, y0),
        ]
    }

    #[test]
    fn polygon_view_and_counts() {
        let g = ZoneGeometry::Polygon(PolygonShape::new(square(0.0, 0.0, 4.0), vec![square(1.0, 1.0, 1.0)]));
        assert_eq!(g.kind(), "Polygon");
        assert_eq!(g.polygons().len(), 1);
        assert_eq!(g.polygons()[0].holes().len(), 1);
        assert_eq!(g.vertex_count(), 10);
    }

    #[test]
    fn empty_polygon_has_no_outer_and_no_bounds() {
        let p = PolygonShape::default();
        assert!(p.outer().is_empty());
        assert!(p.holes().is_empty());
        assert_eq!(ZoneGeometry::Polygon(p).bounding_box(), None);
    }

    #[test]
    fn bounding_box_spans_all_members() {
        let g = ZoneGeometry::MultiPolygon(vec![
            PolygonShape::new(square(0.0, 0.0, 1.0), vec![]),
            PolygonShape::new(square(5.0, -2.0, 1.0), vec![]),
        ]);
        let bb = g.bounding_box().unwrap();
        assert_eq!((bb.min_lon, bb.min_lat, bb.max_lon, bb.max_lat), (0.0, -2.0, 6.0, 1.0));
        assert!(bb.contains(GeoPoint::new(3.0, 0.0)));
        assert!(!bb.contains(GeoPoint::new(7.0, 0.0)));
    }

    #[test]
    fn ring_closure() {
        assert!(ring_is_closed(&square(0.0, 0.0, 1.0)));
        assert!(!ring_is_closed(&square(0.0, 0.0, 1.0)[..4]));
        assert!(!ring_is_closed(&[]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_shape_is_geojson_like() {
        let g = ZoneGeometry::Polygon(PolygonShape::new(square(0.0, 0.0, 1.0), vec![]));
        let v = serde_json::to_value(&g).unwrap();
        assert_eq!(v["type"], "Polygon");
        assert_eq!(v["coordinates"][0][1], serde_json::json!([1.0, 0.0]));
        let back: ZoneGeometry = serde_json::from_value(v).unwrap();
        assert_eq!(back, g);
    }
}
