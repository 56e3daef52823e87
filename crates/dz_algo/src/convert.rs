//! Bridges between `dz_core` geometry and `geo` types (x = lon, y = lat).
//! Degenerate rings (fewer than three positions) are dropped on the way in;
//! they carry no area and only confuse the boolean-ops sweep.

use dz_core::{GeoPoint, PolygonShape, ZoneGeometry};
use geo::{Coord, LineString, MultiPolygon, Polygon};

fn to_line_string(ring: &[GeoPoint]) -> LineString<f64> {
    LineString::new(ring.iter().map(|p| Coord { x: p.lon, y: p.lat }).collect())
}

fn from_line_string(ls: &LineString<f64>) -> Vec<GeoPoint> {
    ls.coords().map(|c| GeoPoint::new(c.x, c.y)).collect()
}

fn to_polygon(shape: &PolygonShape) -> Option<Polygon<f64>> {
    if shape.outer().len() < 3 {
        return None;
    }
    let holes = shape
        .holes()
        .iter()
        .filter(|h| h.len() >= 3)
        .map(|h| to_line_string(h))
        .collect();
    // Polygon::new closes open rings.
    Some(Polygon::new(to_line_string(shape.outer()), holes))
}

pub(crate) fn to_multi_polygon(g: &ZoneGeometry) -> MultiPolygon<f64> {
    MultiPolygon::new(g.polygons().iter().filter_map(to_polygon).collect())
}

/// `None` when `mp` has no polygon with a usable exterior.
pub(crate) fn from_multi_polygon(mp: MultiPolygon<f64>) -> Option<ZoneGeometry> {
    let mut shapes: Vec<PolygonShape> = mp
        .0
        .iter()
        .filter(|p| p.exterior().0.len() >= 4)
        .map(|p| {
            PolygonShape::new(
                from_line_string(p.exterior()),
                p.interiors().iter().map(from_line_string).collect(),
            )
        })
        .collect();
    match shapes.len() {
        0 => None,
        1 => shapes.pop().map(ZoneGeometry::Polygon),
        _ => Some(ZoneGeometry::MultiPolygon(shapes)),
    }
}
