//! crates/dz_io/src/normalize.rs
//! GeometryNormalizer: reduce an arbitrary GeoJSON-ish payload to a zone shape.
//!
//! Envelopes are peeled until a bare shape is reached:
//! `FeatureCollection` → first feature, `Feature` → its geometry,
//! `GeometryCollection` → first geometry. Later collection members are never
//! looked at. Polygon/MultiPolygon coordinates are kept verbatim (ring order,
//! point order, no closing or repair); a third ordinate is dropped.

use dz_core::{CoreError, GeoPoint, PolygonShape, Ring, ZoneGeometry};
use serde_json::Value;

/// Tagged result of looking at a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryClass {
    Polygon(PolygonShape),
    MultiPolygon(Vec<PolygonShape>),
    /// Anything else; `kind` names what was found (e.g. `"Point"`).
    Unsupported { kind: String },
}

/// Classify a payload without failing.
pub fn classify(payload: &Value) -> GeometryClass {
    let Some(obj) = payload.as_object() else {
        return unsupported(json_kind(payload));
    };
    let Some(kind) = obj.get("type").and_then(Value::as_str) else {
        return unsupported("<missing type>");
    };
    match kind {
        "FeatureCollection" => match first_member(obj.get("features")) {
            Some(feature) => classify(feature),
            None => unsupported("FeatureCollection (empty)"),
        },
        "Feature" => match obj.get("geometry") {
            Some(g) if !g.is_null() => classify(g),
            _ => unsupported("Feature (no geometry)"),
        },
        "GeometryCollection" => match first_member(obj.get("geometries")) {
            Some(g) => classify(g),
            None => unsupported("GeometryCollection (empty)"),
        },
        "Polygon" => match obj.get("coordinates").and_then(parse_polygon) {
            Some(p) => GeometryClass::Polygon(p),
            None => unsupported("Polygon (malformed coordinates)"),
        },
        "MultiPolygon" => {
            let polys = obj
                .get("coordinates")
                .and_then(Value::as_array)
                .and_then(|arr| arr.iter().map(parse_polygon).collect::<Option<Vec<_>>>());
            match polys {
                Some(ps) => GeometryClass::MultiPolygon(ps),
                None => unsupported("MultiPolygon (malformed coordinates)"),
            }
        }
        other => unsupported(other),
    }
}

/// Polygon/MultiPolygon as a `ZoneGeometry`, anything else `InvalidGeometryKind`.
pub fn normalize_geometry(payload: &Value) -> Result<ZoneGeometry, CoreError> {
    match classify(payload) {
        GeometryClass::Polygon(p) => Ok(ZoneGeometry::Polygon(p)),
        GeometryClass::MultiPolygon(ps) => Ok(ZoneGeometry::MultiPolygon(ps)),
        GeometryClass::Unsupported { kind } => Err(CoreError::InvalidGeometryKind(kind)),
    }
}

fn unsupported(kind: &str) -> GeometryClass {
    GeometryClass::Unsupported { kind: kind.to_string() }
}

fn first_member(v: Option<&Value>) -> Option<&Value> {
    v.and_then(Value::as_array).and_then(|a| a.first())
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "<null>",
        Value::Bool(_) => "<boolean>",
        Value::Number(_) => "<number>",
        Value::String(_) => "<string>",
        Value::Array(_) => "<array>",
        Value::Object(_) => "<object>",
    }
}

fn parse_position(v: &Value) -> Option<GeoPoint> {
    let arr = v.as_array()?;
    if arr.len() < 2 {
        return None;
    }
    Some(GeoPoint::new(arr[0].as_f64()?, arr[1].as_f64()?))
}

fn parse_ring(v: &Value) -> Option<Ring> {
    v.as_array()?.iter().map(parse_position).collect()
}

/// At least one ring (the outer one) is required.
fn parse_polygon(v: &Value) -> Option<PolygonShape> {
    let rings = v.as_array()?.iter().map(parse_ring).collect::<Option<Vec<Ring>>>()?;
    if rings.is_empty() {
        return None;
    }
    Some(PolygonShape { rings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square() -> Value {
        json!([[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]])
    }

    #[test]
    fn bare_polygon_kept_verbatim() {
        let g = normalize_geometry(&json!({"type": "Polygon", "coordinates": square()})).unwrap();
        let poly = &g.polygons()[0];
        assert_eq!(g.kind(), "Polygon");
        assert_eq!(poly.outer().len(), 5);
        assert_eq!(poly.outer()[1], GeoPoint::new(1.0, 0.0));
    }

    #[test]
    fn feature_collection_takes_first_feature_only() {
        let payload = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {"type": "Polygon", "coordinates": square()}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0, 0]}},
                "garbage that is never inspected"
            ]
        });
        assert!(matches!(classify(&payload), GeometryClass::Polygon(_)));
    }

    #[test]
    fn nested_envelopes_unwrap_to_first_shape() {
        let payload = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "MultiPolygon", "coordinates": [square(), square()]},
                        {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
                    ]
                }
            }]
        });
        let g = normalize_geometry(&payload).unwrap();
        assert_eq!(g.kind(), "MultiPolygon");
        assert_eq!(g.polygons().len(), 2);
    }

    #[test]
    fn first_member_decides_even_when_later_ones_are_valid() {
        let payload = json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [0, 0]},
                {"type": "Polygon", "coordinates": square()}
            ]
        });
        assert_eq!(
            normalize_geometry(&payload),
            Err(CoreError::InvalidGeometryKind("Point".into()))
        );
    }

    #[test]
    fn unsupported_kinds_rejected() {
        for (payload, kind) in [
            (json!({"type": "Point", "coordinates": [1, 2]}), "Point"),
            (json!({"type": "LineString", "coordinates": [[0, 0], [1, 1]]}), "LineString"),
            (json!({"type": "FeatureCollection", "features": []}), "FeatureCollection (empty)"),
            (json!({"type": "Feature", "geometry": null}), "Feature (no geometry)"),
            (json!({"coordinates": []}), "<missing type>"),
            (json!([1, 2, 3]), "<array>"),
        ] {
            assert_eq!(classify(&payload), GeometryClass::Unsupported { kind: kind.into() });
        }
    }

    #[test]
    fn malformed_positions_rejected() {
        let short = json!({"type": "Polygon", "coordinates": [[[0], [1, 0], [1, 1], [0, 0]]]});
        let text = json!({"type": "Polygon", "coordinates": [[["0", "0"], [1, 0], [1, 1], [0, 0]]]});
        let no_rings = json!({"type": "Polygon", "coordinates": []});
        for p in [short, text, no_rings] {
            assert!(matches!(normalize_geometry(&p), Err(CoreError::InvalidGeometryKind(_))));
        }
    }

    #[test]
    fn altitude_is_dropped_and_open_rings_are_not_repaired() {
        let p = json!({"type": "Polygon", "coordinates": [[[0, 0, 12.5], [1, 0, 3], [1, 1, 0]]]});
        let g = normalize_geometry(&p).unwrap();
        assert_eq!(g.polygons()[0].outer(), &[
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(1.0, 1.0),
        ]);
    }

    #[test]
    fn empty_multipolygon_is_accepted_here() {
        let g = normalize_geometry(&json!({"type": "MultiPolygon", "coordinates": []})).unwrap();
        assert!(g.polygons().is_empty());
    }
}
