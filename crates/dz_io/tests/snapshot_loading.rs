use std::io::Write;

use dz_core::{CoreError, EngineLimits, GeoPoint, Weekday};
use dz_io::loader::{load_snapshot_from_bytes, load_snapshot_from_path};
use dz_io::IoError;
use serde_json::json;

fn write_snapshot(v: &serde_json::Value) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("tmp");
    f.write_all(serde_json::to_string_pretty(v).unwrap().as_bytes()).unwrap();
    f
}

fn fixture() -> serde_json::Value {
    json!({
        "zones": [
            {
                "id": "downtown",
                "name": "Downtown",
                "geometry": {
                    "type": "FeatureCollection",
                    "features": [{
                        "type": "Feature",
                        "properties": {"drawnBy": "ops"},
                        "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]}
                    }]
                },
                "windows": {
                    "monday": [{"start": "09:00", "end": "11:00"}],
                    "saturday": [{"start": "10:00", "end": "14:00"}]
                }
            },
            {
                "id": "harbour",
                "name": "Harbour",
                "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[5, 5], [6, 5], [6, 6], [5, 5]]],
                    [[[8, 8], [9, 8], [9, 9], [8, 8]]]
                ]},
                "active": false
            }
        ]
    })
}

#[test]
fn loads_envelope_and_normalizes_geometry() {
    let f = write_snapshot(&fixture());
    let snap = load_snapshot_from_path(f.path(), &EngineLimits::default()).expect("load");
    assert_eq!(snap.zones.len(), 2);

    let downtown = &snap.zones[0];
    assert_eq!(downtown.id.as_str(), "downtown");
    assert_eq!(downtown.geometry.kind(), "Polygon");
    assert_eq!(downtown.geometry.polygons()[0].outer()[2], GeoPoint::new(1.0, 1.0));
    assert_eq!(downtown.windows_for(Weekday::Monday).len(), 1);
    assert!(downtown.active);

    let harbour = &snap.zones[1];
    assert_eq!(harbour.geometry.kind(), "MultiPolygon");
    assert!(!harbour.active);
    assert!(harbour.windows.is_empty());
}

#[test]
fn bare_array_and_envelope_share_a_digest() {
    let env = fixture();
    let bare = env["zones"].clone();
    let a = load_snapshot_from_bytes(env.to_string().as_bytes(), &EngineLimits::default()).unwrap();
    let b = load_snapshot_from_bytes(bare.to_string().as_bytes(), &EngineLimits::default()).unwrap();
    assert_eq!(a.digest, b.digest);
}

#[test]
fn strict_mode_fails_on_point_geometry() {
    let mut v = fixture();
    v["zones"][1]["geometry"] = json!({"type": "Point", "coordinates": [5, 5]});
    let err = load_snapshot_from_bytes(v.to_string().as_bytes(), &EngineLimits::default()).unwrap_err();
    match err {
        IoError::Zone { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(source, CoreError::InvalidGeometryKind("Point".into()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lenient_mode_skips_bad_zones() {
    let mut v = fixture();
    v["zones"][0]["windows"]["monday"][0]["end"] = json!("08:00");
    let limits = EngineLimits { lenient_snapshot: true, ..EngineLimits::default() };
    let snap = load_snapshot_from_bytes(v.to_string().as_bytes(), &limits).unwrap();
    assert_eq!(snap.zones.len(), 1);
    assert_eq!(snap.zones[0].id.as_str(), "harbour");
}

#[test]
fn schema_violation_reports_pointer() {
    let mut v = fixture();
    v["zones"][0]["active"] = json!("yes");
    match load_snapshot_from_bytes(v.to_string().as_bytes(), &EngineLimits::default()) {
        Err(IoError::Schema { .. }) => {}
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn oversized_file_is_refused() {
    let f = write_snapshot(&fixture());
    let limits = EngineLimits { max_snapshot_bytes: 64, ..EngineLimits::default() };
    assert!(matches!(load_snapshot_from_path(f.path(), &limits), Err(IoError::Limit(_))));
}

#[test]
fn invalid_json_is_a_json_error() {
    assert!(matches!(
        load_snapshot_from_bytes(b"{not json", &EngineLimits::default()),
        Err(IoError::Json { .. })
    ));
}
