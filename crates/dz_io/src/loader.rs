//! Loader: read a zone snapshot (bytes or local file), validate it against the
//! embedded schema, normalize every geometry and window, enforce
//! `EngineLimits`, and return a typed `ZoneSnapshot` with its digest.
//! No network I/O.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use dz_core::{
    CoreError, EngineLimits, SnapshotId, TimeInterval, Weekday, WeeklyWindows, Zone, ZoneGeometry, ZoneId,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{hasher, normalize, schema, IoError};

/// Loaded, normalized snapshot. `digest` covers `zones` exactly as returned
/// (after any lenient skips).
#[derive(Debug, Clone)]
pub struct ZoneSnapshot {
    pub zones: Vec<Zone>,
    pub digest: SnapshotId,
}

/// Wire-level window before time parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWindow {
    pub start: String,
    pub end: String,
}

// Geometry stays a raw Value so the normalizer sees the whole payload.
#[derive(Debug, Deserialize)]
struct RawZone {
    id: String,
    name: String,
    geometry: Value,
    #[serde(default)]
    windows: BTreeMap<String, Vec<RawWindow>>,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

// ----------------------------- Entry points -----------------------------

pub fn load_snapshot_from_path(path: &Path, limits: &EngineLimits) -> Result<ZoneSnapshot, IoError> {
    let bytes = read_bytes_with_limit(path, limits.max_snapshot_bytes)?;
    load_snapshot_from_bytes(&bytes, limits)
}

pub fn load_snapshot_from_bytes(bytes: &[u8], limits: &EngineLimits) -> Result<ZoneSnapshot, IoError> {
    if bytes.len() as u64 > limits.max_snapshot_bytes {
        return Err(IoError::Limit(format!(
            "snapshot is {} bytes, cap is {}",
            bytes.len(),
            limits.max_snapshot_bytes
        )));
    }
    let v: Value = serde_json::from_slice(bytes)?;
    tracing::debug!(bytes = bytes.len(), "snapshot read");
    load_snapshot_from_value(&v, limits)
}

/// Accepts a bare array of zone records or `{"zones": [...]}`.
pub fn load_snapshot_from_value(v: &Value, limits: &EngineLimits) -> Result<ZoneSnapshot, IoError> {
    limits.validate_domains()?;
    schema::validate_snapshot_value(v)?;

    let (entries, base) = match v {
        Value::Array(a) => (a, ""),
        Value::Object(o) => match o.get("zones").and_then(Value::as_array) {
            Some(a) => (a, "/zones"),
            None => {
                return Err(IoError::Json { pointer: "/zones".into(), msg: "expected an array of zones".into() })
            }
        },
        _ => return Err(IoError::Json { pointer: "/".into(), msg: "expected an array or object".into() }),
    };
    if entries.len() > limits.max_zones {
        return Err(IoError::Limit(format!("{} zones, cap is {}", entries.len(), limits.max_zones)));
    }

    let mut zones = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let raw: RawZone = serde_json::from_value(entry.clone())
            .map_err(|e| IoError::Json { pointer: format!("{base}/{index}"), msg: e.to_string() })?;
        match zone_from_raw(raw, limits) {
            Ok(zone) => zones.push(zone),
            Err(source) if limits.lenient_snapshot => {
                tracing::warn!(index, error = %source, "skipping zone in lenient snapshot");
            }
            Err(source) => return Err(IoError::Zone { index, source }),
        }
    }

    let digest = hasher::snapshot_id(&zones)?;
    tracing::debug!(zones = zones.len(), digest = %digest, "snapshot loaded");
    Ok(ZoneSnapshot { zones, digest })
}

// ----------------------------- Per-zone normalization -----------------------------

fn zone_from_raw(raw: RawZone, limits: &EngineLimits) -> Result<Zone, CoreError> {
    let id = ZoneId::try_from(raw.id)?;
    let geometry = normalize::normalize_geometry(&raw.geometry)?;
    check_geometry_caps(&geometry, limits)?;
    let windows = parse_windows(&raw.windows)?;
    Ok(Zone { id, name: raw.name, geometry, windows, active: raw.active })
}

fn check_geometry_caps(g: &ZoneGeometry, limits: &EngineLimits) -> Result<(), CoreError> {
    if g.polygons().len() > limits.max_polygons_per_zone {
        return Err(CoreError::DomainOutOfRange("max_polygons_per_zone"));
    }
    let too_long = g
        .polygons()
        .iter()
        .flat_map(|p| p.rings.iter())
        .any(|r| r.len() > limits.max_vertices_per_ring);
    if too_long {
        return Err(CoreError::DomainOutOfRange("max_vertices_per_ring"));
    }
    Ok(())
}

/// Parse wire windows: weekday keys (case-insensitive) and `"HH:MM"` pairs.
/// Fails with `UnknownWeekday` or `MalformedInterval`. Entry order within a
/// day is preserved; days with an empty list are kept.
pub fn parse_windows(raw: &BTreeMap<String, Vec<RawWindow>>) -> Result<WeeklyWindows, CoreError> {
    let mut out = WeeklyWindows::new();
    for (key, list) in raw {
        let day: Weekday = key.parse()?;
        let parsed = list
            .iter()
            .map(|w| TimeInterval::parse(&w.start, &w.end))
            .collect::<Result<Vec<_>, _>>()?;
        out.entry(day).or_default().extend(parsed);
    }
    Ok(out)
}

// ----------------------------- Helpers -----------------------------

fn read_bytes_with_limit(path: &Path, cap: u64) -> Result<Vec<u8>, IoError> {
    let f = File::open(path).map_err(|e| IoError::Read(format!("{}: {e}", path.display())))?;
    let mut buf = Vec::new();
    // Read one byte past the cap so oversize files are detected without reading them whole.
    f.take(cap.saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() as u64 > cap {
        return Err(IoError::Limit(format!("{} exceeds {cap} bytes", path.display())));
    }
    Ok(buf)
}
