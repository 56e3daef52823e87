//! Embedded Draft 2020-12 schema for zone snapshots, and the validator wrapper.
//!
//! The schema checks envelope structure only. Geometry is left as an open
//! object (GeometryNormalizer owns that) and window strings are parsed later.

use serde_json::Value;

use crate::IoError;

pub const SNAPSHOT_SCHEMA_JSON: &str = r##"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "$id": "urn:dz:zone-snapshot",
  "$defs": {
    "window": {
      "type": "object",
      "required": ["start", "end"],
      "properties": {
        "start": { "type": "string" },
        "end":   { "type": "string" }
      }
    },
    "zone": {
      "type": "object",
      "required": ["id", "name", "geometry"],
      "properties": {
        "id":       { "type": "string", "minLength": 1 },
        "name":     { "type": "string" },
        "geometry": { "type": "object" },
        "windows":  {
          "type": "object",
          "additionalProperties": { "type": "array", "items": { "$ref": "#/$defs/window" } }
        },
        "active":   { "type": "boolean" }
      }
    },
    "zones": { "type": "array", "items": { "$ref": "#/$defs/zone" } }
  },
  "oneOf": [
    { "$ref": "#/$defs/zones" },
    {
      "type": "object",
      "required": ["zones"],
      "properties": { "zones": { "$ref": "#/$defs/zones" } }
    }
  ]
}"##;

/// Validate a parsed snapshot against the embedded schema. Reports the first
/// violation with its instance pointer.
#[cfg(feature = "schemaval")]
pub fn validate_snapshot_value(v: &Value) -> Result<(), IoError> {
    use jsonschema::{Draft, JSONSchema};

    let schema_v: Value = serde_json::from_str(SNAPSHOT_SCHEMA_JSON).map_err(|e| IoError::Schema {
        pointer: "/".into(),
        msg: format!("invalid embedded snapshot schema: {e}"),
    })?;
    let compiled = JSONSchema::options()
        .with_draft(Draft::Draft202012)
        .compile(&schema_v)
        .map_err(|e| IoError::Schema { pointer: "/".into(), msg: format!("schema compile error: {e}") })?;
    if let Err(errors) = compiled.validate(v) {
        if let Some(err) = errors.into_iter().next() {
            let ptr = err.instance_path.to_string();
            return Err(IoError::Schema {
                pointer: if ptr.is_empty() { "/".into() } else { ptr },
                msg: err.to_string(),
            });
        }
    }
    Ok(())
}

/// Schema validation compiled out; typed parsing still rejects bad shapes.
#[cfg(not(feature = "schemaval"))]
pub fn validate_snapshot_value(_v: &Value) -> Result<(), IoError> {
    Ok(())
}

#[cfg(all(test, feature = "schemaval"))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_both_envelopes() {
        let zone = json!({"id": "z1", "name": "A", "geometry": {"type": "Polygon", "coordinates": []}});
        assert!(validate_snapshot_value(&json!([zone.clone()])).is_ok());
        assert!(validate_snapshot_value(&json!({"zones": [zone]})).is_ok());
        assert!(validate_snapshot_value(&json!([])).is_ok());
    }

    #[test]
    fn rejects_missing_fields_and_wrong_types() {
        let missing_geom = json!([{"id": "z1", "name": "A"}]);
        let bad_window = json!([{
            "id": "z1", "name": "A", "geometry": {},
            "windows": {"monday": [{"start": "09:00"}]}
        }]);
        let bad_active = json!([{"id": "z1", "name": "A", "geometry": {}, "active": "yes"}]);
        for v in [missing_geom, bad_window, bad_active, json!("zones")] {
            assert!(matches!(validate_snapshot_value(&v), Err(IoError::Schema { .. })));
        }
    }
}
