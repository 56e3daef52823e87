//! crates/dz_core/src/variables.rs
//! Engine configuration: snapshot loader caps with safe defaults.
//! Missing keys on the wire keep their defaults; `validate_domains` rejects zero caps.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const DEFAULT_MAX_SNAPSHOT_BYTES: u64 = 8 * 1024 * 1024;
pub const DEFAULT_MAX_ZONES: usize = 10_000;
pub const DEFAULT_MAX_POLYGONS_PER_ZONE: usize = 256;
pub const DEFAULT_MAX_VERTICES_PER_RING: usize = 100_000;

/// Caps applied while loading a zone snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EngineLimits {
    pub max_snapshot_bytes: u64,
    pub max_zones: usize,
    pub max_polygons_per_zone: usize,
    pub max_vertices_per_ring: usize,
    /// Skip zones whose geometry or windows fail to parse (with a warning) instead of failing the load.
    pub lenient_snapshot: bool,
}

impl Default for EngineLimits {
    fn default() -> Self {
        EngineLimits {
            max_snapshot_bytes: DEFAULT_MAX_SNAPSHOT_BYTES,
            max_zones: DEFAULT_MAX_ZONES,
            max_polygons_per_zone: DEFAULT_MAX_POLYGONS_PER_ZONE,
            max_vertices_per_ring: DEFAULT_MAX_VERTICES_PER_RING,
            lenient_snapshot: false,
        }
    }
}

impl EngineLimits {
    pub fn validate_domains(&self) -> Result<(), CoreError> {
        if self.max_snapshot_bytes == 0 {
            return Err(CoreError::DomainOutOfRange("max_snapshot_bytes"));
        }
        if self.max_zones == 0 {
            return Err(CoreError::DomainOutOfRange("max_zones"));
        }
        if self.max_polygons_per_zone == 0 {
            return Err(CoreError::DomainOutOfRange("max_polygons_per_zone"));
        }
        // A closed ring needs at least four positions.
        if self.max_vertices_per_ring < 4 {
            return Err(CoreError::DomainOutOfRange("max_vertices_per_ring"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(EngineLimits::default().validate_domains().is_ok());
    }

    #[test]
    fn zero_caps_rejected() {
        let l = EngineLimits { max_zones: 0, ..EngineLimits::default() };
        assert_eq!(l.validate_domains(), Err(CoreError::DomainOutOfRange("max_zones")));
        let l = EngineLimits { max_vertices_per_ring: 3, ..EngineLimits::default() };
        assert_eq!(l.validate_domains(), Err(CoreError::DomainOutOfRange("max_vertices_per_ring")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_keeps_defaults() {
        let l: EngineLimits = serde_json::from_str(r#"{"max_zones": 50}"#).unwrap();
        assert_eq!(l.max_zones, 50);
        assert_eq!(l.max_snapshot_bytes, DEFAULT_MAX_SNAPSHOT_BYTES);
        assert!(serde_json::from_str::<EngineLimits>(r#"{"max_zonez": 50}"#).is_err());
    }
}
