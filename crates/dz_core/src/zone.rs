//! crates/dz_core/src/zone.rs
//! Zone record as handed to the engine on every call (never cached or mutated here).

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::ZoneGeometry;
use crate::ids::ZoneId;
use crate::schedule::{TimeInterval, WeeklyWindows, Weekday};

/// Operator-defined delivery area with a recurring weekly schedule.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub geometry: ZoneGeometry,
    #[cfg_attr(feature = "serde", serde(default))]
    pub windows: WeeklyWindows,
    /// Inactive zones are skipped by eligibility but still seen by overlap checks.
    #[cfg_attr(feature = "serde", serde(default = "default_active"))]
    pub active: bool,
}

#[cfg(feature = "serde")]
fn default_active() -> bool {
    true
}

impl Zone {
    pub fn new(id: ZoneId, name: impl Into<String>, geometry: ZoneGeometry) -> Self {
        Zone { id, name: name.into(), geometry, windows: WeeklyWindows::new(), active: true }
    }

    /// Builder-style helper used by callers assembling snapshots in memory.
    pub fn with_window(mut self, day: Weekday, iv: TimeInterval) -> Self {
        self.windows.entry(day).or_default().push(iv);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Windows configured for `day` (empty slice when none).
    pub fn windows_for(&self, day: Weekday) -> &[TimeInterval] {
        self.windows.get(&day).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GeoPoint, PolygonShape};
    use alloc::vec;

    fn unit_square() -> ZoneGeometry {
        ZoneGeometry::Polygon(PolygonShape::new(
            vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(1.0, 0.0),
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(0.0, 1.0),
                GeoPoint::new(0.0, 0.0),
            ],
            vec![],
        ))
    }

    #[test]
    fn windows_for_missing_day_is_empty() {
        let z = Zone::new("z1".parse().unwrap(), "Centre", unit_square())
            .with_window(Weekday::Monday, TimeInterval::parse("09:00", "11:00").unwrap());
        assert_eq!(z.windows_for(Weekday::Monday).len(), 1);
        assert!(z.windows_for(Weekday::Sunday).is_empty());
        assert!(z.active);
        assert!(!z.clone().with_active(false).active);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn active_defaults_to_true_on_the_wire() {
        let z: Zone = serde_json::from_value(serde_json::json!({
            "id": "z9",
            "name": "North",
            "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}
        }))
        .unwrap();
        assert!(z.active);
        assert!(z.windows.is_empty());
    }
}
