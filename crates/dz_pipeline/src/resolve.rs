//! EligibilityResolver: which active zones cover a point, and when can they deliver.
//!
//! Pure function of `(point, zones, day)`; never fails. Zones are taken as the
//! caller's current snapshot and never cached.

use dz_algo::{merge_weekly, point_in_geometry};
use dz_core::{GeoPoint, Weekday, WeeklyWindows, Zone};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub is_eligible: bool,
    /// Matching active zones in snapshot order.
    pub matching_zones: Vec<Zone>,
    /// Empty when not eligible; otherwise all seven weekdays, possibly with empty lists.
    pub merged_windows: WeeklyWindows,
    /// First matching zone.
    pub primary_zone: Option<Zone>,
    /// The day asked about.
    pub day: Weekday,
}

impl EligibilityResult {
    fn ineligible(day: Weekday) -> Self {
        EligibilityResult {
            is_eligible: false,
            matching_zones: Vec::new(),
            merged_windows: WeeklyWindows::new(),
            primary_zone: None,
            day,
        }
    }

    /// Merged windows for `day` (empty slice when none).
    pub fn windows_on(&self, day: Weekday) -> &[dz_core::TimeInterval] {
        self.merged_windows.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Covered, and the requested day has at least one window.
    pub fn deliverable_on_requested_day(&self) -> bool {
        self.is_eligible && !self.windows_on(self.day).is_empty()
    }
}

pub fn resolve(point: GeoPoint, zones: &[Zone], day: Weekday) -> EligibilityResult {
    let inactive = zones.iter().filter(|z| !z.active).count();
    if inactive > 0 {
        tracing::trace!(inactive, "inactive zones skipped");
    }

    let matching: Vec<Zone> = zones
        .iter()
        .filter(|z| z.active && point_in_geometry(point, &z.geometry))
        .cloned()
        .collect();

    let Some(primary) = matching.first().cloned() else {
        tracing::debug!(lon = point.lon, lat = point.lat, %day, matched = 0, "point not covered");
        return EligibilityResult::ineligible(day);
    };

    let schedules: Vec<&WeeklyWindows> = matching.iter().map(|z| &z.windows).collect();
    let merged_windows = merge_weekly(&schedules);
    tracing::debug!(
        %day,
        matched = matching.len(),
        primary = %primary.id,
        "point covered"
    );

    EligibilityResult {
        is_eligible: true,
        matching_zones: matching,
        merged_windows,
        primary_zone: Some(primary),
        day,
    }
}
