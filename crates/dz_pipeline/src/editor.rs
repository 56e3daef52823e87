//! Zone-editor flow: an operator uploads a shape, sees which existing zones it
//! overlaps, and may merge two shapes into one.

use dz_algo::{merge_geometries, overlapping_zones};
use dz_core::{Zone, ZoneGeometry, ZoneId};
use dz_io::normalize::normalize_geometry;
use serde::Serialize;
use serde_json::Value;

use crate::PipelineError;

/// One existing zone the uploaded shape overlaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapConflict {
    /// Position in the `existing` slice.
    pub index: usize,
    pub zone_id: ZoneId,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReview {
    pub geometry: ZoneGeometry,
    pub conflicts: Vec<OverlapConflict>,
}

impl UploadReview {
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Normalize an uploaded payload and list the zones it overlaps.
pub fn review_upload(payload: &Value, existing: &[Zone]) -> Result<UploadReview, PipelineError> {
    review(payload, existing, None)
}

/// As `review_upload`, for a redraw of `editing`: that zone never conflicts with itself.
pub fn review_edit(payload: &Value, existing: &[Zone], editing: &ZoneId) -> Result<UploadReview, PipelineError> {
    review(payload, existing, Some(editing))
}

fn review(payload: &Value, existing: &[Zone], skip: Option<&ZoneId>) -> Result<UploadReview, PipelineError> {
    let geometry = normalize_geometry(payload).map_err(|e| {
        tracing::warn!(error = %e, "upload rejected");
        PipelineError::from(e)
    })?;

    let conflicts: Vec<OverlapConflict> = overlapping_zones(&geometry, existing)
        .into_iter()
        .map(|index| (index, &existing[index]))
        .filter(|(_, z)| Some(&z.id) != skip)
        .map(|(index, z)| OverlapConflict { index, zone_id: z.id.clone(), name: z.name.clone(), active: z.active })
        .collect();

    if !conflicts.is_empty() {
        let ids: Vec<&str> = conflicts.iter().map(|c| c.zone_id.as_str()).collect();
        tracing::info!(count = conflicts.len(), zones = ?ids, "upload overlaps existing zones");
    }
    Ok(UploadReview { geometry, conflicts })
}

/// ZoneMerger for the editor. Inputs are untouched.
pub fn merge_zone_geometries(a: &ZoneGeometry, b: &ZoneGeometry) -> Result<ZoneGeometry, PipelineError> {
    Ok(merge_geometries(a, b)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rect_json(x0: f64, y0: f64, x1: f64, y1: f64) -> Value {
        json!({"type": "Polygon", "coordinates": [[[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]]]})
    }

    fn zone(id: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> Zone {
        Zone::new(id.parse().unwrap(), id.to_uppercase(), normalize_geometry(&rect_json(x0, y0, x1, y1)).unwrap())
    }

    #[test]
    fn point_upload_is_rejected() {
        let err = review_upload(&json!({"type": "Point", "coordinates": [0, 0]}), &[]).unwrap_err();
        assert_eq!(err, PipelineError::InvalidGeometry("Point".into()));
    }

    #[test]
    fn conflicts_carry_zone_details() {
        let existing = vec![zone("a", 0.0, 0.0, 2.0, 2.0), zone("b", 10.0, 10.0, 11.0, 11.0).with_active(false)];
        let payload = json!({"type": "Feature", "geometry": rect_json(1.0, 1.0, 3.0, 3.0)});
        let review = review_upload(&payload, &existing).unwrap();
        assert!(!review.is_clean());
        assert_eq!(
            review.conflicts,
            vec![OverlapConflict { index: 0, zone_id: "a".parse().unwrap(), name: "A".into(), active: true }]
        );
    }

    #[test]
    fn inactive_zones_still_conflict() {
        let existing = vec![zone("old", 0.0, 0.0, 2.0, 2.0).with_active(false)];
        let review = review_upload(&rect_json(1.0, 1.0, 3.0, 3.0), &existing).unwrap();
        assert_eq!(review.conflicts.len(), 1);
        assert!(!review.conflicts[0].active);
    }

    #[test]
    fn editing_a_zone_skips_itself() {
        let existing = vec![zone("a", 0.0, 0.0, 2.0, 2.0), zone("b", 1.5, 0.0, 4.0, 2.0)];
        let redraw = rect_json(0.0, 0.0, 2.0, 2.0);
        let as_new = review_upload(&redraw, &existing).unwrap();
        assert_eq!(as_new.conflicts.iter().map(|c| c.index).collect::<Vec<_>>(), vec![0, 1]);
        let as_edit = review_edit(&redraw, &existing, &"a".parse().unwrap()).unwrap();
        assert_eq!(as_edit.conflicts.iter().map(|c| c.index).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn merge_wraps_errors() {
        let a = zone("a", 0.0, 0.0, 1.0, 1.0).geometry;
        let b = zone("b", 0.5, 0.0, 2.0, 1.0).geometry;
        assert_eq!(merge_zone_geometries(&a, &b).unwrap().kind(), "Polygon");
        let empty = ZoneGeometry::MultiPolygon(vec![]);
        assert!(matches!(merge_zone_geometries(&empty, &empty), Err(PipelineError::Merge(_))));
    }
}
