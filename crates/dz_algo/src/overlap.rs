//! crates/dz_algo/src/overlap.rs
//! OverlapDetector: does a candidate shape partially overlap an existing zone?
//!
//! Contract:
//! - Overlap means the interiors share a region of positive area.
//! - Strict containment (one shape entirely inside the other, not equal) is NOT
//!   reported. Topologically equal shapes ARE reported.
//! - Touching along an edge or at a vertex is not an overlap.
//! - Symmetric: `shapes_overlap(a, b) == shapes_overlap(b, a)`.
//! - Inactive zones take part; `active` is not consulted.

use dz_core::{Zone, ZoneGeometry};
use geo::coordinate_position::CoordPos;
use geo::dimensions::Dimensions;
use geo::{MultiPolygon, Relate};

use crate::convert::to_multi_polygon;

/// Pairwise test; see module contract.
pub fn shapes_overlap(a: &ZoneGeometry, b: &ZoneGeometry) -> bool {
    match (a.bounding_box(), b.bounding_box()) {
        (Some(ba), Some(bb)) if ba.intersects(&bb) => {}
        _ => return false,
    }
    relate_overlap(&to_multi_polygon(a), &to_multi_polygon(b))
}

/// Indices into `existing` (input order) of zones the candidate overlaps.
pub fn overlapping_zones(candidate: &ZoneGeometry, existing: &[Zone]) -> Vec<usize> {
    let Some(cand_bb) = candidate.bounding_box() else {
        return Vec::new();
    };
    let cand = to_multi_polygon(candidate);
    existing
        .iter()
        .enumerate()
        .filter(|(_, z)| z.geometry.bounding_box().is_some_and(|bb| bb.intersects(&cand_bb)))
        .filter(|(_, z)| relate_overlap(&cand, &to_multi_polygon(&z.geometry)))
        .map(|(i, _)| i)
        .collect()
}

fn relate_overlap(a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> bool {
    if a.0.is_empty() || b.0.is_empty() {
        return false;
    }
    let im = a.relate(b);
    if im.get(CoordPos::Inside, CoordPos::Inside) != Dimensions::TwoDimensional {
        return false;
    }
    // Both-within means equal; exactly one means strict containment.
    im.is_within() == im.is_contains()
}
