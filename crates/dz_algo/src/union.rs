//! crates/dz_algo/src/union.rs
//! ZoneMerger: geometric union of two zone shapes.
//!
//! Contract:
//! - Result covers every point inside `a` or `b`, and nothing else.
//! - A single connected region comes back as `Polygon`; disjoint regions as `MultiPolygon`.
//! - Inputs are never modified.
//! - An empty union (both inputs degenerate) is `MergeError::EmptyUnion`.

use dz_core::ZoneGeometry;
use geo::BooleanOps;

use crate::convert::{from_multi_polygon, to_multi_polygon};

/// Errors that can occur while merging geometries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Neither input contributed any area.
    EmptyUnion,
}

impl core::fmt::Display for MergeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MergeError::EmptyUnion => write!(f, "union of the two shapes is empty"),
        }
    }
}

impl std::error::Error for MergeError {}

pub fn merge_geometries(a: &ZoneGeometry, b: &ZoneGeometry) -> Result<ZoneGeometry, MergeError> {
    let ga = to_multi_polygon(a);
    let gb = to_multi_polygon(b);
    let merged = match (ga.0.is_empty(), gb.0.is_empty()) {
        (true, true) => return Err(MergeError::EmptyUnion),
        // Skip the sweep when one side is empty.
        (false, true) => ga,
        (true, false) => gb,
        (false, false) => ga.union(&gb),
    };
    from_multi_polygon(merged).ok_or(MergeError::EmptyUnion)
}
