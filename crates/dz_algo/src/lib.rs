// crates/dz_algo/src/lib.rs
#![forbid(unsafe_code)]

//! Pure, deterministic algorithms over `dz_core` types. No I/O, no shared state.
//!
//! - `containment`: even-odd ray casting (EligibilityResolver step 2)
//! - `overlap`    : OverlapDetector
//! - `union`      : ZoneMerger
//! - `windows`    : WindowMerger

pub mod containment;
pub mod overlap;
pub mod union;
pub mod windows;

mod convert;

// Tight, explicit re-exports (avoid wildcard export drift).
pub use containment::{point_in_geometry, point_in_polygon, point_in_ring};
pub use overlap::{overlapping_zones, shapes_overlap};
pub use union::{merge_geometries, MergeError};
pub use windows::{merge_weekly, merge_window_strs, merge_windows};
