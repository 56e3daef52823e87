//! dz_core: Core types for the delivery-zone engine.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! engine (`dz_algo`, `dz_io`, `dz_pipeline`):
//!
//! - Zone identifiers and snapshot digests (`ZoneId`, `SnapshotId`)
//! - Geometry: `GeoPoint`, `Ring`, `PolygonShape`, `ZoneGeometry`
//! - Weekly schedule: `Weekday`, `TimeOfDay`, `TimeInterval`, `WeeklyWindows`
//! - `Zone` records as handed in by the persistence collaborator
//! - `EngineLimits` (loader caps with safe defaults)
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod errors {
    use alloc::string::String;
    use core::fmt;

    /// Domain error set for parsing and validating core values.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum CoreError {
        InvalidId,
        /// No Polygon/MultiPolygon could be extracted; carries the kind that was found.
        InvalidGeometryKind(String),
        /// `{start, end}` with `start >= end`, or an unparsable time string.
        MalformedInterval(String),
        UnknownWeekday(String),
        DomainOutOfRange(&'static str),
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidId => write!(f, "invalid id"),
                CoreError::InvalidGeometryKind(k) => {
                    write!(f, "invalid geometry kind: {k} (expected Polygon or MultiPolygon)")
                }
                CoreError::MalformedInterval(d) => write!(f, "malformed interval: {d}"),
                CoreError::UnknownWeekday(t) => write!(f, "unknown weekday: {t}"),
                CoreError::DomainOutOfRange(k) => write!(f, "domain out of range: {k}"),
            }
        }
    }

    #[cfg(feature = "std")]
    impl std::error::Error for CoreError {}
}

pub mod ids;
pub mod geometry;
pub mod schedule;
pub mod zone;
pub mod variables;

// Flat re-exports for the types every downstream crate touches.
pub use errors::CoreError;
pub use geometry::{GeoPoint, PolygonShape, Ring, ZoneGeometry};
pub use ids::{SnapshotId, ZoneId};
pub use schedule::{TimeInterval, TimeOfDay, WeeklyWindows, Weekday};
pub use variables::EngineLimits;
pub use zone::Zone;
