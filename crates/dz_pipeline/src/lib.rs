//! dz_pipeline: the engine surface callers use (resolve → schedule queries;
//! upload → review → merge; save-time validation).
//! Stays free of direct file handling: JSON/limits/digests go through `dz_io`,
//! geometry and window math through `dz_algo`.

#![forbid(unsafe_code)]

use core::fmt;
use std::path::Path;

use dz_core::{CoreError, EngineLimits};
use dz_io::loader::ZoneSnapshot;

pub mod editor;
pub mod resolve;
pub mod schedule;
pub mod validate;

pub use editor::{merge_zone_geometries, review_edit, review_upload, OverlapConflict, UploadReview};
pub use resolve::{resolve, EligibilityResult};
pub use schedule::{deliverable_at, next_delivery_window};
pub use validate::{validate_zones, EntityRef, Severity, ValidationIssue, ValidationReport};

/// Single error surface for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Reading the snapshot or config failed, or a cap was hit.
    Io(String),
    /// JSON was unparsable or failed the snapshot schema.
    Schema(String),
    /// Payload did not reduce to a Polygon or MultiPolygon.
    InvalidGeometry(String),
    /// A `{start, end}` pair or weekday key could not be parsed.
    MalformedInterval(String),
    /// `EngineLimits` out of domain.
    Config(String),
    /// ZoneMerger failure.
    Merge(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Io(m) => write!(f, "io: {m}"),
            PipelineError::Schema(m) => write!(f, "schema: {m}"),
            PipelineError::InvalidGeometry(m) => write!(f, "invalid geometry: {m}"),
            PipelineError::MalformedInterval(m) => write!(f, "malformed interval: {m}"),
            PipelineError::Config(m) => write!(f, "config: {m}"),
            PipelineError::Merge(m) => write!(f, "merge: {m}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<CoreError> for PipelineError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidGeometryKind(kind) => PipelineError::InvalidGeometry(kind),
            CoreError::MalformedInterval(m) => PipelineError::MalformedInterval(m),
            CoreError::UnknownWeekday(t) => PipelineError::MalformedInterval(format!("unknown weekday '{t}'")),
            CoreError::InvalidId => PipelineError::Schema("invalid zone id".into()),
            CoreError::DomainOutOfRange(field) => PipelineError::Config(format!("{field} out of range")),
        }
    }
}

impl From<dz_io::IoError> for PipelineError {
    fn from(e: dz_io::IoError) -> Self {
        use dz_io::IoError;
        match e {
            IoError::Schema { pointer, msg } => PipelineError::Schema(format!("{pointer}: {msg}")),
            IoError::Json { pointer, msg } => PipelineError::Schema(format!("json {pointer}: {msg}")),
            IoError::Read(m) => PipelineError::Io(format!("read: {m}")),
            IoError::Limit(m) => PipelineError::Io(format!("limit: {m}")),
            IoError::Hash(m) => PipelineError::Io(format!("hash: {m}")),
            // Keep the bucket of the underlying failure, prefix the entry index.
            IoError::Zone { index, source } => match PipelineError::from(source) {
                PipelineError::InvalidGeometry(m) => PipelineError::InvalidGeometry(format!("zone #{index}: {m}")),
                PipelineError::MalformedInterval(m) => {
                    PipelineError::MalformedInterval(format!("zone #{index}: {m}"))
                }
                other => other,
            },
            IoError::Core(c) => PipelineError::from(c),
        }
    }
}

impl From<dz_algo::MergeError> for PipelineError {
    fn from(e: dz_algo::MergeError) -> Self {
        PipelineError::Merge(e.to_string())
    }
}

/// Load a snapshot from disk with optional limits file; the host's usual entry.
pub fn load_snapshot(snapshot: &Path, limits_file: Option<&Path>) -> Result<ZoneSnapshot, PipelineError> {
    let limits: EngineLimits = dz_io::config::load_limits_or_default(limits_file)?;
    Ok(dz_io::loader::load_snapshot_from_path(snapshot, &limits)?)
}
