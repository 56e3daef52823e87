//! crates/dz_io/src/lib.rs
//! JSON boundary of the engine. Everything that touches `serde_json::Value`,
//! the filesystem or a digest lives here; `dz_core`/`dz_algo` stay I/O-free.
//!
//! - `normalize`: GeometryNormalizer (arbitrary payload → `ZoneGeometry`)
//! - `loader`   : zone snapshot from bytes/file, bounded by `EngineLimits`
//! - `schema`   : embedded Draft 2020-12 snapshot schema
//! - `canonical_json` / `hasher`: sorted-key JSON and `ZS:` snapshot ids
//! - `config`   : `EngineLimits` from a JSON file

#![forbid(unsafe_code)]

use dz_core::CoreError;
use thiserror::Error;

/// Unified error for dz_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem errors (open, read, metadata).
    #[error("read error: {0}")]
    Read(String),

    /// JSON parse/shape errors with a JSON Pointer.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// First JSON Schema violation.
    #[error("schema error at {pointer}: {msg}")]
    Schema { pointer: String, msg: String },

    /// An `EngineLimits` cap was exceeded.
    #[error("limit exceeded: {0}")]
    Limit(String),

    #[error("hash error: {0}")]
    Hash(String),

    /// A snapshot entry failed geometry/window normalization.
    #[error("zone #{index}: {source}")]
    Zone {
        index: usize,
        #[source]
        source: CoreError,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type IoResult<T> = Result<T, IoError>;

/* ---------------- From conversions (used by file modules) ---------------- */

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Read(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json keeps line/column, not a pointer.
        IoError::Json { pointer: "/".to_string(), msg: e.to_string() }
    }
}

impl From<hasher::HashError> for IoError {
    fn from(e: hasher::HashError) -> Self {
        IoError::Hash(e.to_string())
    }
}

pub mod canonical_json;
pub mod config;
pub mod hasher;
pub mod loader;
pub mod normalize;
pub mod schema;

pub mod prelude {
    pub use crate::{IoError, IoResult};

    pub use crate::canonical_json::canonical_json_bytes;
    pub use crate::config::load_limits;
    pub use crate::hasher::{sha256_canonical, sha256_hex, snapshot_id};
    pub use crate::loader::{load_snapshot_from_bytes, load_snapshot_from_path, ZoneSnapshot};
    pub use crate::normalize::{classify, normalize_geometry, GeometryClass};
}
