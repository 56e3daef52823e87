//! crates/dz_io/src/hasher.rs
//!
//! Deterministic hashing for snapshot fingerprints.
//! - `sha256_canonical(..)` for values/structs (goes through canonical_json).
//! - `sha256_hex(..)` for raw bytes.
//! - `snapshot_id(..)` builds the `ZS:<hex64>` id over a zone list.
//! Hex digests are lowercase.

use dz_core::{SnapshotId, Zone};
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::canonical_json::to_canonical_bytes;

#[derive(Error, Debug)]
pub enum HashError {
    #[error("JSON serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid hex (expected lowercase 64-hex): {0}")]
    InvalidHex(String),
}

/// SHA-256 over raw bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// SHA-256 over canonical JSON bytes of any serializable value.
pub fn sha256_canonical<T: Serialize>(value: &T) -> Result<String, HashError> {
    Ok(sha256_hex(&to_canonical_bytes(value)?))
}

/// Fingerprint of a zone list, in the order given. Two snapshots with the same
/// zones in the same order share an id regardless of JSON key order on the wire.
pub fn snapshot_id(zones: &[Zone]) -> Result<SnapshotId, HashError> {
    let hex = sha256_canonical(&zones)?;
    SnapshotId::from_hex(&hex).map_err(|_| HashError::InvalidHex(hex))
}
