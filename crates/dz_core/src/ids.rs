//! crates/dz_core/src/ids.rs
//! Zone identifiers and snapshot digests.
//! Zone ids are opaque (issued by the persistence collaborator); snapshot ids
//! have a strict shape `ZS:` + 64 lowercase hex.

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Errors returned when validating or parsing IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    Empty,
    TooLong,
    BadShape,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdError::Empty => write!(f, "empty id"),
            IdError::TooLong => write!(f, "id longer than {MAX_ID_LEN} bytes"),
            IdError::BadShape => write!(f, "id has an invalid shape"),
        }
    }
}

impl From<IdError> for CoreError {
    fn from(_: IdError) -> Self {
        CoreError::InvalidId
    }
}

const MAX_ID_LEN: usize = 256;
const HEX64_LEN: usize = 64;
const SNAPSHOT_PREFIX: &str = "ZS:";

/// Lowercase hex (length must be exactly 64).
#[inline]
pub fn is_valid_sha256(s: &str) -> bool {
    s.len() == HEX64_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

macro_rules! string_newtype {
    ($(#[$m:meta])* $name:ident) => {
        $(#[$m])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
        pub struct $name(String);

        impl $name {
            #[inline] pub fn as_str(&self) -> &str { &self.0 }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
        }

        impl TryFrom<&str> for $name {
            type Error = IdError;
            #[inline]
            fn try_from(value: &str) -> Result<Self, Self::Error> { value.parse() }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;
            #[inline]
            fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
        }

        impl From<$name> for String {
            #[inline]
            fn from(v: $name) -> String { v.0 }
        }
    };
}

string_newtype!(
    /// Opaque zone identifier, stable across edits. Any non-empty string up to
    /// 256 bytes without control characters.
    ZoneId
);

string_newtype!(
    /// "ZS:" + 64-hex lowercase digest of a canonical zone snapshot.
    SnapshotId
);

impl FromStr for ZoneId {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() { return Err(IdError::Empty); }
        if s.len() > MAX_ID_LEN { return Err(IdError::TooLong); }
        if s.chars().any(char::is_control) { return Err(IdError::BadShape); }
        Ok(ZoneId(s.to_owned()))
    }
}

impl FromStr for SnapshotId {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() { return Err(IdError::Empty); }
        let hex = s.strip_prefix(SNAPSHOT_PREFIX).ok_or(IdError::BadShape)?;
        if !is_valid_sha256(hex) { return Err(IdError::BadShape); }
        Ok(SnapshotId(s.to_owned()))
    }
}

impl SnapshotId {
    /// Build from a bare 64-hex digest.
    pub fn from_hex(hex: &str) -> Result<Self, IdError> {
        if !is_valid_sha256(hex) { return Err(IdError::BadShape); }
        let mut s = String::with_capacity(SNAPSHOT_PREFIX.len() + HEX64_LEN);
        s.push_str(SNAPSHOT_PREFIX);
        s.push_str(hex);
        Ok(SnapshotId(s))
    }

    #[inline] pub fn as_hex(&self) -> &str { &self.0[SNAPSHOT_PREFIX.len()..] }
}
