//! Engine configuration file: a JSON object with any subset of the
//! `EngineLimits` keys. Missing keys keep their defaults; unknown keys fail.

use std::fs;
use std::path::Path;

use dz_core::EngineLimits;

use crate::IoError;

pub fn load_limits(path: &Path) -> Result<EngineLimits, IoError> {
    let text = fs::read_to_string(path).map_err(|e| IoError::Read(format!("{}: {e}", path.display())))?;
    let limits: EngineLimits = serde_json::from_str(&text)?;
    limits.validate_domains()?;
    Ok(limits)
}

/// `EngineLimits::default()` when no file is given.
pub fn load_limits_or_default(path: Option<&Path>) -> Result<EngineLimits, IoError> {
    match path {
        Some(p) => load_limits(p),
        None => Ok(EngineLimits::default()),
    }
}
