//! Whole-file JSON persistence
//!
//! A data file is read completely on load and replaced completely on save.
//! Saves go through a `NamedTempFile` in the target's directory that is
//! persisted over the target, so readers see either the old file or the new
//! one.

use std::io::{self, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::error::ExpenseError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> ExpenseError {
    ExpenseError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read a JSON data file; a missing file is the empty value
pub fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ExpenseError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file missing, using empty data");
            return Ok(T::default());
        }
        Err(e) => return Err(storage_error("read", path, e)),
    };

    serde_json::from_slice(&bytes).map_err(|e| storage_error("parse", path, e))
}

/// Replace a JSON data file with the pretty-printed `data`
pub fn write_json_atomic<T: Serialize>(path: &Path, data: &T) -> Result<(), ExpenseError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| storage_error("create directory", dir, e))?;

    let json = serde_json::to_vec_pretty(data).map_err(|e| storage_error("serialize", path, e))?;

    let mut temp =
        NamedTempFile::new_in(dir).map_err(|e| storage_error("create a temp file in", dir, e))?;
    temp.write_all(&json)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| storage_error("write", path, e))?;
    temp.persist(path).map_err(|e| storage_error("replace", path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote file");
    Ok(())
}
