//! JSON file persistence helpers.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::utils::io;

/// Load a JSON file, returning `None` when the path does not exist.
///
/// An existing file that cannot be read or parsed is an error, not `None`;
/// absence is the only condition mapped to the absent signal.
pub fn load_json_file(path: impl AsRef<Path>) -> Result<Option<Value>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let content = io::read_file(path, "read json file")?;
    let value = serde_json::from_str(&content)
        .map_err(|e| Error::internal_json(e.to_string(), Some(format!("parse {}", path.display()))))?;

    Ok(Some(value))
}

/// `load_json_file` deserialized into a concrete type.
pub fn load_json_file_typed<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Option<T>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let content = io::read_file(path, "read json file")?;
    let value = serde_json::from_str(&content)
        .map_err(|e| Error::internal_json(e.to_string(), Some(format!("parse {}", path.display()))))?;

    Ok(Some(value))
}

/// Save a value as pretty-printed JSON, creating missing parent directories.
pub fn save_json_file(path: impl AsRef<Path>, value: &Value) -> Result<()> {
    save_json_file_typed(path, value)
}

/// `save_json_file` for any serializable structure. The write is atomic
/// (temp file then rename), so readers never see a partial file.
pub fn save_json_file_typed<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
            })?;
        }
    }

    let content = serde_json::to_string_pretty(value)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize json".to_string())))?;

    io::write_file_atomic(path, &content, "write json file")
}
