//! Reading the project manifest

use crate::error::{Result, ScaffoldError};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

pub const MANIFEST_FILE: &str = "package.json";

/// Read `package.json` and return its top-level object
pub async fn read_manifest(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| ScaffoldError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

    let value: Value =
        serde_json::from_str(&content).map_err(|source| ScaffoldError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ScaffoldError::ManifestShape {
            path: path.to_path_buf(),
        }),
    }
}
