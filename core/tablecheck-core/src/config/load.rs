use super::models::Schema;
use crate::error::CheckError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse the document under check.
pub fn read_json(path: &Path) -> Result<Value, CheckError> {
    let bytes = fs::read(path).map_err(|e| CheckError::FileNotFound {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_slice(&bytes).map_err(|e| CheckError::MalformedJson {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load a schema description overriding the built-in key lists. Repeated
/// entries keep their first position.
pub fn load_schema(path: &Path) -> Result<Schema, CheckError> {
    let s = fs::read_to_string(path).map_err(|e| CheckError::SchemaFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let schema: Schema = serde_json::from_str(&s).map_err(|e| CheckError::SchemaFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(schema.dedup())
}
