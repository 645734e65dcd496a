use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can make a check fail. All variants are terminal.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Usage: {program} <path_to_json>")]
    Usage { program: String },

    #[error("cannot read {}: {reason}", path.display())]
    FileNotFound { path: PathBuf, reason: String },

    #[error("malformed JSON in {}: {reason}", path.display())]
    MalformedJson { path: PathBuf, reason: String },

    #[error("schema file {}: {reason}", path.display())]
    SchemaFile { path: PathBuf, reason: String },

    #[error("top-level JSON must be an object or an array of objects, found {found}")]
    InvalidTopLevelShape { found: &'static str },

    #[error("list item {index} is not an object, found {found}")]
    NonObjectListItem { index: usize, found: &'static str },

    #[error("record {index}: missing {} in {}", KeyList(keys), Compact(record))]
    MissingKeys {
        index: usize,
        keys: Vec<String>,
        record: Map<String, Value>,
    },

    #[error("record {index}: empty value for {} in {}", KeyList(keys), Compact(record))]
    EmptyValues {
        index: usize,
        keys: Vec<String>,
        record: Map<String, Value>,
    },

    #[error("record {index}: unwanted {} found in audit_column of {}", KeyList(keys), Compact(record))]
    ForbiddenAuditColumns {
        index: usize,
        keys: Vec<String>,
        record: Map<String, Value>,
    },

    #[error("{failed} of {total} records failed validation")]
    Violations { failed: usize, total: usize },

    #[error("record {index}: audit_column must be an array of strings in {}", Compact(record))]
    MalformedAuditColumn {
        index: usize,
        record: Map<String, Value>,
    },
}

/// Name of a JSON value's kind, for diagnostics.
pub fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

struct KeyList<'a>(&'a [String]);

impl fmt::Display for KeyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

struct Compact<'a>(&'a Map<String, Value>);

impl fmt::Display for Compact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self.0) {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str("<record>"),
        }
    }
}
