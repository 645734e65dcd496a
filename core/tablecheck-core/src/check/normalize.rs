use crate::error::{kind_of, CheckError};
use serde_json::Value;
use std::slice;

/// View a document as a sequence of candidate records. An object stands for
/// a one-element sequence; array elements are not inspected here.
pub fn normalize(doc: &Value) -> Result<&[Value], CheckError> {
    match doc {
        Value::Array(items) => Ok(items.as_slice()),
        Value::Object(_) => Ok(slice::from_ref(doc)),
        other => Err(CheckError::InvalidTopLevelShape {
            found: kind_of(other),
        }),
    }
}
