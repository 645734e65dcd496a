use super::normalize::normalize;
use crate::config::load::read_json;
use crate::config::models::{Schema, AUDIT_COLUMN};
use crate::error::{kind_of, CheckError};
use crate::report::Reporter;
use serde_json::Value;
use std::path::Path;

/// How far a check goes after the first failing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Report the first violation and stop.
    #[default]
    FailFast,
    /// Check every record and report each failing one.
    CollectAll,
}

/// Check a single record. `index` is its position in the document and only
/// feeds diagnostics.
pub fn check_record(index: usize, value: &Value, schema: &Schema) -> Result<(), CheckError> {
    let record = value.as_object().ok_or(CheckError::NonObjectListItem {
        index,
        found: kind_of(value),
    })?;

    let missing: Vec<String> = schema
        .required_keys
        .iter()
        .filter(|k| !record.contains_key(k.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(CheckError::MissingKeys {
            index,
            keys: missing,
            record: record.clone(),
        });
    }

    let empty: Vec<String> = schema
        .required_keys
        .iter()
        .filter(|k| record.get(k.as_str()).is_some_and(is_empty_value))
        .cloned()
        .collect();
    if !empty.is_empty() {
        return Err(CheckError::EmptyValues {
            index,
            keys: empty,
            record: record.clone(),
        });
    }

    if let Some(audit) = record.get(AUDIT_COLUMN) {
        let entries = audit_entries(audit).ok_or_else(|| CheckError::MalformedAuditColumn {
            index,
            record: record.clone(),
        })?;
        let forbidden: Vec<String> = schema
            .forbidden_audit_subkeys
            .iter()
            .filter(|k| entries.contains(&k.as_str()))
            .cloned()
            .collect();
        if !forbidden.is_empty() {
            return Err(CheckError::ForbiddenAuditColumns {
                index,
                keys: forbidden,
                record: record.clone(),
            });
        }
    }

    Ok(())
}

fn is_empty_value(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// `audit_column` must be an array of strings; anything else yields `None`.
/// A `null` column never gets here when it is a required key.
fn audit_entries(v: &Value) -> Option<Vec<&str>> {
    match v {
        Value::Array(items) => items.iter().map(Value::as_str).collect(),
        _ => None,
    }
}

/// Check records in order, stopping at the first failure. The failure is
/// handed to `reporter` before it is returned.
pub fn validate(records: &[Value], schema: &Schema, reporter: &dyn Reporter) -> Result<(), CheckError> {
    for (index, value) in records.iter().enumerate() {
        if let Err(e) = check_record(index, value, schema) {
            reporter.failure(&e);
            return Err(e);
        }
    }
    reporter.passed(records.len());
    Ok(())
}

/// Check every record and return all violations, first rule broken per
/// record, in document order. Nothing is reported.
pub fn collect_violations(records: &[Value], schema: &Schema) -> Vec<CheckError> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, value)| check_record(index, value, schema).err())
        .collect()
}

/// Runs checks against one schema and sends every outcome to its reporter.
pub struct Validator<'r> {
    schema: Schema,
    mode: Mode,
    reporter: &'r dyn Reporter,
}

impl<'r> Validator<'r> {
    pub fn new(schema: Schema, reporter: &'r dyn Reporter) -> Self {
        Self {
            schema,
            mode: Mode::default(),
            reporter,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Load `path`, then check it like [`Validator::check_document`].
    pub fn check_file(&self, path: &Path) -> Result<(), CheckError> {
        let doc = read_json(path).inspect_err(|e| self.reporter.failure(e))?;
        tracing::debug!(path = %path.display(), "loaded document");
        self.check_document(&doc)
    }

    pub fn check_document(&self, doc: &Value) -> Result<(), CheckError> {
        let records = normalize(doc).inspect_err(|e| self.reporter.failure(e))?;
        match self.mode {
            Mode::FailFast => validate(records, &self.schema, self.reporter),
            Mode::CollectAll => self.check_all(records),
        }
    }

    fn check_all(&self, records: &[Value]) -> Result<(), CheckError> {
        let violations = collect_violations(records, &self.schema);
        if violations.is_empty() {
            self.reporter.passed(records.len());
            return Ok(());
        }
        for v in &violations {
            self.reporter.failure(v);
        }
        let summary = CheckError::Violations {
            failed: violations.len(),
            total: records.len(),
        };
        self.reporter.failure(&summary);
        Err(summary)
    }
}
