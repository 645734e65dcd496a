use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Key whose contents are screened for forbidden entries.
pub const AUDIT_COLUMN: &str = "audit_column";

pub const DEFAULT_REQUIRED_KEYS: &[&str] = &[
    "rds_name",
    "rds_instance_type",
    "db_name",
    "tb_name",
    "primaryKey",
    AUDIT_COLUMN,
    "date_column",
];

pub const DEFAULT_FORBIDDEN_AUDIT_SUBKEYS: &[&str] = &[
    "updated_at",
    "updated_by",
    "updated_by_id",
    "updated_ts_dms",
];

/// Rules a record is checked against. List order drives diagnostic order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    #[serde(default = "default_required_keys")]
    pub required_keys: Vec<String>,
    #[serde(default = "default_forbidden_audit_subkeys")]
    pub forbidden_audit_subkeys: Vec<String>,
}

impl Schema {
    pub fn new<R, F>(required_keys: R, forbidden_audit_subkeys: F) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            required_keys: required_keys.into_iter().map(Into::into).collect(),
            forbidden_audit_subkeys: forbidden_audit_subkeys.into_iter().map(Into::into).collect(),
        }
        .dedup()
    }

    /// Drop repeated entries from both lists, keeping first occurrences.
    pub fn dedup(mut self) -> Self {
        dedup_keys(&mut self.required_keys);
        dedup_keys(&mut self.forbidden_audit_subkeys);
        self
    }
}

fn dedup_keys(keys: &mut Vec<String>) {
    let mut seen = HashSet::new();
    keys.retain(|k| seen.insert(k.clone()));
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            required_keys: default_required_keys(),
            forbidden_audit_subkeys: default_forbidden_audit_subkeys(),
        }
    }
}

fn default_required_keys() -> Vec<String> {
    DEFAULT_REQUIRED_KEYS.iter().map(|s| s.to_string()).collect()
}

fn default_forbidden_audit_subkeys() -> Vec<String> {
    DEFAULT_FORBIDDEN_AUDIT_SUBKEYS.iter().map(|s| s.to_string()).collect()
}
