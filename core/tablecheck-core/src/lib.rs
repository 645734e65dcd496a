//! Record checks for table catalog documents: required keys must be present
//! and non-empty, and `audit_column` must not list forbidden columns.

pub mod check;
pub mod config;
pub mod error;
pub mod report;

pub use check::validate::{Mode, Validator};
pub use config::models::Schema;
pub use error::CheckError;
