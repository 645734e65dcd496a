use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const VALID: &str = r#"{"rds_name":"a","rds_instance_type":"b","db_name":"c","tb_name":"d","primaryKey":"id","audit_column":["created_at"],"date_column":"2024-01-01"}"#;

fn tablecheck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tablecheck"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run tablecheck")
}

fn check(contents: &str) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.json");
    fs::write(&path, contents).unwrap();
    tablecheck(&[path.to_str().unwrap()])
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn valid_object_passes_silently() {
    let out = check(VALID);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).is_empty());
}

#[test]
fn missing_keys_are_named() {
    let out = check(r#"{"rds_name":"a"}"#);
    assert_eq!(out.status.code(), Some(1));
    let s = stdout(&out);
    for key in ["rds_instance_type", "db_name", "tb_name", "primaryKey", "date_column"] {
        assert!(s.contains(key), "{key} not in {s}");
    }
    assert!(s.contains("missing"));
}

#[test]
fn empty_value_is_reported() {
    let out = check(
        r#"{"rds_name":"","rds_instance_type":"b","db_name":"c","tb_name":"d","primaryKey":"id","audit_column":[],"date_column":"x"}"#,
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("empty value for [rds_name]"));
}

#[test]
fn forbidden_audit_column_is_reported() {
    let out = check(
        r#"{"rds_name":"a","rds_instance_type":"b","db_name":"c","tb_name":"d","primaryKey":"id","audit_column":["updated_at"],"date_column":"x"}"#,
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("unwanted [updated_at] found in audit_column"));

    let log = String::from_utf8_lossy(&out.stderr);
    let line = log
        .lines()
        .find(|l| l.contains("ERROR"))
        .unwrap_or_else(|| panic!("no error log line in {log}"));
    assert!(line.contains("unwanted [updated_at] found in audit_column"), "{line}");
}

#[test]
fn array_fails_on_second_record_only() {
    let second = VALID.replace(r#""tb_name":"d","#, "");
    let out = check(&format!("[{VALID},{second}]"));
    assert_eq!(out.status.code(), Some(1));
    let s = stdout(&out);
    assert_eq!(s.lines().count(), 1);
    assert!(s.starts_with("record 1: missing [tb_name]"));
}

#[test]
fn scalar_document_is_rejected() {
    let out = check("42");
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("must be an object or an array of objects"));
}

#[test]
fn malformed_json_is_rejected() {
    let out = check("{not json");
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("malformed JSON"));
}

#[test]
fn missing_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let out = tablecheck(&[path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("cannot read"));
}

#[test]
fn wrong_arity_prints_usage() {
    for args in [&[][..], &["a.json", "b.json"][..], &["--bogus", "x.json"][..]] {
        let out = tablecheck(args);
        assert_eq!(out.status.code(), Some(1));
        assert!(stdout(&out).starts_with("Usage: tablecheck <path_to_json>"));
    }
}

#[test]
fn all_flag_reports_every_failing_record() {
    let bad = VALID.replace(r#""db_name":"c""#, r#""db_name":null"#);
    let out = {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, format!("[{bad},{VALID},7]")).unwrap();
        tablecheck(&["--all", path.to_str().unwrap()])
    };
    assert_eq!(out.status.code(), Some(1));
    let s = stdout(&out);
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines.len(), 3, "{s}");
    assert!(lines[0].starts_with("record 0: empty value for [db_name]"));
    assert!(lines[1].starts_with("list item 2 is not an object"));
    assert_eq!(lines[2], "2 of 3 records failed validation");
}

#[test]
fn schema_file_overrides_key_lists() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("schema.json");
    let input = dir.path().join("input.json");
    fs::write(&schema, r#"{"required_keys":["id"],"forbidden_audit_subkeys":["created_at"]}"#).unwrap();
    fs::write(&input, r#"{"id":1}"#).unwrap();
    let ok = tablecheck(&["--schema", path_str(&schema), path_str(&input)]);
    assert_eq!(ok.status.code(), Some(0));

    fs::write(&input, r#"{"id":1,"audit_column":["created_at"]}"#).unwrap();
    let bad = tablecheck(&["--schema", path_str(&schema), path_str(&input)]);
    assert_eq!(bad.status.code(), Some(1));
    assert!(stdout(&bad).contains("unwanted [created_at]"));
}

#[test]
fn unreadable_schema_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    fs::write(&input, VALID).unwrap();
    let missing = dir.path().join("schema.json");
    let out = tablecheck(&["--schema", path_str(&missing), path_str(&input)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("schema file"));
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}
