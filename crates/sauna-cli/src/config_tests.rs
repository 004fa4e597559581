use super::*;

#[test]
fn loads_a_yaml_file_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sauna.yml");
    std::fs::write(&path, "periodicity: 60\nhostname: test-host\n").unwrap();

    let value = load(&path).unwrap();
    assert_eq!(value["periodicity"], 60);
    assert_eq!(value["hostname"], "test-host");
}

#[test]
fn missing_file_is_an_error() {
    let path = std::path::Path::new("/nonexistent/sauna.yml");
    assert!(load(path).is_err());
}

#[test]
fn logging_level_reads_the_passthrough_key() {
    let value = serde_json::json!({"logging": {"level": "debug"}});
    assert_eq!(logging_level(&value), Some("debug"));
}

#[test]
fn logging_level_is_none_when_absent() {
    let value = serde_json::json!({});
    assert_eq!(logging_level(&value), None);
}
