use super::*;
use serde_json::json;

#[test]
fn builds_from_a_minimal_configuration() {
    let config = json!({
        "hostname": "test-host",
        "plugins": {
            "dummy": { "checks": [ { "type": "dummy", "name": "always_ok" } ] }
        },
        "consumers": [ { "type": "Stdout" } ]
    });

    let engine = Engine::build(&config).unwrap();
    assert_eq!(engine.hostname, "test-host");
    assert_eq!(engine.checks.len(), 1);
    assert_eq!(engine.consumer_specs.len(), 1);
    assert!(engine.store.is_empty());
}

#[test]
fn unknown_plugin_is_a_startup_error() {
    let config = json!({ "plugins": { "NoSuchPlugin": { "checks": [] } } });
    assert!(Engine::build(&config).is_err());
}
