use super::*;
use sauna_core::{CheckParams, DependencyError, Status};
use sauna_registry::{ConsumerFactory, PullConsumer, PushConsumer};
use serde_json::json;
use std::collections::BTreeMap;

fn dummy_check(_params: &CheckParams) -> Result<(Status, String), String> {
    Ok((Status::Ok, "fine".to_string()))
}

fn always_available() -> Result<(), DependencyError> {
    Ok(())
}

fn always_missing() -> Result<(), DependencyError> {
    Err(DependencyError::new("smtp", "missing libsmtp"))
}

struct NullPush;
#[async_trait::async_trait]
impl PushConsumer for NullPush {
    async fn send(&self, _check: &sauna_core::ServiceCheck) -> Result<(), sauna_core::SendError> {
        Ok(())
    }
}

fn make_push(_params: &CheckParams) -> Result<Box<dyn PushConsumer>, ConfigError> {
    Ok(Box::new(NullPush))
}

struct NullPull;
#[async_trait::async_trait]
impl PullConsumer for NullPull {
    async fn run(
        self: Box<Self>,
        _store: sauna_store::ResultStore,
        _shutdown: tokio_util::sync::CancellationToken,
    ) -> Result<(), sauna_core::SendError> {
        Ok(())
    }
}

fn make_pull(_params: &CheckParams) -> Result<Box<dyn PullConsumer>, ConfigError> {
    Ok(Box::new(NullPull))
}

fn plugin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    let mut checks = BTreeMap::new();
    checks.insert("load1", dummy_check as sauna_core::CheckFn);
    registry.register("load", checks, always_available).unwrap();
    registry
}

fn consumer_registry() -> ConsumerRegistry {
    let mut registry = ConsumerRegistry::new();
    registry.register("stdout", sauna_core::ConsumerMode::Queued, ConsumerFactory::Push(make_push)).unwrap();
    registry.register("http_server", sauna_core::ConsumerMode::Pull, ConsumerFactory::Pull(make_pull)).unwrap();
    registry
}

#[test]
fn resolves_a_full_config_in_list_form() {
    let config = json!({
        "periodicity": 60,
        "hostname": "myhost",
        "plugins": [
            {"type": "load", "checks": [{"type": "load1", "warn": 5, "crit": 10}]}
        ],
        "consumers": [
            {"type": "stdout"},
            {"type": "http_server", "port": 5590}
        ]
    });

    let resolved = resolve(&config, &plugin_registry(), &consumer_registry()).unwrap();
    assert_eq!(resolved.hostname, "myhost");
    assert_eq!(resolved.checks.len(), 1);
    assert_eq!(resolved.checks[0].id.as_str(), "load_load1");
    assert_eq!(resolved.checks[0].periodicity, 60);
    assert_eq!(resolved.consumers.len(), 2);
}

#[test]
fn mapping_form_is_equivalent_to_list_form() {
    let list_config = json!({
        "plugins": [{"type": "load", "checks": [{"type": "load1"}]}],
        "consumers": [{"type": "stdout"}]
    });
    let mapping_config = json!({
        "plugins": {"load": {"checks": [{"type": "load1"}]}},
        "consumers": {"stdout": {}}
    });

    let from_list = resolve(&list_config, &plugin_registry(), &consumer_registry()).unwrap();
    let from_mapping = resolve(&mapping_config, &plugin_registry(), &consumer_registry()).unwrap();
    assert_eq!(from_list.checks[0].id, from_mapping.checks[0].id);
    assert_eq!(from_list.consumers.len(), from_mapping.consumers.len());
}

#[test]
fn check_name_defaults_to_plugin_and_type_lowercased() {
    let config = json!({"plugins": [{"type": "load", "checks": [{"type": "load1"}]}]});
    let resolved = resolve(&config, &plugin_registry(), &consumer_registry()).unwrap();
    assert_eq!(resolved.checks[0].id.as_str(), "load_load1");
}

#[test]
fn check_periodicity_falls_back_to_global() {
    let config = json!({
        "periodicity": 45,
        "plugins": [{"type": "load", "checks": [{"type": "load1"}]}]
    });
    let resolved = resolve(&config, &plugin_registry(), &consumer_registry()).unwrap();
    assert_eq!(resolved.checks[0].periodicity, 45);
}

#[test]
fn duplicate_check_names_are_fatal() {
    let config = json!({
        "plugins": [{"type": "load", "checks": [
            {"type": "load1", "name": "dup"},
            {"type": "load1", "name": "dup"}
        ]}]
    });
    let result = resolve(&config, &plugin_registry(), &consumer_registry());
    assert!(matches!(result, Err(StartupError::Config(ConfigError::DuplicateCheckName(_)))));
}

#[test]
fn unknown_plugin_name_is_fatal() {
    let config = json!({"plugins": [{"type": "bogus", "checks": []}]});
    let result = resolve(&config, &plugin_registry(), &consumer_registry());
    assert!(matches!(result, Err(StartupError::Config(ConfigError::UnknownPlugin(_)))));
}

#[test]
fn unknown_check_type_is_fatal() {
    let config = json!({"plugins": [{"type": "load", "checks": [{"type": "bogus"}]}]});
    let result = resolve(&config, &plugin_registry(), &consumer_registry());
    assert!(matches!(result, Err(StartupError::Config(ConfigError::UnknownCheckType { .. }))));
}

#[test]
fn unknown_consumer_is_fatal() {
    let config = json!({"consumers": [{"type": "bogus"}]});
    let result = resolve(&config, &plugin_registry(), &consumer_registry());
    assert!(matches!(result, Err(StartupError::Config(ConfigError::UnknownConsumer(_)))));
}

#[test]
fn dependency_errors_are_collected_not_fatal_immediately() {
    let mut registry = PluginRegistry::new();
    let mut checks_a = BTreeMap::new();
    checks_a.insert("load1", dummy_check as sauna_core::CheckFn);
    registry.register("load", checks_a, always_available).unwrap();
    registry.register("smtp", BTreeMap::new(), always_missing).unwrap();

    let config = json!({
        "plugins": [
            {"type": "smtp", "checks": []},
            {"type": "load", "checks": [{"type": "load1"}]}
        ]
    });
    let result = resolve(&config, &registry, &consumer_registry());
    match result {
        Err(StartupError::Dependencies(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].plugin, "smtp");
        }
        other => panic!("expected collected dependency errors, got {other:?}"),
    }
}

#[test]
fn unknown_extra_plugin_name_is_fatal() {
    let config = json!({"extra_plugins": ["bogus"]});
    let result = resolve(&config, &plugin_registry(), &consumer_registry());
    assert!(matches!(result, Err(StartupError::Config(ConfigError::UnknownPlugin(_)))));
}
