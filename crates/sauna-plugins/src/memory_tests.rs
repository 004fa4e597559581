use super::*;

#[test]
fn percent_used_is_a_ratio_of_total() {
    assert_eq!(percent_used(50, 100), 50.0);
    assert_eq!(percent_used(0, 100), 0.0);
}

#[test]
fn percent_used_with_zero_total_does_not_divide_by_zero() {
    assert_eq!(percent_used(0, 0), 0.0);
}

#[test]
fn registers_all_three_checks() {
    let mut registry = sauna_registry::PluginRegistry::new();
    register(&mut registry).unwrap();
    let entry = registry.get("memory").unwrap();
    assert!(entry.check("used_percent").is_some());
    assert!(entry.check("swap_used_percent").is_some());
    assert!(entry.check("available").is_some());
}

#[test]
fn used_percent_check_runs_against_the_live_host() {
    let params: CheckParams = serde_json::Map::new();
    let (status, output) = used_percent(&params).unwrap();
    assert!(matches!(status, sauna_core::Status::Ok | sauna_core::Status::Warn | sauna_core::Status::Crit));
    assert!(output.contains("Memory used"));
}
