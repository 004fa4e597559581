use super::*;

#[test]
fn stale_drop_scenario() {
    assert!(is_stale(1000, 1011, 10));
}

#[test]
fn not_yet_stale() {
    assert!(!is_stale(1000, 1005, 10));
}

#[test]
fn zero_stale_age_drops_anything_not_same_second() {
    assert!(!is_stale(1000, 1000, 0));
    assert!(is_stale(1000, 1001, 0));
}

#[test]
fn max_retry_zero_drops_on_first_failure() {
    let policy = RetryPolicy { stale_age: 300, max_retry: 0, retry_delay: 1 };
    assert!(!policy.retries_exhausted(0));
    assert!(policy.retries_exhausted(1));
}

#[test]
fn max_retry_negative_one_never_exhausts() {
    let policy = RetryPolicy { stale_age: 300, max_retry: -1, retry_delay: 1 };
    assert!(!policy.retries_exhausted(10_000));
}

#[test]
fn retry_policy_from_params_overrides_only_the_keys_present() {
    let params = serde_json::json!({"stale_age": 60}).as_object().unwrap().clone();
    let policy = RetryPolicy::from_params(&params);
    assert_eq!(policy, RetryPolicy { stale_age: 60, ..RetryPolicy::default() });
}

#[test]
fn batch_policy_from_params_overrides_only_the_keys_present() {
    let params = serde_json::json!({"max_batch_size": 10}).as_object().unwrap().clone();
    let policy = BatchPolicy::from_params(&params);
    assert_eq!(policy, BatchPolicy { max_batch_size: 10, ..BatchPolicy::default() });
}
