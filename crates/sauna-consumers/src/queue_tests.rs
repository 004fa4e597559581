use super::*;
use sauna_core::FakeClock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct FlakyConsumer {
    fail_times: usize,
    attempts: AtomicUsize,
    delivered: Arc<std::sync::Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl PushConsumer for FlakyConsumer {
    async fn send(&self, check: &ServiceCheck) -> Result<(), sauna_core::SendError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.fail_times {
            return Err(sauna_core::SendError::Other("temporary failure".to_string()));
        }
        self.delivered.lock().unwrap().push(check.name.clone());
        Ok(())
    }
}

fn service_check(name: &str, timestamp: i64) -> ServiceCheck {
    ServiceCheck {
        timestamp,
        hostname: "host".to_string(),
        name: name.to_string(),
        status: sauna_core::Status::Ok,
        output: "ok".to_string(),
    }
}

#[tokio::test]
async fn stale_item_is_dropped_without_sending() {
    let delivered = Arc::new(std::sync::Mutex::new(Vec::new()));
    let consumer = FlakyConsumer { fail_times: 0, attempts: AtomicUsize::new(0), delivered: delivered.clone() };
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let clock = FakeClock::new(1011);
    tx.send(ConsumerMessage::Check(service_check("foo", 1000))).unwrap();
    tx.send(ConsumerMessage::Shutdown).unwrap();

    run_queued_worker("test", &consumer, rx, RetryPolicy { stale_age: 10, ..Default::default() }, clock, CancellationToken::new()).await;

    assert!(delivered.lock().unwrap().is_empty());
    assert_eq!(consumer.attempts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fresh_item_is_delivered() {
    let delivered = Arc::new(std::sync::Mutex::new(Vec::new()));
    let consumer = FlakyConsumer { fail_times: 0, attempts: AtomicUsize::new(0), delivered: delivered.clone() };
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let clock = FakeClock::new(1005);
    tx.send(ConsumerMessage::Check(service_check("foo", 1000))).unwrap();
    tx.send(ConsumerMessage::Shutdown).unwrap();

    run_queued_worker("test", &consumer, rx, RetryPolicy { stale_age: 300, ..Default::default() }, clock, CancellationToken::new()).await;

    assert_eq!(delivered.lock().unwrap().as_slice(), ["foo"]);
}

#[tokio::test]
async fn retries_until_success_within_budget() {
    let delivered = Arc::new(std::sync::Mutex::new(Vec::new()));
    let consumer = FlakyConsumer { fail_times: 2, attempts: AtomicUsize::new(0), delivered: delivered.clone() };
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let clock = FakeClock::new(1000);
    tx.send(ConsumerMessage::Check(service_check("foo", 1000))).unwrap();
    tx.send(ConsumerMessage::Shutdown).unwrap();

    run_queued_worker(
        "test",
        &consumer,
        rx,
        RetryPolicy { stale_age: 300, max_retry: -1, retry_delay: 0 },
        clock,
        CancellationToken::new(),
    )
    .await;

    assert_eq!(delivered.lock().unwrap().as_slice(), ["foo"]);
    assert_eq!(consumer.attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn max_retry_zero_drops_on_first_failure() {
    let delivered = Arc::new(std::sync::Mutex::new(Vec::new()));
    let consumer = FlakyConsumer { fail_times: usize::MAX, attempts: AtomicUsize::new(0), delivered: delivered.clone() };
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let clock = FakeClock::new(1000);
    tx.send(ConsumerMessage::Check(service_check("foo", 1000))).unwrap();
    tx.send(ConsumerMessage::Shutdown).unwrap();

    run_queued_worker(
        "test",
        &consumer,
        rx,
        RetryPolicy { stale_age: 300, max_retry: 0, retry_delay: 0 },
        clock,
        CancellationToken::new(),
    )
    .await;

    assert!(delivered.lock().unwrap().is_empty());
    assert_eq!(consumer.attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn shutdown_sentinel_stops_the_loop_without_draining_further_items() {
    let delivered = Arc::new(std::sync::Mutex::new(Vec::new()));
    let consumer = FlakyConsumer { fail_times: 0, attempts: AtomicUsize::new(0), delivered: delivered.clone() };
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    tx.send(ConsumerMessage::Shutdown).unwrap();
    tx.send(ConsumerMessage::Check(service_check("should-not-arrive", 1000))).unwrap();

    run_queued_worker("test", &consumer, rx, RetryPolicy::default(), FakeClock::new(1000), CancellationToken::new()).await;

    assert!(delivered.lock().unwrap().is_empty());
}
