use super::*;
use sauna_core::FakeClock;
use std::sync::Arc;

struct RecordingConsumer {
    batches: Arc<std::sync::Mutex<Vec<Vec<String>>>>,
}

#[async_trait::async_trait]
impl PushConsumer for RecordingConsumer {
    async fn send(&self, check: &ServiceCheck) -> Result<(), sauna_core::SendError> {
        self.batches.lock().unwrap().push(vec![check.name.clone()]);
        Ok(())
    }

    async fn send_batch(&self, checks: &[ServiceCheck]) -> Result<(), sauna_core::SendError> {
        self.batches.lock().unwrap().push(checks.iter().map(|c| c.name.clone()).collect());
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
async fn flushes_when_max_batch_size_is_reached() {
    let batches = Arc::new(std::sync::Mutex::new(Vec::new()));
    let consumer = RecordingConsumer { batches: batches.clone() };
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    for name in ["a", "b"] {
        tx.send(ConsumerMessage::Check(service_check(name, 1000))).unwrap();
    }
    tx.send(ConsumerMessage::Shutdown).unwrap();

    run_batched_worker(
        "test",
        &consumer,
        rx,
        BatchPolicy { max_batch_size: 2, max_batch_delay: 9999 },
        RetryPolicy::default(),
        FakeClock::new(1000),
        CancellationToken::new(),
    )
    .await;

    assert_eq!(batches.lock().unwrap().as_slice(), [vec!["a".to_string(), "b".to_string()]]);
}

#[tokio::test]
async fn shutdown_flushes_a_partial_batch() {
    let batches = Arc::new(std::sync::Mutex::new(Vec::new()));
    let consumer = RecordingConsumer { batches: batches.clone() };
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    tx.send(ConsumerMessage::Check(service_check("a", 1000))).unwrap();
    tx.send(ConsumerMessage::Shutdown).unwrap();

    run_batched_worker(
        "test",
        &consumer,
        rx,
        BatchPolicy { max_batch_size: 64, max_batch_delay: 9999 },
        RetryPolicy::default(),
        FakeClock::new(1000),
        CancellationToken::new(),
    )
    .await;

    assert_eq!(batches.lock().unwrap().as_slice(), [vec!["a".to_string()]]);
}

#[tokio::test]
async fn staleness_is_checked_against_the_last_item_in_the_batch() {
    let batches = Arc::new(std::sync::Mutex::new(Vec::new()));
    let consumer = RecordingConsumer { batches: batches.clone() };
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    tx.send(ConsumerMessage::Check(service_check("stale-batch", 700))).unwrap();
    tx.send(ConsumerMessage::Shutdown).unwrap();

    run_batched_worker(
        "test",
        &consumer,
        rx,
        BatchPolicy { max_batch_size: 64, max_batch_delay: 9999 },
        RetryPolicy { stale_age: 10, ..Default::default() },
        FakeClock::new(1000),
        CancellationToken::new(),
    )
    .await;

    assert!(batches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_buffer_on_channel_close_flushes_nothing() {
    let batches = Arc::new(std::sync::Mutex::new(Vec::new()));
    let consumer = RecordingConsumer { batches: batches.clone() };
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    drop(tx);

    run_batched_worker(
        "test",
        &consumer,
        rx,
        BatchPolicy::default(),
        RetryPolicy::default(),
        FakeClock::new(1000),
        CancellationToken::new(),
    )
    .await;

    assert!(batches.lock().unwrap().is_empty());
}
