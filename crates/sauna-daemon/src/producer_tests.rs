use super::*;
use sauna_core::{CheckId, FakeClock, Status};
use sauna_scheduler::ScheduledCheck;
use serde_json::Map;

fn ok_check(name: &str, periodicity: u64) -> Check {
    fn function(_: &sauna_core::CheckParams) -> sauna_core::CheckOutcome {
        Ok((Status::Ok, "fine".to_string()))
    }
    Check::new(name, periodicity, function, Map::new())
}

#[tokio::test]
async fn tick_zero_runs_immediately_and_shutdown_sends_sentinel() {
    let checks = vec![ok_check("disk", 60)];
    let scheduler = Scheduler::new(vec![ScheduledCheck { id: CheckId::new("disk"), periodicity: 60 }]);
    let store = ResultStore::new();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let shutdown = CancellationToken::new();

    let shutdown_clone = shutdown.clone();
    let handle = tokio::spawn(run(scheduler, checks, "host".to_string(), store.clone(), vec![tx], FakeClock::new(1000), shutdown_clone));

    let first = rx.recv().await.unwrap();
    assert!(matches!(first, ConsumerMessage::Check(check) if check.name == "disk"));
    assert!(store.get("disk").is_some());

    shutdown.cancel();
    handle.await.unwrap();

    let sentinel = rx.recv().await.unwrap();
    assert!(matches!(sentinel, ConsumerMessage::Shutdown));
}
