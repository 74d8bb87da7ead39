use neuroncore::{Neuron, NeuronKind, NeuronStatus, NoLatency, SimulatedLatency, TaskStatus};
use std::sync::Arc;
use std::time::Duration;

// Helper: a neuron that suspends for zero time
fn fast_neuron(name: &str, kind: NeuronKind) -> Neuron {
    Neuron::new(name, kind, Arc::new(NoLatency))
}

#[tokio::test]
async fn process_returns_completed_report() {
    let neuron = fast_neuron("primary", NeuronKind::Primary);

    let report = neuron.process("deploy_service").await;

    assert_eq!(report.task, "deploy_service");
    assert_eq!(report.status, TaskStatus::Completed);
    assert_eq!(report.neuron, "primary");
    assert_eq!(report.strategy, NeuronKind::Primary);
}

#[tokio::test]
async fn strategy_tag_matches_kind() {
    for kind in [NeuronKind::Primary, NeuronKind::Secondary, NeuronKind::Custom] {
        let neuron = fast_neuron("n", kind);
        let report = neuron.process("task").await;
        assert_eq!(report.strategy, kind, "kind {kind} should tag its reports");
    }
}

#[tokio::test]
async fn uptime_accumulates_by_fixed_increment() {
    let primary = fast_neuron("primary", NeuronKind::Primary);
    primary.process("a").await;
    primary.process("b").await;
    assert_eq!(primary.snapshot().await.uptime, 20);

    let secondary = fast_neuron("secondary", NeuronKind::Secondary);
    secondary.process("a").await;
    assert_eq!(secondary.snapshot().await.uptime, 5);

    let custom = fast_neuron("ops", NeuronKind::Custom);
    custom.process("a").await;
    assert_eq!(custom.snapshot().await.uptime, 8);
}

#[tokio::test]
async fn status_moves_from_idle_to_active() {
    let neuron = fast_neuron("primary", NeuronKind::Primary);
    assert_eq!(neuron.snapshot().await.status, NeuronStatus::Idle);

    neuron.process("task").await;
    assert_eq!(neuron.snapshot().await.status, NeuronStatus::Active);
}

#[tokio::test]
async fn snapshot_is_a_pure_read() {
    let neuron = fast_neuron("primary", NeuronKind::Primary);
    neuron.process("task").await;

    let first = neuron.snapshot().await;
    let second = neuron.snapshot().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_process_calls_serialize() {
    let neuron = Arc::new(fast_neuron("primary", NeuronKind::Primary));

    let a = neuron.clone();
    let b = neuron.clone();
    let (r1, r2) = tokio::join!(a.process("first"), b.process("second"));

    assert_eq!(r1.status, TaskStatus::Completed);
    assert_eq!(r2.status, TaskStatus::Completed);
    // Both increments land; no interleaved state writes lose an update.
    assert_eq!(neuron.snapshot().await.uptime, 20);
}

#[tokio::test]
async fn report_serializes_with_lowercase_tags() {
    let neuron = fast_neuron("primary", NeuronKind::Primary);
    let report = neuron.process("scan").await;

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["task"], "scan");
    assert_eq!(json["status"], "completed");
    assert_eq!(json["neuron"], "primary");
    assert_eq!(json["strategy"], "primary");
}

#[tokio::test(start_paused = true)]
async fn simulated_delay_follows_kind_profile() {
    let cases = [
        (NeuronKind::Primary, 1500u64),
        (NeuronKind::Secondary, 1000),
        (NeuronKind::Custom, 2000),
    ];

    for (kind, expected_ms) in cases {
        let neuron = Neuron::new("n", kind, Arc::new(SimulatedLatency));
        let started = tokio::time::Instant::now();
        neuron.process("task").await;
        assert_eq!(
            started.elapsed(),
            Duration::from_millis(expected_ms),
            "kind {kind} should suspend for {expected_ms}ms",
        );
    }
}
