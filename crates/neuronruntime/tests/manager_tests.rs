use neuroncore::{NeuronKind, NoLatency, TaskStatus};
use neuronruntime::{NeuronRegistry, WorkflowManager};
use std::sync::Arc;

fn fast_manager() -> WorkflowManager {
    WorkflowManager::with_registry(Arc::new(NeuronRegistry::with_latency(Arc::new(NoLatency))))
}

#[tokio::test]
async fn create_is_get_or_create() {
    let manager = fast_manager();

    let chain = manager.create("audit").await;
    chain.append_step("primary", "scan").await;

    // Creating the same name again hands back the same chain.
    let again = manager.create("audit").await;
    assert_eq!(again.describe().await.len(), 1);
}

#[tokio::test]
async fn get_unknown_returns_none() {
    let manager = fast_manager();
    assert!(manager.get("missing").await.is_none());
}

#[tokio::test]
async fn execute_unknown_yields_an_empty_run() {
    let manager = fast_manager();

    let run = manager.execute("missing").await.expect("not an error");
    assert!(run.outcomes.is_empty());
    assert_eq!(run.total_steps, 0);
}

#[tokio::test]
async fn list_names_enumerates_each_name_once() {
    let manager = fast_manager();
    manager.create("b").await;
    manager.create("a").await;
    manager.create("a").await;

    assert_eq!(manager.list_names().await, vec!["a", "b"]);
}

#[tokio::test]
async fn audit_workflow_end_to_end() {
    let manager = fast_manager();

    let audit = manager.create("audit").await;
    audit.append_step("primary", "scan").await;
    audit.append_step("secondary", "report").await;

    let run = manager.execute("audit").await.expect("workflow runs");

    let reports: Vec<_> = run.reports().collect();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].task, "scan");
    assert_eq!(reports[0].strategy, NeuronKind::Primary);
    assert_eq!(reports[1].task, "report");
    assert_eq!(reports[1].strategy, NeuronKind::Secondary);
    assert!(reports.iter().all(|r| r.status == TaskStatus::Completed));
}

#[tokio::test]
async fn chains_share_the_manager_registry() {
    let manager = fast_manager();
    manager.registry().register_custom("ops").await;

    let first = manager.create("first").await;
    first.append_step("ops", "collect").await;
    let second = manager.create("second").await;
    second.append_step("ops", "publish").await;

    manager.execute("first").await.expect("first runs");
    manager.execute("second").await.expect("second runs");

    // One neuron served both workflows; its counter accumulated twice.
    let ops = manager.registry().resolve("ops").await.expect("registered");
    assert_eq!(ops.snapshot().await.uptime, 16);
}

#[tokio::test]
async fn handles_point_at_the_live_chain() {
    let manager = fast_manager();

    let handle = manager.create("audit").await;
    let same = manager.get("audit").await.expect("exists");
    same.append_step("primary", "scan").await;

    // The step appended through one handle is visible through the other.
    assert_eq!(handle.describe().await.len(), 1);
}
