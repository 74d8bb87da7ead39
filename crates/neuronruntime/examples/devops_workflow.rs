//! Walkthrough of the dispatch engine: direct dispatch, custom neurons,
//! relays, and a named workflow over a shared registry.
//!
//! Run with: cargo run --example devops_workflow

use anyhow::Result;
use neuronruntime::{RelayMode, WorkflowManager};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let manager = WorkflowManager::new();
    let registry = manager.registry().clone();

    println!("=== Basic dispatch ===");
    let report = registry.dispatch("deploy_service", "primary").await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    let report = registry.dispatch("health_check", "secondary").await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!("\n=== Custom neuron ===");
    registry.register_custom("custom_ops").await;
    let report = registry.dispatch("custom_task", "custom_ops").await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!("\n=== Relay: primary -> secondary ===");
    for report in registry
        .relay_tasks(&["analyze_logs"], RelayMode::PrimaryToSecondary)
        .await
    {
        println!("  {} handled '{}' ({})", report.neuron, report.task, report.strategy);
    }

    println!("\n=== Workflow ===");
    let audit = manager.create("security_audit").await;
    audit.append_step("primary", "scan_vulnerabilities").await;
    audit.append_step("secondary", "report_findings").await;
    audit.append_step("primary", "patch_vulnerabilities").await;

    for info in audit.describe().await {
        println!("  {}. {} -> {}", info.position, info.neuron, info.task);
    }

    let run = manager.execute("security_audit").await?;
    println!(
        "completed {}/{} steps in execution {}",
        run.completed_steps, run.total_steps, run.execution_id
    );

    println!("\n=== Status ===");
    for snapshot in registry.status_snapshot().await {
        println!(
            "  {:<12} kind={:<9} status={:<10} uptime={}",
            snapshot.name, snapshot.kind, snapshot.status, snapshot.uptime
        );
    }

    Ok(())
}
