use crate::neuron::NeuronKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome status of a dispatched task
///
/// Processing has no failure path; the only status a report can carry is
/// `Completed`. Resolution failures never produce a report at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Completed,
}

/// Immutable outcome of one dispatched task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReport {
    pub task: String,
    pub status: TaskStatus,
    pub neuron: String,
    pub strategy: NeuronKind,
    pub metadata: ReportMetadata,
}

/// Execution metadata attached to a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub duration_ms: u64,
    pub finished_at: DateTime<Utc>,
}
