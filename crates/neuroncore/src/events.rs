use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

pub type ExecutionId = Uuid;

/// Events emitted during task dispatch and chain execution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DispatchEvent {
    TaskStarted {
        neuron: String,
        task: String,
        timestamp: DateTime<Utc>,
    },
    TaskCompleted {
        neuron: String,
        task: String,
        duration_ms: u64,
        timestamp: DateTime<Utc>,
    },
    TaskRejected {
        neuron: String,
        task: String,
        error: String,
        timestamp: DateTime<Utc>,
    },
    ChainStarted {
        execution_id: ExecutionId,
        total_steps: usize,
        timestamp: DateTime<Utc>,
    },
    StepSkipped {
        execution_id: ExecutionId,
        position: usize,
        neuron: String,
        task: String,
        timestamp: DateTime<Utc>,
    },
    ChainCompleted {
        execution_id: ExecutionId,
        success: bool,
        duration_ms: u64,
        timestamp: DateTime<Utc>,
    },
}

/// Broadcast bus for dispatch events
///
/// Emitting with no subscribers drops the event.
pub struct EventBus {
    sender: broadcast::Sender<DispatchEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DispatchEvent> {
        self.sender.subscribe()
    }

    pub fn emit(&self, event: DispatchEvent) {
        let _ = self.sender.send(event);
    }
}
