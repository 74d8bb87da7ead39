use chrono::Utc;
use neuroncore::{
    DispatchError, DispatchEvent, EventBus, Latency, Neuron, NeuronKind, NeuronSnapshot,
    SimulatedLatency, TaskReport,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Name the primary built-in resolves under
pub const PRIMARY_NAME: &str = "primary";
/// Name the secondary built-in resolves under
pub const SECONDARY_NAME: &str = "secondary";

const EVENT_BUFFER_SIZE: usize = 1000;

/// Direction of a relay between the two built-ins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayMode {
    PrimaryToSecondary,
    SecondaryToPrimary,
}

/// Name-to-neuron resolver and dispatch entry point
///
/// Holds the two fixed built-ins plus a growing set of custom neurons. A
/// name, once resolved, maps to the same neuron instance for the registry's
/// lifetime.
pub struct NeuronRegistry {
    primary: Arc<Neuron>,
    secondary: Arc<Neuron>,
    customs: RwLock<BTreeMap<String, Arc<Neuron>>>,
    latency: Arc<dyn Latency>,
    events: Arc<EventBus>,
}

impl NeuronRegistry {
    /// Create a registry whose neurons suspend on the tokio timer
    pub fn new() -> Self {
        Self::with_latency(Arc::new(SimulatedLatency))
    }

    /// Create a registry with a custom suspension source
    pub fn with_latency(latency: Arc<dyn Latency>) -> Self {
        Self {
            primary: Arc::new(Neuron::new(PRIMARY_NAME, NeuronKind::Primary, latency.clone())),
            secondary: Arc::new(Neuron::new(
                SECONDARY_NAME,
                NeuronKind::Secondary,
                latency.clone(),
            )),
            customs: RwLock::new(BTreeMap::new()),
            latency,
            events: Arc::new(EventBus::new(EVENT_BUFFER_SIZE)),
        }
    }

    /// Get the event bus for direct access
    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// Subscribe to dispatch events
    pub fn subscribe_events(&self) -> broadcast::Receiver<DispatchEvent> {
        self.events.subscribe()
    }

    /// Add a custom neuron under `name` if absent
    ///
    /// Idempotent: re-registering an existing name is a no-op and preserves
    /// the neuron's accumulated state.
    pub async fn register_custom(&self, name: &str) {
        let mut customs = self.customs.write().await;
        if !customs.contains_key(name) {
            tracing::info!(neuron = name, "registering custom neuron");
            customs.insert(
                name.to_string(),
                Arc::new(Neuron::new(name, NeuronKind::Custom, self.latency.clone())),
            );
        }
    }

    /// Look up a neuron by exact name; built-ins first, then customs
    pub async fn resolve(&self, name: &str) -> Option<Arc<Neuron>> {
        match name {
            PRIMARY_NAME => Some(self.primary.clone()),
            SECONDARY_NAME => Some(self.secondary.clone()),
            _ => self.customs.read().await.get(name).cloned(),
        }
    }

    /// Execute one task on the named neuron
    ///
    /// A resolution miss is the only failure and comes back as an error
    /// value; processing itself always succeeds.
    pub async fn dispatch(
        &self,
        task: &str,
        neuron_name: &str,
    ) -> Result<TaskReport, DispatchError> {
        let Some(neuron) = self.resolve(neuron_name).await else {
            tracing::warn!(neuron = neuron_name, task, "dispatch to unknown neuron");
            let error = DispatchError::NeuronNotFound(neuron_name.to_string());
            self.events.emit(DispatchEvent::TaskRejected {
                neuron: neuron_name.to_string(),
                task: task.to_string(),
                error: error.to_string(),
                timestamp: Utc::now(),
            });
            return Err(error);
        };

        Ok(self.dispatch_to(&neuron, task).await)
    }

    /// Relay tasks between the two built-ins
    ///
    /// Each input task produces two reports: the first leg processes the
    /// task as given, the second leg processes a label derived from it
    /// (`validate_<task>` or `execute_<task>` depending on direction).
    pub async fn relay_tasks(&self, tasks: &[&str], mode: RelayMode) -> Vec<TaskReport> {
        let mut reports = Vec::with_capacity(tasks.len() * 2);
        for task in tasks {
            match mode {
                RelayMode::PrimaryToSecondary => {
                    reports.push(self.dispatch_to(&self.primary, task).await);
                    reports
                        .push(self.dispatch_to(&self.secondary, &format!("validate_{task}")).await);
                }
                RelayMode::SecondaryToPrimary => {
                    reports.push(self.dispatch_to(&self.secondary, task).await);
                    reports
                        .push(self.dispatch_to(&self.primary, &format!("execute_{task}")).await);
                }
            }
        }
        reports
    }

    /// Status of every neuron: built-ins first, then customs in name order
    pub async fn status_snapshot(&self) -> Vec<NeuronSnapshot> {
        let customs = self.customs.read().await;
        let mut snapshots = Vec::with_capacity(2 + customs.len());
        snapshots.push(self.primary.snapshot().await);
        snapshots.push(self.secondary.snapshot().await);
        for neuron in customs.values() {
            snapshots.push(neuron.snapshot().await);
        }
        snapshots
    }

    async fn dispatch_to(&self, neuron: &Neuron, task: &str) -> TaskReport {
        self.events.emit(DispatchEvent::TaskStarted {
            neuron: neuron.name().to_string(),
            task: task.to_string(),
            timestamp: Utc::now(),
        });

        let report = neuron.process(task).await;

        tracing::info!(
            neuron = neuron.name(),
            task,
            duration_ms = report.metadata.duration_ms,
            "task completed"
        );
        self.events.emit(DispatchEvent::TaskCompleted {
            neuron: neuron.name().to_string(),
            task: task.to_string(),
            duration_ms: report.metadata.duration_ms,
            timestamp: Utc::now(),
        });

        report
    }
}

impl Default for NeuronRegistry {
    fn default() -> Self {
        Self::new()
    }
}
