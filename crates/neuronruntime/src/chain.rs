use crate::registry::NeuronRegistry;
use chrono::Utc;
use neuroncore::{ChainError, DispatchEvent, ExecutionId, TaskReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// One (neuron, task) pair in a chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainStep {
    pub neuron: String,
    pub task: String,
}

/// Display projection of a step; positions are 1-based
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    pub position: usize,
    pub neuron: String,
    pub task: String,
}

/// What to do when a step names a neuron the registry cannot resolve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// Drop the step from the output and keep going
    #[default]
    Skip,
    /// Stop the chain with an error
    Abort,
    /// Keep going and record the miss in place
    CollectError,
}

/// Per-chain execution settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ChainSettings {
    pub on_unresolved: UnresolvedPolicy,
}

/// Outcome of one executed step
///
/// Serializes untagged: a completed step flattens to its report, an
/// unresolved one to `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepOutcome {
    Completed(TaskReport),
    Unresolved { error: String },
}

impl StepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed(_))
    }

    pub fn as_report(&self) -> Option<&TaskReport> {
        match self {
            StepOutcome::Completed(report) => Some(report),
            StepOutcome::Unresolved { .. } => None,
        }
    }
}

/// Result of one chain execution
#[derive(Debug, Clone, Serialize)]
pub struct ChainRun {
    pub execution_id: ExecutionId,
    pub outcomes: Vec<StepOutcome>,
    pub completed_steps: usize,
    pub total_steps: usize,
}

impl ChainRun {
    /// A run that touched no steps; what executing an unknown workflow yields
    pub(crate) fn empty() -> Self {
        Self {
            execution_id: ExecutionId::new_v4(),
            outcomes: Vec::new(),
            completed_steps: 0,
            total_steps: 0,
        }
    }

    /// Reports of the completed steps, in execution order
    pub fn reports(&self) -> impl Iterator<Item = &TaskReport> {
        self.outcomes.iter().filter_map(StepOutcome::as_report)
    }
}

/// Ordered list of (neuron, task) steps executed sequentially
///
/// Steps are appended without validation; whether a name resolves is only
/// decided at execution time, per step.
pub struct TaskChain {
    registry: Arc<NeuronRegistry>,
    steps: Vec<ChainStep>,
    settings: ChainSettings,
}

impl TaskChain {
    pub fn new(registry: Arc<NeuronRegistry>) -> Self {
        Self::with_settings(registry, ChainSettings::default())
    }

    pub fn with_settings(registry: Arc<NeuronRegistry>, settings: ChainSettings) -> Self {
        Self {
            registry,
            steps: Vec::new(),
            settings,
        }
    }

    pub fn append_step(&mut self, neuron: impl Into<String>, task: impl Into<String>) {
        self.steps.push(ChainStep {
            neuron: neuron.into(),
            task: task.into(),
        });
    }

    pub fn set_unresolved_policy(&mut self, policy: UnresolvedPolicy) {
        self.settings.on_unresolved = policy;
    }

    pub fn steps(&self) -> &[ChainStep] {
        &self.steps
    }

    /// Pure projection of the step list for display
    pub fn describe(&self) -> Vec<StepInfo> {
        self.steps
            .iter()
            .enumerate()
            .map(|(idx, step)| StepInfo {
                position: idx + 1,
                neuron: step.neuron.clone(),
                task: step.task.clone(),
            })
            .collect()
    }

    /// Execute every step in insertion order
    ///
    /// A later step is dispatched only after the previous step's report is
    /// produced. Unresolved steps follow the chain's `on_unresolved` policy.
    pub async fn execute(&self) -> Result<ChainRun, ChainError> {
        let execution_id = ExecutionId::new_v4();
        let started = Instant::now();

        self.registry.events().emit(DispatchEvent::ChainStarted {
            execution_id,
            total_steps: self.steps.len(),
            timestamp: Utc::now(),
        });
        tracing::info!(%execution_id, steps = self.steps.len(), "starting chain execution");

        let result = self.run_steps(execution_id).await;

        self.registry.events().emit(DispatchEvent::ChainCompleted {
            execution_id,
            success: result.is_ok(),
            duration_ms: started.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        });

        result
    }

    async fn run_steps(&self, execution_id: ExecutionId) -> Result<ChainRun, ChainError> {
        let mut outcomes = Vec::with_capacity(self.steps.len());

        for (idx, step) in self.steps.iter().enumerate() {
            let position = idx + 1;
            match self.registry.dispatch(&step.task, &step.neuron).await {
                Ok(report) => outcomes.push(StepOutcome::Completed(report)),
                Err(error) => match self.settings.on_unresolved {
                    UnresolvedPolicy::Skip => {
                        tracing::warn!(position, neuron = %step.neuron, "skipping unresolved step");
                        self.registry.events().emit(DispatchEvent::StepSkipped {
                            execution_id,
                            position,
                            neuron: step.neuron.clone(),
                            task: step.task.clone(),
                            timestamp: Utc::now(),
                        });
                    }
                    UnresolvedPolicy::Abort => {
                        return Err(ChainError::StepAborted {
                            position,
                            source: error,
                        });
                    }
                    UnresolvedPolicy::CollectError => {
                        outcomes.push(StepOutcome::Unresolved {
                            error: error.to_string(),
                        });
                    }
                },
            }
        }

        let completed_steps = outcomes.iter().filter(|o| o.is_completed()).count();
        Ok(ChainRun {
            execution_id,
            completed_steps,
            total_steps: self.steps.len(),
            outcomes,
        })
    }
}
