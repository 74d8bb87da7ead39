use crate::latency::Latency;
use crate::report::{ReportMetadata, TaskReport, TaskStatus};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

/// Behavioral variant of a neuron
///
/// A closed set: each kind carries its own processing constants and doubles
/// as the strategy tag on reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeuronKind {
    Primary,
    Secondary,
    Custom,
}

impl NeuronKind {
    /// Processing constants for this kind
    pub const fn profile(self) -> KindProfile {
        match self {
            NeuronKind::Primary => KindProfile {
                delay: Duration::from_millis(1500),
                uptime_increment: 10,
            },
            NeuronKind::Secondary => KindProfile {
                delay: Duration::from_millis(1000),
                uptime_increment: 5,
            },
            NeuronKind::Custom => KindProfile {
                delay: Duration::from_millis(2000),
                uptime_increment: 8,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            NeuronKind::Primary => "primary",
            NeuronKind::Secondary => "secondary",
            NeuronKind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for NeuronKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Per-kind processing constants
#[derive(Debug, Clone, Copy)]
pub struct KindProfile {
    pub delay: Duration,
    pub uptime_increment: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeuronStatus {
    Idle,
    Processing,
    Active,
}

impl NeuronStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            NeuronStatus::Idle => "idle",
            NeuronStatus::Processing => "processing",
            NeuronStatus::Active => "active",
        }
    }
}

impl std::fmt::Display for NeuronStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Point-in-time view of a neuron's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeuronSnapshot {
    pub name: String,
    pub kind: NeuronKind,
    pub status: NeuronStatus,
    pub uptime: u64,
}

#[derive(Debug)]
struct NeuronState {
    status: NeuronStatus,
    /// Fixed per-call counter, never reset. Historical name; it does not
    /// track wall-clock time.
    uptime: u64,
}

/// A named processing unit
///
/// State lives behind its own lock so status reads never wait on a neuron
/// that is mid-suspension; the turn lock serializes `process` calls, so
/// overlapping dispatches to the same neuron queue instead of interleaving
/// state writes.
pub struct Neuron {
    name: String,
    kind: NeuronKind,
    latency: Arc<dyn Latency>,
    state: RwLock<NeuronState>,
    turn: Mutex<()>,
}

impl Neuron {
    pub fn new(name: impl Into<String>, kind: NeuronKind, latency: Arc<dyn Latency>) -> Self {
        Self {
            name: name.into(),
            kind,
            latency,
            state: RwLock::new(NeuronState {
                status: NeuronStatus::Idle,
                uptime: 0,
            }),
            turn: Mutex::new(()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NeuronKind {
        self.kind
    }

    /// Process one task to completion
    ///
    /// Suspends for the kind's fixed delay, then records the kind's uptime
    /// increment. Every invocation succeeds.
    pub async fn process(&self, task: &str) -> TaskReport {
        let _turn = self.turn.lock().await;
        let profile = self.kind.profile();

        {
            let mut state = self.state.write().await;
            state.status = NeuronStatus::Processing;
        }

        tracing::debug!(neuron = %self.name, task, "processing");
        let started = Instant::now();
        self.latency.suspend(profile.delay).await;

        {
            let mut state = self.state.write().await;
            state.uptime += profile.uptime_increment;
            state.status = NeuronStatus::Active;
        }

        TaskReport {
            task: task.to_string(),
            status: TaskStatus::Completed,
            neuron: self.name.clone(),
            strategy: self.kind,
            metadata: ReportMetadata {
                duration_ms: started.elapsed().as_millis() as u64,
                finished_at: Utc::now(),
            },
        }
    }

    /// Current state; a pure read with no side effects
    pub async fn snapshot(&self) -> NeuronSnapshot {
        let state = self.state.read().await;
        NeuronSnapshot {
            name: self.name.clone(),
            kind: self.kind,
            status: state.status,
            uptime: state.uptime,
        }
    }
}
