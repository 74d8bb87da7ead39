//! Core abstractions for the neuron dispatch engine
//!
//! This crate provides the fundamental types that the runtime depends on:
//! neurons and their kind/status taxonomy, task reports, the error types,
//! execution events, and the latency abstraction used to simulate processing
//! time.

mod error;
mod events;
mod latency;
mod neuron;
mod report;

pub use error::{ChainError, DispatchError, NeuronError};
pub use events::{DispatchEvent, EventBus, ExecutionId};
pub use latency::{Latency, NoLatency, SimulatedLatency};
pub use neuron::{KindProfile, Neuron, NeuronKind, NeuronSnapshot, NeuronStatus};
pub use report::{ReportMetadata, TaskReport, TaskStatus};

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, NeuronError>;
