//! Dispatch runtime for neurons
//!
//! This crate provides the registry that resolves names to neurons and
//! dispatches tasks to them, sequential task chains, and the workflow
//! manager that names and owns chains over one shared registry.

mod chain;
mod manager;
mod registry;

pub use chain::{
    ChainRun, ChainSettings, ChainStep, StepInfo, StepOutcome, TaskChain, UnresolvedPolicy,
};
pub use manager::{ChainHandle, WorkflowManager};
pub use registry::{NeuronRegistry, RelayMode, PRIMARY_NAME, SECONDARY_NAME};
