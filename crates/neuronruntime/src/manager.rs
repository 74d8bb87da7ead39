use crate::chain::{ChainRun, StepInfo, TaskChain, UnresolvedPolicy};
use crate::registry::NeuronRegistry;
use neuroncore::ChainError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Named collection of chains sharing one registry
pub struct WorkflowManager {
    registry: Arc<NeuronRegistry>,
    chains: RwLock<HashMap<String, Arc<RwLock<TaskChain>>>>,
}

impl WorkflowManager {
    /// Create a manager with its own registry
    pub fn new() -> Self {
        Self::with_registry(Arc::new(NeuronRegistry::new()))
    }

    /// Create a manager over an existing registry
    pub fn with_registry(registry: Arc<NeuronRegistry>) -> Self {
        Self {
            registry,
            chains: RwLock::new(HashMap::new()),
        }
    }

    /// The registry shared by every chain this manager owns
    pub fn registry(&self) -> &Arc<NeuronRegistry> {
        &self.registry
    }

    /// Get or create the chain registered under `name`
    ///
    /// An existing name returns a handle to the same chain.
    pub async fn create(&self, name: &str) -> ChainHandle {
        let mut chains = self.chains.write().await;
        let chain = chains.entry(name.to_string()).or_insert_with(|| {
            tracing::info!(workflow = name, "creating workflow");
            Arc::new(RwLock::new(TaskChain::new(self.registry.clone())))
        });
        ChainHandle {
            inner: chain.clone(),
        }
    }

    /// Look up an existing chain by name
    pub async fn get(&self, name: &str) -> Option<ChainHandle> {
        let chains = self.chains.read().await;
        chains.get(name).map(|chain| ChainHandle {
            inner: chain.clone(),
        })
    }

    /// Execute the chain registered under `name` to completion
    ///
    /// An unknown name yields an empty run, not an error.
    pub async fn execute(&self, name: &str) -> neuroncore::Result<ChainRun> {
        let chain = {
            let chains = self.chains.read().await;
            chains.get(name).cloned()
        };

        match chain {
            Some(chain) => {
                let chain = chain.read().await;
                Ok(chain.execute().await?)
            }
            None => {
                tracing::warn!(workflow = name, "executing unknown workflow");
                Ok(ChainRun::empty())
            }
        }
    }

    /// Registered workflow names, sorted
    pub async fn list_names(&self) -> Vec<String> {
        let chains = self.chains.read().await;
        let mut names: Vec<String> = chains.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for WorkflowManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheaply cloneable handle to a chain owned by a manager
#[derive(Clone)]
pub struct ChainHandle {
    inner: Arc<RwLock<TaskChain>>,
}

impl ChainHandle {
    pub async fn append_step(&self, neuron: impl Into<String>, task: impl Into<String>) {
        let mut chain = self.inner.write().await;
        chain.append_step(neuron, task);
    }

    pub async fn set_unresolved_policy(&self, policy: UnresolvedPolicy) {
        let mut chain = self.inner.write().await;
        chain.set_unresolved_policy(policy);
    }

    pub async fn describe(&self) -> Vec<StepInfo> {
        let chain = self.inner.read().await;
        chain.describe()
    }

    pub async fn execute(&self) -> Result<ChainRun, ChainError> {
        let chain = self.inner.read().await;
        chain.execute().await
    }
}
