use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeuronError {
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("neuron '{0}' not found")]
    NeuronNotFound(String),
}

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("step {position} aborted: {source}")]
    StepAborted {
        position: usize,
        #[source]
        source: DispatchError,
    },
}
