use thiserror::Error;

use crate::types::StateId;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The driver reached a state nobody bound a handler for.
    #[error("no handler bound for state {0}")]
    UnboundState(StateId),

    #[error("handler for state {state} failed")]
    Handler {
        state: StateId,
        #[source]
        source: anyhow::Error,
    },

    #[error("terminal driver failed")]
    Terminal(#[source] anyhow::Error),
}
