use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("engine rejected update options: {0}")]
    Construction(anyhow::Error),

    #[error("failed to apply dependency updates: {0}")]
    Reification(anyhow::Error),

    #[error("failed to finalize update state: {0}")]
    Finalization(anyhow::Error),
}
