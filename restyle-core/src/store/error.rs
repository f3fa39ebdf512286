use anyhow::anyhow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The store was unreachable or the I/O failed.
    #[error("Transport error: {0}")]
    Transport(anyhow::Error),

    /// The store responded but the document did not match the expected shape.
    #[error("Format error: {0}")]
    Format(anyhow::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(source: serde_json::Error) -> Self {
        Self::Format(anyhow!(source))
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport(anyhow!(source))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(source: std::io::Error) -> Self {
        Self::Transport(anyhow!(source))
    }
}
