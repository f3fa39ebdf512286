use anyhow::anyhow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Retryable error: {0}")]
    Retryable(anyhow::Error),

    #[error("Terminal error: {0}")]
    Terminal(anyhow::Error),
}

impl From<serde_json::Error> for CompletionError {
    fn from(source: serde_json::Error) -> Self {
        Self::Terminal(anyhow!(source))
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_timeout() || source.is_connect() {
            Self::Retryable(anyhow!(source))
        } else {
            Self::Terminal(anyhow!(source))
        }
    }
}
