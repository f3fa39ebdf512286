use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::completion::error::CompletionError;
use crate::completion::provider::{ChunkStream, CompletionProvider, ConversionRequest};

/// Scripted behavior for the mock provider
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MockBehavior {
    /// Echo the request text back as a single chunk
    #[default]
    Echo,
    /// Stream a fixed script of chunks
    Chunks { chunks: Vec<String> },
    /// Fail before the stream starts
    FailOnRequest,
    /// Yield one chunk, then fail mid-stream
    FailMidStream { first_chunk: String },
}

/// Mock completion provider for testing
#[derive(Clone)]
pub struct MockProvider {
    behavior: MockBehavior,
    captured_requests: Arc<Mutex<Vec<ConversionRequest>>>,
}

impl MockProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn captured_requests(&self) -> Vec<ConversionRequest> {
        self.captured_requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &'static str {
        "Mock"
    }

    async fn convert_stream(
        &self,
        request: ConversionRequest,
    ) -> Result<ChunkStream, CompletionError> {
        self.captured_requests.lock().unwrap().push(request.clone());

        let items: Vec<Result<String, CompletionError>> = match &self.behavior {
            MockBehavior::Echo => vec![Ok(request.text)],
            MockBehavior::Chunks { chunks } => chunks.iter().cloned().map(Ok).collect(),
            MockBehavior::FailOnRequest => {
                return Err(CompletionError::Terminal(anyhow!("mock request failure")));
            }
            MockBehavior::FailMidStream { first_chunk } => vec![
                Ok(first_chunk.clone()),
                Err(CompletionError::Retryable(anyhow!("mock stream failure"))),
            ],
        };

        Ok(Box::pin(tokio_stream::iter(items)))
    }
}
