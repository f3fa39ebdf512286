use std::time::Duration;

use anyhow::anyhow;
use futures_util::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::completion::error::CompletionError;
use crate::completion::provider::{ChunkStream, CompletionProvider, ConversionRequest};

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: String, temperature: f32) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            model,
            temperature,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Deserialize, Default)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

/// Splits completed SSE lines out of `buffer` and maps `data:` payloads to
/// content chunks. Partial trailing lines stay in the buffer until the next
/// network read completes them.
fn drain_sse_lines(buffer: &mut String) -> Vec<Result<String, CompletionError>> {
    let mut out = Vec::new();

    while let Some(newline) = buffer.find('\n') {
        let line = buffer[..newline].trim().to_string();
        buffer.drain(..=newline);

        let Some(data) = line.strip_prefix("data:") else {
            continue;
        };
        let data = data.trim();
        if data == "[DONE]" {
            continue;
        }

        match serde_json::from_str::<StreamChunk>(data) {
            Ok(chunk) => {
                let content = chunk
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.delta.content);
                if let Some(content) = content {
                    if !content.is_empty() {
                        out.push(Ok(content));
                    }
                }
            }
            Err(e) => out.push(Err(CompletionError::Terminal(anyhow!(
                "failed to decode stream event: {e}"
            )))),
        }
    }

    out
}

#[async_trait::async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "OpenAI"
    }

    async fn convert_stream(
        &self,
        request: ConversionRequest,
    ) -> Result<ChunkStream, CompletionError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.text,
                },
            ],
            temperature: self.temperature,
            stream: true,
        };

        debug!(model = %self.model, "starting streaming conversion");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = anyhow!("completion API returned {status}: {body}");
            return Err(if status.is_server_error() || status.as_u16() == 429 {
                CompletionError::Retryable(error)
            } else {
                CompletionError::Terminal(error)
            });
        }

        let mut buffer = String::new();
        let chunks = response.bytes_stream().flat_map(move |read| {
            let events = match read {
                Ok(bytes) => {
                    buffer.push_str(&String::from_utf8_lossy(&bytes));
                    drain_sse_lines(&mut buffer)
                }
                Err(e) => vec![Err(CompletionError::from(e))],
            };
            futures_util::stream::iter(events)
        });

        Ok(Box::pin(chunks))
    }
}
