use std::pin::Pin;

use tokio_stream::Stream;

use crate::completion::error::CompletionError;
use crate::prompt;
use crate::style::error::StyleError;
use crate::style::model::Style;

/// The ordered pair a completion service consumes: the compiled system
/// prompt and the user text to convert.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub system_prompt: String,
    pub text: String,
}

impl ConversionRequest {
    /// Builds a request for converting `text` into `style`. Invalid examples
    /// are filtered out here so stale blank entries in storage do not abort
    /// the conversion; compiling the raw style stays available to call sites
    /// that want the integrity check instead.
    pub fn for_style(style: &Style, text: impl Into<String>) -> Result<Self, StyleError> {
        Ok(Self {
            system_prompt: prompt::conversion_system_prompt(&style.filtered())?,
            text: text.into(),
        })
    }
}

/// A lazy, finite, non-restartable sequence of text chunks whose
/// concatenation is the full converted text. Chunk order is arrival order;
/// consumers append, never reorder.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<String, CompletionError>> + Send>>;

#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Starts a conversion and returns its chunk stream. There is no
    /// cancellation: callers drop the stream and start fresh for a new
    /// conversion.
    async fn convert_stream(&self, request: ConversionRequest)
        -> Result<ChunkStream, CompletionError>;
}
