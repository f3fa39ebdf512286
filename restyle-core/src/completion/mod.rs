pub mod error;
pub mod mock;
pub mod openai;
pub mod provider;


pub use error::CompletionError;
pub use provider::{ChunkStream, CompletionProvider, ConversionRequest};

use crate::settings::config::CompletionConfig;
use anyhow::{Context, Result};

pub fn from_config(config: &CompletionConfig) -> Result<Box<dyn CompletionProvider>> {
    match config {
        CompletionConfig::OpenAi {
            api_key,
            model,
            temperature,
        } => {
            let api_key = match api_key {
                Some(key) => key.clone(),
                None => std::env::var("OPENAI_API_KEY")
                    .context("no api_key configured and OPENAI_API_KEY is not set")?,
            };
            Ok(Box::new(openai::OpenAiProvider::new(
                api_key,
                model.clone(),
                *temperature,
            )))
        }
        CompletionConfig::Mock { behavior } => {
            Ok(Box::new(mock::MockProvider::new(behavior.clone())))
        }
    }
}
