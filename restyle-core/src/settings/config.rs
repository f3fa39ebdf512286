use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::completion::mock::MockBehavior;

/// Which document store holds the style collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreConfig {
    #[serde(rename = "file")]
    File {
        /// Overrides the default of ~/.restyle/styles.json
        #[serde(default)]
        path: Option<PathBuf>,
    },
    #[serde(rename = "firebase")]
    Firebase {
        database_url: String,

        /// Environment variable holding the database auth secret. Keeping
        /// the secret out of the settings file lets one file serve both
        /// local and hosted deployments.
        #[serde(default = "default_auth_env")]
        auth_env: String,
    },
}

fn default_auth_env() -> String {
    "RESTYLE_FIREBASE_AUTH".to_string()
}

/// Which completion service performs conversions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CompletionConfig {
    #[serde(rename = "openai")]
    OpenAi {
        /// Falls back to the OPENAI_API_KEY environment variable
        #[serde(default)]
        api_key: Option<String>,

        #[serde(default = "default_model")]
        model: String,

        #[serde(default = "default_temperature")]
        temperature: f32,
    },
    #[serde(rename = "mock")]
    Mock {
        #[serde(default)]
        behavior: MockBehavior,
    },
}

fn default_model() -> String {
    "gpt-4.1".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

/// Core application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_store")]
    pub store: StoreConfig,

    #[serde(default = "default_completion")]
    pub completion: CompletionConfig,
}

fn default_store() -> StoreConfig {
    StoreConfig::File { path: None }
}

fn default_completion() -> CompletionConfig {
    CompletionConfig::OpenAi {
        api_key: None,
        model: default_model(),
        temperature: default_temperature(),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store: default_store(),
            completion: default_completion(),
        }
    }
}
