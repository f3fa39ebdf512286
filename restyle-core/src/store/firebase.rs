//! Remote document store over the Firebase Realtime Database REST surface.
//!
//! The collection lives at `/styles`. `PUT` replaces the node in full, which
//! gives whole-collection saves the delete-then-rewrite semantics the model
//! relies on: stale positional keys from a previous save cannot survive.

use std::time::Duration;

use anyhow::anyhow;
use reqwest::Client;
use tracing::debug;

use crate::store::error::StoreError;
use crate::store::record::{self, StylesDocument};
use crate::store::StyleStore;
use crate::style::model::StyleCollection;

pub struct FirebaseStore {
    client: Client,
    database_url: String,
    auth: Option<String>,
}

impl FirebaseStore {
    pub fn new(database_url: String, auth: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            database_url: database_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    fn styles_url(&self) -> String {
        match &self.auth {
            Some(auth) => format!("{}/styles.json?auth={auth}", self.database_url),
            None => format!("{}/styles.json", self.database_url),
        }
    }
}

#[async_trait::async_trait]
impl StyleStore for FirebaseStore {
    fn name(&self) -> &'static str {
        "firebase"
    }

    async fn load_styles(&self) -> Result<StyleCollection, StoreError> {
        debug!(url = %self.database_url, "loading styles");

        let response = self.client.get(self.styles_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Transport(anyhow!(
                "style load returned {status}: {body}"
            )));
        }

        // An absent node reads back as JSON `null`.
        let document: Option<StylesDocument> = response.json().await?;
        match document {
            Some(document) => record::decode(document),
            None => Ok(StyleCollection::new()),
        }
    }

    async fn save_styles(&self, styles: &StyleCollection) -> Result<(), StoreError> {
        debug!(url = %self.database_url, count = styles.len(), "saving styles");

        let response = self
            .client
            .put(self.styles_url())
            .json(&record::encode(styles))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Transport(anyhow!(
                "style save returned {status}: {body}"
            )));
        }

        Ok(())
    }
}
