//! Local JSON-document store used for development and tests. Shares the
//! positional record shape with the remote store so documents move between
//! the two unchanged.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tokio::fs;

use crate::store::error::StoreError;
use crate::store::record::{self, StylesDocument};
use crate::store::StyleStore;
use crate::style::model::StyleCollection;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// `path` overrides the default location of `~/.restyle/styles.json`.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let home = dirs::home_dir().context("failed to get home directory")?;
                home.join(".restyle").join("styles.json")
            }
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait::async_trait]
impl StyleStore for FileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn load_styles(&self) -> Result<StyleCollection, StoreError> {
        if !self.path.exists() {
            return Ok(StyleCollection::new());
        }

        let contents = fs::read_to_string(&self.path).await?;
        let document: Option<StylesDocument> = serde_json::from_str(&contents)?;

        match document {
            Some(document) => record::decode(document),
            None => Ok(StyleCollection::new()),
        }
    }

    async fn save_styles(&self, styles: &StyleCollection) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Transport(anyhow!("failed to create {parent:?}: {e}")))?;
        }

        let contents = serde_json::to_string_pretty(&record::encode(styles))?;
        fs::write(&self.path, contents).await?;

        Ok(())
    }
}
