//! Persistence of the style collection.
//!
//! The store holds exactly one document: the whole collection. Every save
//! replaces the document in full from current in-memory order; there are no
//! partial or per-record writes, so a save never merges with stale content.

pub mod error;
pub mod file;
pub mod firebase;
pub mod memory;
pub mod record;

#[cfg(test)]
mod tests;

pub use error::StoreError;

use crate::settings::config::StoreConfig;
use crate::style::model::StyleCollection;
use anyhow::Result;

/// Contract the core requires of the document store.
#[async_trait::async_trait]
pub trait StyleStore: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetches the entire stored collection.
    async fn load_styles(&self) -> Result<StyleCollection, StoreError>;

    /// Replaces the entire stored collection. From the store's perspective
    /// this is a single logical write: prior content is fully superseded at
    /// both the style and example levels.
    async fn save_styles(&self, styles: &StyleCollection) -> Result<(), StoreError>;
}

/// Session-start load policy: a failed load degrades to an empty collection
/// so the session proceeds with zero styles instead of crashing. The failure
/// is logged for the presentation layer to surface as a notification.
pub async fn load_or_empty(store: &dyn StyleStore) -> StyleCollection {
    match store.load_styles().await {
        Ok(styles) => styles,
        Err(e) => {
            tracing::warn!("failed to load styles from {} store: {e}", store.name());
            StyleCollection::new()
        }
    }
}

pub fn from_config(config: &StoreConfig) -> Result<Box<dyn StyleStore>> {
    match config {
        StoreConfig::File { path } => Ok(Box::new(file::FileStore::new(path.clone())?)),
        StoreConfig::Firebase {
            database_url,
            auth_env,
        } => {
            let auth = std::env::var(auth_env).ok();
            Ok(Box::new(firebase::FirebaseStore::new(
                database_url.clone(),
                auth,
            )))
        }
    }
}
