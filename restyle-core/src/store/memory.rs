//! In-memory store for tests. Round-trips through the record encoding so it
//! exercises the same shape mapping as the real stores, and can be told to
//! fail the next save to test the save-failure policy.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use crate::store::error::StoreError;
use crate::store::record::{self, StylesDocument};
use crate::store::StyleStore;
use crate::style::model::StyleCollection;

#[derive(Clone, Default)]
pub struct MemoryStore {
    stored: Arc<Mutex<Vec<record::StyleRecord>>>,
    fail_next_save: Arc<Mutex<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles(styles: &StyleCollection) -> Self {
        let store = Self::new();
        *store.stored.lock().unwrap() = record::encode(styles);
        store
    }

    pub fn fail_next_save(&self) {
        *self.fail_next_save.lock().unwrap() = true;
    }

    /// The durably-stored collection, decoded fresh.
    pub fn stored(&self) -> StyleCollection {
        let records = self.stored.lock().unwrap().clone();
        let document = StylesDocument::List(records.into_iter().map(Some).collect());
        record::decode(document).expect("memory store holds an encodable document")
    }
}

#[async_trait::async_trait]
impl StyleStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn load_styles(&self) -> Result<StyleCollection, StoreError> {
        Ok(self.stored())
    }

    async fn save_styles(&self, styles: &StyleCollection) -> Result<(), StoreError> {
        let mut fail = self.fail_next_save.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(StoreError::Transport(anyhow!("injected save failure")));
        }

        *self.stored.lock().unwrap() = record::encode(styles);
        Ok(())
    }
}
