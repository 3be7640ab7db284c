// In memory implementation of the DocumentStore port.
//
// Purpose
// - Support handler tests and local development without touching disk.
// - Stand in for an unreachable hosted store via `toggle_offline`.

use crate::shared::infrastructure::document_store::{DocumentStore, DocumentStoreError, merge_json};
use serde_json::Value as Json;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tokio::sync::RwLock;

type Collections = BTreeMap<String, BTreeMap<String, Json>>;

#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<Collections>,
    is_offline: bool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), DocumentStoreError> {
        if self.is_offline {
            return Err(DocumentStoreError::Backend("Document store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Json>, DocumentStoreError> {
        self.ensure_online()?;
        let guard = self.collections.read().await;
        Ok(guard.get(collection).and_then(|docs| docs.get(id)).cloned())
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        document: Json,
    ) -> Result<(), DocumentStoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        guard
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
        Ok(())
    }

    async fn merge(
        &self,
        collection: &str,
        id: &str,
        patch: Json,
    ) -> Result<(), DocumentStoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection.to_string()).or_default();
        match docs.get_mut(id) {
            Some(existing) => merge_json(existing, patch),
            None => {
                docs.insert(id.to_string(), patch);
            }
        }
        Ok(())
    }

    async fn create(
        &self,
        collection: &str,
        id: &str,
        document: Json,
    ) -> Result<bool, DocumentStoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        match guard.entry(collection.to_string()).or_default().entry(id.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(document);
                Ok(true)
            }
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, DocumentStoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        Ok(guard
            .get_mut(collection)
            .is_some_and(|docs| docs.remove(id).is_some()))
    }

    async fn list(&self, collection: &str) -> Result<Vec<(String, Json)>, DocumentStoreError> {
        self.ensure_online()?;
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|docs| docs.iter().map(|(id, doc)| (id.clone(), doc.clone())).collect())
            .unwrap_or_default())
    }
}
