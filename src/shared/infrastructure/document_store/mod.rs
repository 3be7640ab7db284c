// Document store port: collections of JSON documents addressed by id.
//
// Purpose
// - Give the repositories one abstraction over both the local store and the
//   hosted mirror.
//
// Semantics
// - `merge` deep-merges JSON objects field by field, creating the document if
//   absent. Non-object values replace. Last write wins.
// - `create` writes only when no document holds the id yet, atomically with
//   respect to every other call on the same store.
// - `list` returns documents ordered by id.

use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Json>, DocumentStoreError>;
    async fn set(
        &self,
        collection: &str,
        id: &str,
        document: Json,
    ) -> Result<(), DocumentStoreError>;
    async fn merge(
        &self,
        collection: &str,
        id: &str,
        patch: Json,
    ) -> Result<(), DocumentStoreError>;
    /// Returns `false`, leaving the stored document alone, when the id is taken.
    async fn create(
        &self,
        collection: &str,
        id: &str,
        document: Json,
    ) -> Result<bool, DocumentStoreError>;
    async fn delete(&self, collection: &str, id: &str) -> Result<bool, DocumentStoreError>;
    async fn list(&self, collection: &str) -> Result<Vec<(String, Json)>, DocumentStoreError>;
}

pub fn merge_json(target: &mut Json, patch: Json) {
    match (target, patch) {
        (Json::Object(target), Json::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}

pub mod in_memory;
pub mod json_file;
