// JSON file implementation of the DocumentStore port.
//
// Layout
// - One file per collection under the root directory, holding an object of
//   id -> document. Slashes in collection paths become dots in file names.
// - Writes go to a temporary file that is renamed over the original.
//
// A single lock serializes writers; readers share it.

use crate::shared::infrastructure::document_store::{DocumentStore, DocumentStoreError, merge_json};
use serde_json::Value as Json;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

type Documents = BTreeMap<String, Json>;

pub struct JsonFileDocumentStore {
    root: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileDocumentStore {
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, DocumentStoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self {
            root,
            lock: RwLock::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        let file_name: String = collection
            .chars()
            .map(|c| match c {
                '/' => '.',
                c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => c,
                _ => '_',
            })
            .collect();
        self.root.join(format!("{file_name}.json"))
    }

    async fn read_collection(&self, collection: &str) -> Result<Documents, DocumentStoreError> {
        match tokio::fs::read(self.path_for(collection)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Documents::new()),
            Err(error) => Err(error.into()),
        }
    }

    async fn write_collection(
        &self,
        collection: &str,
        documents: &Documents,
    ) -> Result<(), DocumentStoreError> {
        let path = self.path_for(collection);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(documents)?).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl DocumentStore for JsonFileDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Json>, DocumentStoreError> {
        let _guard = self.lock.read().await;
        Ok(self.read_collection(collection).await?.remove(id))
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        document: Json,
    ) -> Result<(), DocumentStoreError> {
        let _guard = self.lock.write().await;
        let mut documents = self.read_collection(collection).await?;
        documents.insert(id.to_string(), document);
        self.write_collection(collection, &documents).await
    }

    async fn merge(
        &self,
        collection: &str,
        id: &str,
        patch: Json,
    ) -> Result<(), DocumentStoreError> {
        let _guard = self.lock.write().await;
        let mut documents = self.read_collection(collection).await?;
        match documents.get_mut(id) {
            Some(existing) => merge_json(existing, patch),
            None => {
                documents.insert(id.to_string(), patch);
            }
        }
        self.write_collection(collection, &documents).await
    }

    async fn create(
        &self,
        collection: &str,
        id: &str,
        document: Json,
    ) -> Result<bool, DocumentStoreError> {
        let _guard = self.lock.write().await;
        let mut documents = self.read_collection(collection).await?;
        if documents.contains_key(id) {
            return Ok(false);
        }
        documents.insert(id.to_string(), document);
        self.write_collection(collection, &documents).await?;
        Ok(true)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, DocumentStoreError> {
        let _guard = self.lock.write().await;
        let mut documents = self.read_collection(collection).await?;
        if documents.remove(id).is_none() {
            return Ok(false);
        }
        self.write_collection(collection, &documents).await?;
        Ok(true)
    }

    async fn list(&self, collection: &str) -> Result<Vec<(String, Json)>, DocumentStoreError> {
        let _guard = self.lock.read().await;
        Ok(self.read_collection(collection).await?.into_iter().collect())
    }
}
