// Day records persisted as documents, one per day key, under a room.
//
// Responsibilities
// - Load an owned snapshot of a room's record map.
// - Write a day with field-level merge, restore a prior version, clear a period.

use crate::modules::meal_log::core::record::{DayRecord, RecordMap};
use crate::shared::infrastructure::document_store::{DocumentStore, DocumentStoreError};
use std::sync::Arc;
use tracing::warn;

pub fn records_collection(room_id: &str) -> String {
    format!("rooms/{room_id}/records")
}

#[derive(Clone)]
pub struct DayRecordRepository {
    store: Arc<dyn DocumentStore>,
}

impl DayRecordRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Documents that cannot be read as a day record are skipped, not fatal.
    pub async fn load_all(&self, room_id: &str) -> Result<RecordMap, DocumentStoreError> {
        let documents = self.store.list(&records_collection(room_id)).await?;
        let mut records = RecordMap::new();
        for (key, document) in documents {
            match serde_json::from_value::<DayRecord>(document) {
                Ok(record) => {
                    records.insert(key, record);
                }
                Err(error) => warn!(room_id, %key, %error, "skipping unreadable day record"),
            }
        }
        Ok(records)
    }

    pub async fn load(
        &self,
        room_id: &str,
        key: &str,
    ) -> Result<Option<DayRecord>, DocumentStoreError> {
        let document = self.store.get(&records_collection(room_id), key).await?;
        Ok(document.map(serde_json::from_value::<DayRecord>).transpose()?)
    }

    pub async fn put(
        &self,
        room_id: &str,
        key: &str,
        record: &DayRecord,
    ) -> Result<(), DocumentStoreError> {
        let document = serde_json::to_value(record)?;
        self.store.merge(&records_collection(room_id), key, document).await
    }

    /// Puts back exactly `previous`, or removes the day when there was none.
    pub async fn restore(
        &self,
        room_id: &str,
        key: &str,
        previous: Option<&DayRecord>,
    ) -> Result<(), DocumentStoreError> {
        let collection = records_collection(room_id);
        match previous {
            Some(record) => self.store.set(&collection, key, serde_json::to_value(record)?).await,
            None => self.store.delete(&collection, key).await.map(|_| ()),
        }
    }

    /// Removes every day whose key starts with `prefix`. Returns how many went.
    pub async fn clear_prefix(
        &self,
        room_id: &str,
        prefix: &str,
    ) -> Result<usize, DocumentStoreError> {
        let collection = records_collection(room_id);
        let mut cleared = 0;
        for (key, _) in self.store.list(&collection).await? {
            if key.starts_with(prefix) && self.store.delete(&collection, &key).await? {
                cleared += 1;
            }
        }
        Ok(cleared)
    }

    /// Replaces the whole record map of a room.
    pub async fn replace_all(
        &self,
        room_id: &str,
        records: &RecordMap,
    ) -> Result<(), DocumentStoreError> {
        self.clear_prefix(room_id, "").await?;
        let collection = records_collection(room_id);
        for (key, record) in records {
            self.store.set(&collection, key, serde_json::to_value(record)?).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod day_record_repository_tests {
    use super::*;
    use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
    use crate::tests::fixtures::{DayRecordBuilder, complete_days};
    use rstest::{fixture, rstest};
    use serde_json::json;

    const ROOM: &str = "room-0001";

    #[fixture]
    fn store() -> Arc<InMemoryDocumentStore> {
        Arc::new(InMemoryDocumentStore::new())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_put_and_load_records(store: Arc<InMemoryDocumentStore>) {
        let repository = DayRecordRepository::new(store);
        let record = DayRecordBuilder::complete("2024-01-01").build();
        repository.put(ROOM, "2024-01-01", &record).await.unwrap();
        assert_eq!(repository.load(ROOM, "2024-01-01").await.unwrap(), Some(record.clone()));
        assert_eq!(repository.load_all(ROOM).await.unwrap().len(), 1);
        assert_eq!(repository.load("other-room", "2024-01-01").await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_tolerate_sparse_and_skip_unreadable_documents(
        store: Arc<InMemoryDocumentStore>,
    ) {
        store
            .set(&records_collection(ROOM), "2024-01-01", json!({"meal1": {"preReported": true}}))
            .await
            .unwrap();
        store
            .set(&records_collection(ROOM), "2024-01-02", json!({"meal1": "garbage"}))
            .await
            .unwrap();
        let repository = DayRecordRepository::new(store);
        let records = repository.load_all(ROOM).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records["2024-01-01"].meal1.pre_reported);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clear_a_reason_through_a_merge(store: Arc<InMemoryDocumentStore>) {
        let repository = DayRecordRepository::new(store);
        let with_reason = DayRecordBuilder::new("2024-01-01").reason("late").build();
        repository.put(ROOM, "2024-01-01", &with_reason).await.unwrap();
        let without_reason = DayRecordBuilder::new("2024-01-01").build();
        repository.put(ROOM, "2024-01-01", &without_reason).await.unwrap();
        let loaded = repository.load(ROOM, "2024-01-01").await.unwrap().unwrap();
        assert_eq!(loaded.reason, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_restore_the_previous_version(store: Arc<InMemoryDocumentStore>) {
        let repository = DayRecordRepository::new(store);
        let before = DayRecordBuilder::new("2024-01-01").reason("late").build();
        repository.put(ROOM, "2024-01-01", &before).await.unwrap();
        let after = DayRecordBuilder::complete("2024-01-01").build();
        repository.put(ROOM, "2024-01-01", &after).await.unwrap();

        repository.restore(ROOM, "2024-01-01", Some(&before)).await.unwrap();
        assert_eq!(repository.load(ROOM, "2024-01-01").await.unwrap(), Some(before));

        repository.restore(ROOM, "2024-01-01", None).await.unwrap();
        assert_eq!(repository.load(ROOM, "2024-01-01").await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clear_only_the_requested_month(store: Arc<InMemoryDocumentStore>) {
        let repository = DayRecordRepository::new(store);
        let mut records = complete_days(2024, 1, 30..=31);
        records.extend(complete_days(2024, 2, 1..=3));
        repository.replace_all(ROOM, &records).await.unwrap();

        let cleared = repository.clear_prefix(ROOM, "2024-02").await.unwrap();

        assert_eq!(cleared, 3);
        let remaining: Vec<String> = repository.load_all(ROOM).await.unwrap().into_keys().collect();
        assert_eq!(remaining, vec!["2024-01-30", "2024-01-31"]);
    }
}
