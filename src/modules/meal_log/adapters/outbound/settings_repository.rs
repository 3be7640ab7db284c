// Room settings stored as a single document. Stored fields are read as a patch
// over the defaults, so documents written by older versions still load.

use crate::modules::meal_log::core::settings::{Settings, SettingsPatch};
use crate::shared::infrastructure::document_store::{DocumentStore, DocumentStoreError};
use chrono::NaiveDate;
use std::sync::Arc;

const SETTINGS_COLLECTION: &str = "settings";

#[derive(Clone)]
pub struct SettingsRepository {
    store: Arc<dyn DocumentStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn load(
        &self,
        room_id: &str,
        today: NaiveDate,
    ) -> Result<Settings, DocumentStoreError> {
        let defaults = Settings::starting_on(today);
        match self.store.get(SETTINGS_COLLECTION, room_id).await? {
            Some(document) => {
                let patch: SettingsPatch = serde_json::from_value(document)?;
                Ok(defaults.apply(patch))
            }
            None => Ok(defaults),
        }
    }

    pub async fn save(&self, room_id: &str, settings: &Settings) -> Result<(), DocumentStoreError> {
        self.store
            .set(SETTINGS_COLLECTION, room_id, serde_json::to_value(settings)?)
            .await
    }
}

#[cfg(test)]
mod settings_repository_tests {
    use super::*;
    use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
    use crate::tests::fixtures::{date, settings_fixture};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[tokio::test]
    async fn it_should_default_when_nothing_is_stored() {
        let repository = SettingsRepository::new(Arc::new(InMemoryDocumentStore::new()));
        let settings = repository.load("room-0001", date(2024, 3, 9)).await.unwrap();
        assert_eq!(settings, Settings::starting_on(date(2024, 3, 9)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_save_and_load() {
        let repository = SettingsRepository::new(Arc::new(InMemoryDocumentStore::new()));
        let settings = Settings {
            reward_interval: 3,
            ..settings_fixture()
        };
        repository.save("room-0001", &settings).await.unwrap();
        assert_eq!(repository.load("room-0001", date(2030, 1, 1)).await.unwrap(), settings);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fill_missing_fields_from_defaults() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store
            .set(SETTINGS_COLLECTION, "room-0001", json!({"rewardInterval": 0, "month": 4}))
            .await
            .unwrap();
        let repository = SettingsRepository::new(store);
        let settings = repository.load("room-0001", date(2024, 1, 1)).await.unwrap();
        assert_eq!(settings.reward_interval, 1);
        assert_eq!(settings.month, 4);
        assert_eq!(settings.year, 2024);
        assert!(settings.require_commander_review);
    }
}
