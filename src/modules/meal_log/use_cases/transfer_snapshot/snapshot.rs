// Interchange document: `{ "settings": {...}, "records": { "YYYY-MM-DD": {...} } }`.
//
// On import both halves are optional. Settings merge over the current ones,
// records replace the whole map.

use crate::modules::meal_log::core::record::RecordMap;
use crate::modules::meal_log::core::settings::{Settings, SettingsPatch};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub settings: Settings,
    pub records: RecordMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SnapshotImport {
    pub settings: Option<SettingsPatch>,
    pub records: Option<RecordMap>,
}

impl Snapshot {
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Snapshot> for SnapshotImport {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            settings: Some(SettingsPatch::from(&snapshot.settings)),
            records: Some(snapshot.records),
        }
    }
}
