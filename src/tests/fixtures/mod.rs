// Shared test fixtures, compiled only for unit tests.

use crate::modules::meal_log::core::calendar::WeekdayLocale;
use crate::modules::meal_log::core::record::{DayRecord, RecordMap};
use crate::modules::meal_log::core::settings::Settings;
use crate::modules::rooms::core::member::{Actor, Role};
use crate::modules::rooms::use_cases::create_room::command::CreateRoom;
use crate::modules::rooms::use_cases::join_room::command::JoinRoom;
use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shell::state::AppState;
use chrono::NaiveDate;
use std::ops::RangeInclusive;
use std::sync::Arc;

pub const ROOM: &str = "family-01";
pub const JOIN_CODE: &str = "123456";
pub const COMMANDER_UID: &str = "commander-fixed-0001";
pub const PARTICIPANT_UID: &str = "participant-fixed-0001";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// January 2024, reward every 7 days, review required.
pub fn settings_fixture() -> Settings {
    Settings::starting_on(date(2024, 1, 1))
}

pub fn actor(role: Role) -> Actor {
    Actor {
        uid: format!("{role}-fixed-0001"),
        role,
        readonly: false,
    }
}

/// Fully complete records for the given days of a month.
pub fn complete_days(year: i32, month: u32, days: RangeInclusive<u32>) -> RecordMap {
    days.map(|day| {
        let key = format!("{year:04}-{month:02}-{day:02}");
        let record = DayRecordBuilder::complete(&key).build();
        (key, record)
    })
    .collect()
}

pub struct DayRecordBuilder {
    inner: DayRecord,
}

#[allow(dead_code)]
impl DayRecordBuilder {
    pub fn new(date: &str) -> Self {
        Self {
            inner: DayRecord::new(date),
        }
    }

    pub fn complete(date: &str) -> Self {
        Self::new(date).meal1(true, true).meal2(true, true).reviewed(true)
    }

    pub fn meal1(mut self, pre: bool, post: bool) -> Self {
        self.inner.meal1.pre_reported = pre;
        self.inner.meal1.post_reported = post;
        self
    }

    pub fn meal2(mut self, pre: bool, post: bool) -> Self {
        self.inner.meal2.pre_reported = pre;
        self.inner.meal2.post_reported = post;
        self
    }

    pub fn reviewed(mut self, v: bool) -> Self {
        self.inner.commander_reviewed = v;
        self
    }

    pub fn reason(mut self, v: impl Into<String>) -> Self {
        self.inner.reason = Some(v.into());
        self
    }

    pub fn reward_granted(mut self, v: bool) -> Self {
        self.inner.reward_granted = Some(v);
        self
    }

    pub fn consequence_executed(mut self, v: bool) -> Self {
        self.inner.consequence_executed = Some(v);
        self
    }

    pub fn build(self) -> DayRecord {
        self.inner
    }
}

/// In-memory state holding `ROOM` with its commander and one participant.
pub async fn state_with_room() -> AppState {
    let state = AppState::new(Arc::new(InMemoryDocumentStore::new()), None, WeekdayLocale::Zh);
    state
        .create_room_handler
        .handle(CreateRoom {
            room_id: ROOM.into(),
            commander_uid: COMMANDER_UID.into(),
            join_code: JOIN_CODE.into(),
            created_at: 0,
        })
        .await
        .unwrap();
    state
        .join_room_handler
        .handle(JoinRoom {
            room_id: ROOM.into(),
            uid: PARTICIPANT_UID.into(),
            join_code: JOIN_CODE.into(),
            role: Role::Participant,
            joined_at: 0,
        })
        .await
        .unwrap();
    state
}

/// State whose store refuses every call.
pub fn offline_state() -> AppState {
    let mut store = InMemoryDocumentStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), None, WeekdayLocale::Zh)
}
