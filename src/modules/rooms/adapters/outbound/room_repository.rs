// Rooms and their members over the document store.

use crate::modules::rooms::core::member::{Actor, Member};
use crate::modules::rooms::core::room::RoomMeta;
use crate::shared::infrastructure::document_store::{DocumentStore, DocumentStoreError};
use std::sync::Arc;

const ROOMS_COLLECTION: &str = "rooms";

fn members_collection(room_id: &str) -> String {
    format!("rooms/{room_id}/members")
}

#[derive(Clone)]
pub struct RoomRepository {
    store: Arc<dyn DocumentStore>,
}

impl RoomRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn get_meta(&self, room_id: &str) -> Result<Option<RoomMeta>, DocumentStoreError> {
        let document = self.store.get(ROOMS_COLLECTION, room_id).await?;
        Ok(document.map(serde_json::from_value::<RoomMeta>).transpose()?)
    }

    pub async fn save_meta(&self, meta: &RoomMeta) -> Result<(), DocumentStoreError> {
        self.store
            .set(ROOMS_COLLECTION, &meta.room_id, serde_json::to_value(meta)?)
            .await
    }

    /// Stores `meta` unless the room id is taken. Returns whether it was stored.
    pub async fn create_meta(&self, meta: &RoomMeta) -> Result<bool, DocumentStoreError> {
        self.store
            .create(ROOMS_COLLECTION, &meta.room_id, serde_json::to_value(meta)?)
            .await
    }

    pub async fn get_member(
        &self,
        room_id: &str,
        uid: &str,
    ) -> Result<Option<Member>, DocumentStoreError> {
        let document = self.store.get(&members_collection(room_id), uid).await?;
        Ok(document.map(serde_json::from_value::<Member>).transpose()?)
    }

    pub async fn put_member(
        &self,
        room_id: &str,
        member: &Member,
    ) -> Result<(), DocumentStoreError> {
        self.store
            .merge(&members_collection(room_id), &member.uid, serde_json::to_value(member)?)
            .await
    }

    /// Callers without a uid, or whose uid is not a member, act as visitors.
    pub async fn resolve_actor(
        &self,
        room_id: &str,
        uid: Option<&str>,
        readonly: bool,
    ) -> Result<Actor, DocumentStoreError> {
        let member = match uid {
            Some(uid) => self.get_member(room_id, uid).await?,
            None => None,
        };
        Ok(match member {
            Some(member) => Actor::from_member(&member, readonly),
            None => Actor {
                readonly,
                ..Actor::visitor()
            },
        })
    }
}
