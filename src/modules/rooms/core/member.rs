// Room members and the acting identity behind every write.

use crate::shared::core::primitives::EpochMillis;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Commander,
    Participant,
    #[default]
    Visitor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Commander => "commander",
            Role::Participant => "participant",
            Role::Visitor => "visitor",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub uid: String,
    pub role: Role,
    pub created_at: EpochMillis,
}

/// Who is issuing a command. Unknown callers act as visitors; `readonly`
/// reflects a read-only share link and blocks every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub uid: String,
    pub role: Role,
    pub readonly: bool,
}

impl Actor {
    pub fn visitor() -> Self {
        Self {
            uid: "anonymous".to_string(),
            role: Role::Visitor,
            readonly: false,
        }
    }

    pub fn from_member(member: &Member, readonly: bool) -> Self {
        Self {
            uid: member.uid.clone(),
            role: member.role,
            readonly,
        }
    }
}
