// Which role may edit which part of a day.

use crate::modules::rooms::core::member::{Actor, Role};
use crate::shared::application::errors::ApplicationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditArea {
    /// Meal flags, meal details and the free-text reason.
    Meals,
    /// Review flag, reward and consequence bookkeeping, bulk operations.
    Commander,
}

pub fn can_edit(role: Role, readonly: bool, area: EditArea) -> bool {
    if readonly {
        return false;
    }
    match area {
        EditArea::Meals => matches!(role, Role::Participant | Role::Commander),
        EditArea::Commander => role == Role::Commander,
    }
}

pub fn actor_can_edit(actor: &Actor, area: EditArea) -> bool {
    can_edit(actor.role, actor.readonly, area)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("a {role} may not {action}")]
pub struct PermissionDenied {
    pub role: Role,
    pub action: &'static str,
}

pub fn require_edit(
    actor: &Actor,
    area: EditArea,
    action: &'static str,
) -> Result<(), PermissionDenied> {
    if actor_can_edit(actor, area) {
        Ok(())
    } else {
        Err(PermissionDenied {
            role: actor.role,
            action,
        })
    }
}

impl From<PermissionDenied> for ApplicationError {
    fn from(denied: PermissionDenied) -> Self {
        ApplicationError::Forbidden(denied.to_string())
    }
}
