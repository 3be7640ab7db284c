use crate::modules::meal_log::core::record::DayRecord;
use crate::modules::rooms::core::member::Role;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("a {role} may not make this change")]
    Forbidden { role: Role },

    #[error("'{0}' is not a YYYY-MM-DD day key")]
    MalformedDate(String),

    #[error("no reward is due on this day")]
    RewardNotDue,

    #[error("no consequence is due on this day")]
    ConsequenceNotDue,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { record: DayRecord },
    /// The one-shot flag was already set; nothing to write.
    Unchanged { record: DayRecord },
    Rejected { reason: DecideError },
}
