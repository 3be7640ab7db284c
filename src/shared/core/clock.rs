// Wall clock access. Only inbound adapters call these; everything below them
// receives the evaluated date or timestamp as a plain argument.

use crate::shared::core::primitives::EpochMillis;
use chrono::{Local, NaiveDate, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now_millis() -> EpochMillis {
    Utc::now().timestamp_millis()
}
