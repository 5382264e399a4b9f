use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::hhmm;

/// A scheduled time block assigned to a consultant.
///
/// `end_time` is expected to be at or after `start_time` but this is not
/// enforced; an inverted pair yields a negative worked duration downstream
/// (see [`crate::domain::billing`]).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i32,
    pub consultant_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub break_duration: NaiveTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewAppointment {
    pub consultant_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_duration: NaiveTime,
}

/// Sparse update: `None` fields are left untouched on the stored record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateAppointment {
    pub consultant_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_duration: Option<NaiveTime>,
}

impl UpdateAppointment {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.consultant_id.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.break_duration.is_none()
    }
}
