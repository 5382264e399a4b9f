//! Billed-amount arithmetic for appointment search results.
//!
//! The numbers here are wire-compatible with the system this service
//! replaces, quirks included:
//!
//! * worked seconds are `end_time - start_time` as clock times of day, with
//!   no wraparound and no clamping, so an inverted pair goes negative;
//! * the break duration is carried on the record but not subtracted from the
//!   worked span;
//! * the duration string renders raw seconds as hours and minutes without
//!   wrapping at 24h, so negative or oversized spans look out of range;
//! * the billed amount rounds the intermediate `seconds × rate` product to
//!   2 decimals and only then divides down by 3600.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::domain::appointment::Appointment;

/// One search result: the appointment plus its derived billing figures.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BilledAppointment {
    pub appointment: Appointment,
    /// Worked span rendered as `HH:MM` (see [`format_clock_span`]).
    pub worked_duration: String,
    pub billed_amount: f64,
}

/// A page of billed appointments plus the page-level sum.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BillingStatement {
    pub entries: Vec<BilledAppointment>,
    /// Plain sum of the per-entry billed amounts, not rounded again.
    pub total_billed: f64,
}

impl BillingStatement {
    pub fn push(&mut self, entry: BilledAppointment) {
        self.total_billed += entry.billed_amount;
        self.entries.push(entry);
    }
}

/// Seconds between the appointment's start and end clock times.
///
/// Negative when `end_time` precedes `start_time`; callers render and bill
/// the negative span as-is.
pub fn worked_seconds(appointment: &Appointment) -> i64 {
    i64::from(appointment.end_time.num_seconds_from_midnight())
        - i64::from(appointment.start_time.num_seconds_from_midnight())
}

/// Renders a raw second count as `HH:MM` without wrapping at 24 hours.
///
/// Values outside a clock day keep their magnitude (`90000` → `"25:00"`) and
/// negative spans keep their sign, so inconsistent records stay visible in
/// the output instead of being silently normalized.
pub fn format_clock_span(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{hours:02}:{minutes:02}")
}

/// Billed amount for a worked span at an hourly rate.
///
/// The `seconds × rate` product is rounded to 2 decimals while still in
/// second-units and divided by 3600 afterwards. The order matters for
/// compatibility and must not be swapped for the cleaner round-last form.
pub fn billed_amount(seconds: i64, hourly_rate: f64) -> f64 {
    let gross = seconds as f64 * hourly_rate;
    (gross * 100.0).round() / 100.0 / 3600.0
}
