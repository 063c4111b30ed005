//! Daily appointment slots
//!
//! There is no calendar behind the scheduler: every day offers the same six
//! times and the same two of them are always taken. The service and date
//! are accepted so callers read naturally, but they never change the result.
use crate::constants::{SLOT_TIMES, UNAVAILABLE_SLOT_INDICES};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bookable time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub time: String,
    pub available: bool,
}

#[must_use]
pub fn slot_id(index: usize) -> String {
    format!("slot-{index}")
}

/// Produce the slot list for a day.
#[must_use]
pub fn generate_slots(_service_id: Option<&str>, _date: NaiveDate) -> Vec<TimeSlot> {
    SLOT_TIMES
        .iter()
        .enumerate()
        .map(|(index, time)| TimeSlot {
            id: slot_id(index),
            time: (*time).to_string(),
            available: !UNAVAILABLE_SLOT_INDICES.contains(&index),
        })
        .collect()
}

#[must_use]
pub fn find_slot<'a>(slots: &'a [TimeSlot], id: &str) -> Option<&'a TimeSlot> {
    slots.iter().find(|slot| slot.id == id)
}
