//! Slot computation for a chef on a given date.
//!
//! Bookable slots are fixed: every two hours from 10:00 through 22:00. A slot
//! is open unless the chef already has a pending or confirmed booking at that
//! exact time. The result is recomputed on every call and ordered ascending.

use chrono::NaiveTime;

pub const SLOT_START_HOUR: u32 = 10;
pub const SLOT_END_HOUR: u32 = 22;
pub const SLOT_INTERVAL_HOURS: u32 = 2;

/// The full candidate slot set, in ascending order.
pub fn candidate_slots() -> Vec<NaiveTime> {
    (SLOT_START_HOUR..=SLOT_END_HOUR)
        .step_by(SLOT_INTERVAL_HOURS as usize)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .collect()
}

/// Candidate slots minus the chef's already-booked times.
pub fn open_slots(booked: &[NaiveTime]) -> Vec<NaiveTime> {
    candidate_slots()
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect()
}

/// True when `time` is one of the bookable candidate slots.
pub fn is_valid_slot(time: NaiveTime) -> bool {
    candidate_slots().contains(&time)
}

pub fn format_slot(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
