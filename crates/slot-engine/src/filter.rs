//! Subtractive filter stages over a candidate slot set.
//!
//! Two kinds of stage exist and must not be confused:
//!
//! - **Terminal short-circuits** (branch closed, full-day block) end the
//!   whole computation with [`DayAvailability::Closed`].
//! - **Subtractive stages** (lunch, recurring breaks, one-off blocks,
//!   booked appointments, same-day cutoff) each remove a subset of the
//!   remaining candidates.
//!
//! The tagged [`DayAvailability`] result keeps the two apart so a
//! closed day can never be rebuilt into an open one by a later stage.
//! Subtractive stages commute with each other; the pipeline still runs
//! them in a fixed order for deterministic behavior.
//!
//! Every window here is half-open: a slot `s` is removed by
//! `[start, end)` when `start <= s < end`. A slot exactly at `end`
//! survives.

use std::collections::BTreeSet;

use chrono::Weekday;

use crate::schedule::{Appointment, BranchDaySchedule, RecurringBreak, TimeBlock};
use crate::timeofday::{TimeOfDay, SLOT_MINUTES};

/// Availability state for one (branch, barber, date) while filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayAvailability {
    /// A terminal stage fired; the day yields no slots, unconditionally.
    Closed,
    /// The remaining candidate slots.
    Open(BTreeSet<TimeOfDay>),
}

impl DayAvailability {
    /// The final sorted slot list. `Closed` yields an empty list —
    /// "no slots" is a normal result, not an error.
    pub fn into_slots(self) -> Vec<TimeOfDay> {
        match self {
            Self::Closed => Vec::new(),
            Self::Open(slots) => slots.into_iter().collect(),
        }
    }
}

/// Remove every slot `s` with `start <= s < end`, where `end` is in
/// minutes since midnight and may exceed 24:00 (late appointments).
fn remove_window(slots: &mut BTreeSet<TimeOfDay>, start: TimeOfDay, end_minutes: u32) {
    slots.retain(|&s| s < start || u32::from(s.minutes()) >= end_minutes);
}

/// Lunch stage: applies only when the schedule carries both bounds.
pub fn remove_lunch_window(slots: &mut BTreeSet<TimeOfDay>, schedule: &BranchDaySchedule) {
    if let (Some(start), Some(end)) = (schedule.lunch_start, schedule.lunch_end) {
        remove_window(slots, start, u32::from(end.minutes()));
    }
}

/// Recurring-break stage: each break whose Monday-first activity set
/// marks this weekday removes its window.
pub fn remove_recurring_breaks(
    slots: &mut BTreeSet<TimeOfDay>,
    weekday: Weekday,
    breaks: &[RecurringBreak],
) {
    for brk in breaks.iter().filter(|b| b.applies_on(weekday)) {
        remove_window(slots, brk.start_time, u32::from(brk.end_time.minutes()));
    }
}

/// One-off block stage.
pub fn remove_time_blocks(slots: &mut BTreeSet<TimeOfDay>, blocks: &[TimeBlock]) {
    for block in blocks {
        remove_window(slots, block.start_time, u32::from(block.end_time.minutes()));
    }
}

/// Booked-appointment stage.
///
/// Only pending/confirmed appointments occupy time. When the caller is
/// editing an existing appointment, that appointment's id is excluded
/// so it cannot block its own reschedule.
pub fn remove_booked_appointments(
    slots: &mut BTreeSet<TimeOfDay>,
    appointments: &[Appointment],
    editing_id: Option<&str>,
) {
    for appt in appointments {
        if !appt.status.occupies_time() {
            continue;
        }
        if let (Some(id), Some(editing)) = (appt.id.as_deref(), editing_id) {
            if id == editing {
                continue;
            }
        }
        remove_window(slots, appt.start_time, appt.end_minutes());
    }
}

/// Same-day cutoff stage: keep only slots at or after the first grid
/// point strictly after `now`. At 10:07 the first bookable slot is
/// 10:15; at exactly 10:00 it is 10:15 as well, since 10:00 is already
/// starting.
pub fn remove_past_slots(slots: &mut BTreeSet<TimeOfDay>, now: TimeOfDay) {
    let cutoff = u32::from(now.floor_to_grid().minutes()) + u32::from(SLOT_MINUTES);
    slots.retain(|&s| u32::from(s.minutes()) >= cutoff);
}
