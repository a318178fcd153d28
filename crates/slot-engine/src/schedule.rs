//! The scheduling data model read by the resolver.
//!
//! All of these rows are owned and mutated by external branch
//! administration and booking collaborators; the resolver only reads
//! them within a single resolution call.

use serde::{Deserialize, Serialize};

use crate::timeofday::{TimeOfDay, DEFAULT_APPOINTMENT_MINUTES};

/// Operating hours for one branch on one weekday.
///
/// When `is_open` is false the day contributes zero slots regardless of
/// the other fields. Lunch bounds only take effect when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchDaySchedule {
    pub is_open: bool,
    pub open_time: TimeOfDay,
    pub close_time: TimeOfDay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_start: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_end: Option<TimeOfDay>,
}

/// A one-off closure window for a barber on a specific date.
/// Removes every slot in `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// A weekly-repeating break for a barber (e.g., a daily lunch).
///
/// `active_days` is Monday-first: index 0 = Monday .. 6 = Sunday. This
/// is the one place in the data model that does NOT use the branch's
/// Sunday-first convention; [`crate::weekday::break_day_index`] is the
/// only sanctioned way to index it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringBreak {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub active_days: [bool; 7],
}

impl RecurringBreak {
    /// Whether this break applies on the given weekday.
    pub fn applies_on(&self, weekday: chrono::Weekday) -> bool {
        self.active_days[crate::weekday::break_day_index(weekday)]
    }
}

/// Booking lifecycle states. Only `Pending` and `Confirmed` occupy
/// time; a cancelled or completed appointment never blocks a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn occupies_time(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

/// An existing booking on a barber's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start_time: TimeOfDay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u16>,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Duration in minutes, defaulting when the booking carries none.
    pub fn duration_or_default(&self) -> u16 {
        self.duration_minutes.unwrap_or(DEFAULT_APPOINTMENT_MINUTES)
    }

    /// End of the occupied interval, in minutes since midnight. May
    /// exceed 24:00 for a late booking; callers clamp against the grid.
    pub fn end_minutes(&self) -> u32 {
        u32::from(self.start_time.minutes()) + u32::from(self.duration_or_default())
    }
}
