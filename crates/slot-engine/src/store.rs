//! The collaborator seam: read-only access to scheduling facts.
//!
//! The resolver never talks to a backend directly; it reads through
//! [`ScheduleStore`], which exposes exactly the five queries the
//! pipeline needs. Any failed read surfaces as a [`StoreError`] and
//! aborts the whole resolution — partial results are never produced.
//!
//! [`InMemoryStore`] is the bundled implementation: a serde-loadable
//! snapshot of rows, used by the CLI and the test suites.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::{Appointment, BranchDaySchedule, RecurringBreak, TimeBlock};
use crate::weekday::weekday_from_branch_index;

/// A collaborator read failed (backend down, timeout, bad row).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Read-only access to the five kinds of scheduling facts.
///
/// Implementations must not let a failed read degrade into an empty
/// result; return `Err` and let the resolver abort.
pub trait ScheduleStore {
    /// Operating hours for a branch on a weekday, if configured.
    fn branch_day_schedule(
        &self,
        branch_id: &str,
        weekday: Weekday,
    ) -> Result<Option<BranchDaySchedule>, StoreError>;

    /// Whether a full-day block exists for (barber, date).
    fn day_block_exists(&self, barber_id: &str, date: NaiveDate) -> Result<bool, StoreError>;

    /// One-off closure windows for (barber, date).
    fn time_blocks(&self, barber_id: &str, date: NaiveDate) -> Result<Vec<TimeBlock>, StoreError>;

    /// All weekly-repeating breaks for a barber.
    fn recurring_breaks(&self, barber_id: &str) -> Result<Vec<RecurringBreak>, StoreError>;

    /// All appointments for (barber, date), any status. The resolver
    /// applies the occupancy rule (pending/confirmed only) itself.
    fn appointments(&self, barber_id: &str, date: NaiveDate)
        -> Result<Vec<Appointment>, StoreError>;
}

/// Branch hours row: weekday uses the Sunday-first convention
/// (`0 = Sunday .. 6 = Saturday`), matching the branch administration
/// backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchHoursRow {
    pub branch_id: String,
    pub weekday: u8,
    #[serde(flatten)]
    pub schedule: BranchDaySchedule,
}

/// Full-day closure row for a barber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayBlockRow {
    pub barber_id: String,
    pub date: NaiveDate,
}

/// One-off closure row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBlockRow {
    pub barber_id: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub block: TimeBlock,
}

/// Weekly break row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringBreakRow {
    pub barber_id: String,
    #[serde(flatten)]
    pub recurring_break: RecurringBreak,
}

/// Booking row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRow {
    pub barber_id: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub appointment: Appointment,
}

/// An in-memory snapshot of scheduling data.
///
/// Deserializes from a JSON object with one array per row kind; every
/// section is optional. Reads never fail — this store exists for tests
/// and the CLI, where the snapshot is the whole world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryStore {
    #[serde(default)]
    pub branch_hours: Vec<BranchHoursRow>,
    #[serde(default)]
    pub day_blocks: Vec<DayBlockRow>,
    #[serde(default)]
    pub time_blocks: Vec<TimeBlockRow>,
    #[serde(default)]
    pub recurring_breaks: Vec<RecurringBreakRow>,
    #[serde(default)]
    pub appointments: Vec<AppointmentRow>,
}

impl ScheduleStore for InMemoryStore {
    fn branch_day_schedule(
        &self,
        branch_id: &str,
        weekday: Weekday,
    ) -> Result<Option<BranchDaySchedule>, StoreError> {
        Ok(self
            .branch_hours
            .iter()
            .find(|row| {
                row.branch_id == branch_id
                    && weekday_from_branch_index(row.weekday) == Some(weekday)
            })
            .map(|row| row.schedule.clone()))
    }

    fn day_block_exists(&self, barber_id: &str, date: NaiveDate) -> Result<bool, StoreError> {
        Ok(self
            .day_blocks
            .iter()
            .any(|row| row.barber_id == barber_id && row.date == date))
    }

    fn time_blocks(&self, barber_id: &str, date: NaiveDate) -> Result<Vec<TimeBlock>, StoreError> {
        Ok(self
            .time_blocks
            .iter()
            .filter(|row| row.barber_id == barber_id && row.date == date)
            .map(|row| row.block.clone())
            .collect())
    }

    fn recurring_breaks(&self, barber_id: &str) -> Result<Vec<RecurringBreak>, StoreError> {
        Ok(self
            .recurring_breaks
            .iter()
            .filter(|row| row.barber_id == barber_id)
            .map(|row| row.recurring_break.clone())
            .collect())
    }

    fn appointments(
        &self,
        barber_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError> {
        Ok(self
            .appointments
            .iter()
            .filter(|row| row.barber_id == barber_id && row.date == date)
            .map(|row| row.appointment.clone())
            .collect())
    }
}
