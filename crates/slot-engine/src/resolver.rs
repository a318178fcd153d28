//! The availability pipeline: one request in, one sorted slot list out.
//!
//! Stateless. Each invocation reads a snapshot of the five scheduling
//! fact kinds through a [`ScheduleStore`], runs the fixed filter order,
//! and returns the surviving slots. "Now" is an explicit parameter —
//! the resolver never samples ambient process time, so a test can pin
//! any instant and two calls within one request agree on what "today"
//! means.
//!
//! Stage order (fixed):
//!
//! 1. validate request fields
//! 2. past-date short-circuit (a date before today never has slots)
//! 3. weekday resolution
//! 4. branch schedule load + branch-open terminal check
//! 5. candidate grid generation
//! 6. lunch window
//! 7. full-day block terminal check
//! 8. recurring weekly breaks
//! 9. one-off time blocks
//! 10. booked appointments (editing id excluded)
//! 11. same-day cutoff
//!
//! An empty list is a normal result. Only invalid input or a failed
//! collaborator read is an error.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::error::{ResolveError, Result};
use crate::filter::{
    remove_booked_appointments, remove_lunch_window, remove_past_slots, remove_recurring_breaks,
    remove_time_blocks, DayAvailability,
};
use crate::grid::slot_grid;
use crate::store::ScheduleStore;
use crate::timeofday::TimeOfDay;
use crate::weekday::{parse_date, resolve_weekday};

/// A request for the bookable slots of one (branch, barber, date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub branch_id: String,
    pub barber_id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// When rescheduling an existing appointment, its id — excluded
    /// from the occupancy filter so it cannot block itself.
    pub editing_appointment_id: Option<String>,
}

impl AvailabilityRequest {
    pub fn new(
        branch_id: impl Into<String>,
        barber_id: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            branch_id: branch_id.into(),
            barber_id: barber_id.into(),
            date: date.into(),
            editing_appointment_id: None,
        }
    }

    pub fn editing(mut self, appointment_id: impl Into<String>) -> Self {
        self.editing_appointment_id = Some(appointment_id.into());
        self
    }
}

/// Resolve the bookable slots for a request against a data snapshot.
///
/// `now` is the current local date-time, injected by the caller; it
/// decides both the past-date short-circuit and the same-day cutoff.
///
/// # Errors
///
/// [`ResolveError::InvalidInput`] when a required field is empty,
/// [`ResolveError::InvalidDate`] when the date does not parse, and
/// [`ResolveError::Store`] when any collaborator read fails. No
/// partial result is ever returned on failure.
pub fn resolve_availability<S: ScheduleStore>(
    store: &S,
    request: &AvailabilityRequest,
    now: NaiveDateTime,
) -> Result<Vec<TimeOfDay>> {
    let branch_id = request.branch_id.trim();
    let barber_id = request.barber_id.trim();
    if branch_id.is_empty() {
        return Err(ResolveError::InvalidInput("branch_id is required".into()));
    }
    if barber_id.is_empty() {
        return Err(ResolveError::InvalidInput("barber_id is required".into()));
    }
    if request.date.trim().is_empty() {
        return Err(ResolveError::InvalidInput("date is required".into()));
    }
    let date = parse_date(&request.date)?;

    let today = now.date();
    if date < today {
        return Ok(Vec::new());
    }

    let weekday = resolve_weekday(date);

    // An unconfigured weekday reads as a closed day.
    let schedule = match store.branch_day_schedule(branch_id, weekday)? {
        Some(s) if s.is_open => s,
        _ => return Ok(DayAvailability::Closed.into_slots()),
    };

    let mut slots: BTreeSet<TimeOfDay> = slot_grid(schedule.open_time, schedule.close_time)
        .into_iter()
        .collect();

    remove_lunch_window(&mut slots, &schedule);

    if store.day_block_exists(barber_id, date)? {
        return Ok(DayAvailability::Closed.into_slots());
    }

    let breaks = store.recurring_breaks(barber_id)?;
    remove_recurring_breaks(&mut slots, weekday, &breaks);

    let blocks = store.time_blocks(barber_id, date)?;
    remove_time_blocks(&mut slots, &blocks);

    let appointments = store.appointments(barber_id, date)?;
    remove_booked_appointments(
        &mut slots,
        &appointments,
        request.editing_appointment_id.as_deref(),
    );

    if date == today {
        remove_past_slots(&mut slots, TimeOfDay::from_naive_time(now.time()));
    }

    Ok(DayAvailability::Open(slots).into_slots())
}
