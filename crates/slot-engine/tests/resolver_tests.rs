//! Full-pipeline scenarios for availability resolution.
//!
//! A small snapshot builder stands in for the scheduling backend; every
//! scenario resolves against a fixed injected "now" so the past-date
//! short-circuit and the same-day cutoff are deterministic.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use slot_engine::store::{
    AppointmentRow, BranchHoursRow, DayBlockRow, RecurringBreakRow, TimeBlockRow,
};
use slot_engine::{
    resolve_availability, Appointment, AppointmentStatus, AvailabilityRequest, BranchDaySchedule,
    InMemoryStore, RecurringBreak, ResolveError, ScheduleStore, StoreError, TimeBlock, TimeOfDay,
};

const BRANCH: &str = "downtown";
const BARBER: &str = "marco";

/// Fixed "now": Tuesday 2026-08-25, 10:07 local.
fn now() -> NaiveDateTime {
    "2026-08-25T10:07:00".parse().unwrap()
}

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Snapshot with the branch open 09:00-18:00, lunch 13:00-14:00, all
/// seven weekdays.
fn base_store() -> InMemoryStore {
    let mut store = InMemoryStore::default();
    for weekday in 0..7u8 {
        store.branch_hours.push(BranchHoursRow {
            branch_id: BRANCH.to_string(),
            weekday,
            schedule: BranchDaySchedule {
                is_open: true,
                open_time: t("09:00"),
                close_time: t("18:00"),
                lunch_start: Some(t("13:00")),
                lunch_end: Some(t("14:00")),
            },
        });
    }
    store
}

fn booked(store: &mut InMemoryStore, id: &str, on: &str, start: &str, duration: u16) {
    store.appointments.push(AppointmentRow {
        barber_id: BARBER.to_string(),
        date: date(on),
        appointment: Appointment {
            id: Some(id.to_string()),
            start_time: t(start),
            duration_minutes: Some(duration),
            status: AppointmentStatus::Confirmed,
        },
    });
}

fn resolve(store: &InMemoryStore, request: &AvailabilityRequest) -> Vec<String> {
    resolve_availability(store, request, now())
        .unwrap()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ── Happy path ──────────────────────────────────────────────────────────────

#[test]
fn future_day_with_lunch_only() {
    let store = base_store();
    let slots = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01"));

    // 36 grid slots minus the 4 lunch slots.
    assert_eq!(slots.len(), 32);
    assert_eq!(slots.first().unwrap(), "09:00");
    assert_eq!(slots.last().unwrap(), "17:45");
    assert!(slots.contains(&"12:45".to_string()));
    assert!(!slots.contains(&"13:00".to_string()));
    assert!(!slots.contains(&"13:45".to_string()));
    assert!(slots.contains(&"14:00".to_string()));
}

#[test]
fn one_booking_removes_exactly_its_slots() {
    let mut store = base_store();
    booked(&mut store, "a1", "2026-09-01", "10:00", 30);

    let free = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01"));
    let baseline = resolve(&base_store(), &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01"));

    assert!(!free.contains(&"10:00".to_string()));
    assert!(!free.contains(&"10:15".to_string()));
    let expected: Vec<String> = baseline
        .into_iter()
        .filter(|s| s != "10:00" && s != "10:15")
        .collect();
    assert_eq!(free, expected);
}

// ── Terminal short-circuits ─────────────────────────────────────────────────

#[test]
fn closed_weekday_yields_empty() {
    let mut store = base_store();
    // 2026-09-06 is a Sunday; branch index 0.
    store.branch_hours[0].schedule.is_open = false;
    let slots = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-06"));
    assert!(slots.is_empty());
}

#[test]
fn unconfigured_weekday_reads_as_closed() {
    let mut store = base_store();
    store.branch_hours.retain(|row| row.weekday != 0);
    let slots = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-06"));
    assert!(slots.is_empty());
}

#[test]
fn unknown_branch_reads_as_closed() {
    let store = base_store();
    let slots = resolve(&store, &AvailabilityRequest::new("uptown", BARBER, "2026-09-01"));
    assert!(slots.is_empty());
}

#[test]
fn day_block_wins_over_everything() {
    let mut store = base_store();
    store.day_blocks.push(DayBlockRow {
        barber_id: BARBER.to_string(),
        date: date("2026-09-01"),
    });
    // Free slots would otherwise exist.
    let slots = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01"));
    assert!(slots.is_empty());
}

#[test]
fn day_block_for_another_barber_is_ignored() {
    let mut store = base_store();
    store.day_blocks.push(DayBlockRow {
        barber_id: "luca".to_string(),
        date: date("2026-09-01"),
    });
    let slots = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01"));
    assert_eq!(slots.len(), 32);
}

#[test]
fn past_date_is_always_empty() {
    let store = base_store();
    let slots = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-08-24"));
    assert!(slots.is_empty());
}

// ── Recurring breaks ────────────────────────────────────────────────────────

#[test]
fn tuesday_break_fires_on_tuesday_only() {
    let mut store = base_store();
    store.recurring_breaks.push(RecurringBreakRow {
        barber_id: BARBER.to_string(),
        recurring_break: RecurringBreak {
            start_time: t("12:00"),
            end_time: t("12:30"),
            // Monday-first set: index 1 = Tuesday.
            active_days: [false, true, false, false, false, false, false],
        },
    });

    // 2026-09-01 is a Tuesday.
    let tuesday = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01"));
    assert!(!tuesday.contains(&"12:00".to_string()));
    assert!(!tuesday.contains(&"12:15".to_string()));
    assert!(tuesday.contains(&"12:30".to_string()));

    // 2026-09-02 is a Wednesday; the break must not leak across days.
    let wednesday = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-02"));
    assert!(wednesday.contains(&"12:00".to_string()));
    assert!(wednesday.contains(&"12:15".to_string()));
}

// ── One-off time blocks ─────────────────────────────────────────────────────

#[test]
fn time_block_removes_only_its_date() {
    let mut store = base_store();
    store.time_blocks.push(TimeBlockRow {
        barber_id: BARBER.to_string(),
        date: date("2026-09-01"),
        block: TimeBlock { start_time: t("09:00"), end_time: t("10:00") },
    });

    let blocked = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01"));
    assert_eq!(blocked.first().unwrap(), "10:00");

    let next_day = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-02"));
    assert_eq!(next_day.first().unwrap(), "09:00");
}

// ── Editing an existing appointment ─────────────────────────────────────────

#[test]
fn editing_appointment_does_not_block_itself() {
    let mut store = base_store();
    booked(&mut store, "mine", "2026-09-01", "10:00", 30);

    let without = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01"));
    assert!(!without.contains(&"10:00".to_string()));

    let editing =
        resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01").editing("mine"));
    assert!(editing.contains(&"10:00".to_string()));
    assert!(editing.contains(&"10:15".to_string()));
}

#[test]
fn editing_id_leaves_other_bookings_blocked() {
    let mut store = base_store();
    booked(&mut store, "mine", "2026-09-01", "10:00", 30);
    booked(&mut store, "other", "2026-09-01", "11:00", 30);

    let editing =
        resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01").editing("mine"));
    assert!(editing.contains(&"10:00".to_string()));
    assert!(!editing.contains(&"11:00".to_string()));
}

// ── Same-day cutoff ─────────────────────────────────────────────────────────

#[test]
fn today_drops_slots_before_the_next_grid_point() {
    // "now" is 10:07 on 2026-08-25: first bookable slot is 10:15.
    let store = base_store();
    let slots = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-08-25"));

    assert_eq!(slots.first().unwrap(), "10:15");
    assert!(!slots.contains(&"09:00".to_string()));
    assert!(!slots.contains(&"10:00".to_string()));
    assert!(slots.contains(&"17:45".to_string()));
}

#[test]
fn cutoff_applies_only_to_today() {
    let store = base_store();
    let tomorrow = resolve(&store, &AvailabilityRequest::new(BRANCH, BARBER, "2026-08-26"));
    assert_eq!(tomorrow.first().unwrap(), "09:00");
}

// ── Input validation ────────────────────────────────────────────────────────

#[test]
fn missing_required_fields_are_client_errors() {
    let store = base_store();
    for request in [
        AvailabilityRequest::new("", BARBER, "2026-09-01"),
        AvailabilityRequest::new(BRANCH, "  ", "2026-09-01"),
        AvailabilityRequest::new(BRANCH, BARBER, ""),
    ] {
        assert!(matches!(
            resolve_availability(&store, &request, now()),
            Err(ResolveError::InvalidInput(_))
        ));
    }
}

#[test]
fn malformed_date_is_rejected_before_any_read() {
    let store = base_store();
    let request = AvailabilityRequest::new(BRANCH, BARBER, "09/01/2026");
    assert!(matches!(
        resolve_availability(&store, &request, now()),
        Err(ResolveError::InvalidDate(_))
    ));
}

// ── Collaborator failure propagation ────────────────────────────────────────

/// A store whose every read fails, as when the backend is unreachable.
struct UnreachableStore;

impl ScheduleStore for UnreachableStore {
    fn branch_day_schedule(
        &self,
        _branch_id: &str,
        _weekday: Weekday,
    ) -> Result<Option<BranchDaySchedule>, StoreError> {
        Err(StoreError("connection refused".into()))
    }

    fn day_block_exists(&self, _barber_id: &str, _date: NaiveDate) -> Result<bool, StoreError> {
        Err(StoreError("connection refused".into()))
    }

    fn time_blocks(&self, _barber_id: &str, _date: NaiveDate) -> Result<Vec<TimeBlock>, StoreError> {
        Err(StoreError("connection refused".into()))
    }

    fn recurring_breaks(&self, _barber_id: &str) -> Result<Vec<RecurringBreak>, StoreError> {
        Err(StoreError("connection refused".into()))
    }

    fn appointments(
        &self,
        _barber_id: &str,
        _date: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError> {
        Err(StoreError("connection refused".into()))
    }
}

#[test]
fn failed_read_aborts_resolution() {
    let request = AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01");
    assert!(matches!(
        resolve_availability(&UnreachableStore, &request, now()),
        Err(ResolveError::Store(_))
    ));
}

#[test]
fn past_date_short_circuits_before_any_read() {
    // Even an unreachable backend cannot fail a past-date request.
    let request = AvailabilityRequest::new(BRANCH, BARBER, "2026-08-24");
    let slots = resolve_availability(&UnreachableStore, &request, now()).unwrap();
    assert!(slots.is_empty());
}

// ── Idempotence ─────────────────────────────────────────────────────────────

#[test]
fn identical_calls_yield_identical_output() {
    let mut store = base_store();
    booked(&mut store, "a1", "2026-09-01", "10:00", 45);

    let request = AvailabilityRequest::new(BRANCH, BARBER, "2026-09-01");
    let first = resolve_availability(&store, &request, now()).unwrap();
    let second = resolve_availability(&store, &request, now()).unwrap();
    assert_eq!(first, second);
}
