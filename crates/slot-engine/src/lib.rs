//! # slot-engine
//!
//! Deterministic appointment slot resolution for barbershop scheduling.
//!
//! Given a branch, a barber, and a calendar date, the engine composes
//! branch operating hours, lunch windows, full-day closures, recurring
//! weekly breaks, one-off time blocks, existing bookings, and a
//! same-day cutoff into one ordered, idempotent filtering pipeline and
//! returns the exact set of bookable `HH:MM` slots.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDateTime;
//! use slot_engine::{resolve_availability, AvailabilityRequest, InMemoryStore};
//!
//! let snapshot = r#"{
//!     "branch_hours": [{
//!         "branch_id": "downtown", "weekday": 2,
//!         "is_open": true, "open_time": "09:00", "close_time": "12:00"
//!     }]
//! }"#;
//! let store: InMemoryStore = serde_json::from_str(snapshot).unwrap();
//!
//! let request = AvailabilityRequest::new("downtown", "marco", "2026-09-01");
//! let now: NaiveDateTime = "2026-08-25T10:00:00".parse().unwrap();
//!
//! let slots = resolve_availability(&store, &request, now).unwrap();
//! let rendered: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
//! assert_eq!(rendered[..3], ["09:00".to_string(), "09:15".into(), "09:30".into()]);
//! ```
//!
//! ## Modules
//!
//! - [`resolver`] — the pipeline: request validation + fixed stage order
//! - [`filter`] — terminal short-circuits and subtractive filter stages
//! - [`grid`] — candidate slot generation from open/close bounds
//! - [`weekday`] — timezone-neutral date parsing, dual weekday conventions
//! - [`schedule`] — the scheduling data model (read-only to the engine)
//! - [`store`] — the collaborator seam + in-memory snapshot store
//! - [`timeofday`] — `HH:MM` time-of-day values on the 15-minute grid
//! - [`error`] — error types

pub mod error;
pub mod filter;
pub mod grid;
pub mod resolver;
pub mod schedule;
pub mod store;
pub mod timeofday;
pub mod weekday;

pub use error::{ResolveError, Result};
pub use grid::slot_grid;
pub use resolver::{resolve_availability, AvailabilityRequest};
pub use schedule::{
    Appointment, AppointmentStatus, BranchDaySchedule, RecurringBreak, TimeBlock,
};
pub use store::{InMemoryStore, ScheduleStore, StoreError};
pub use timeofday::{TimeOfDay, DEFAULT_APPOINTMENT_MINUTES, SLOT_MINUTES};
