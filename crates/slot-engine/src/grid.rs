//! Candidate slot generation for a day's operating window.

use crate::timeofday::{TimeOfDay, SLOT_MINUTES};

/// Generate the full candidate slot sequence for `[open, close)` at
/// slot granularity: `open, open+15m, .., close-15m`.
///
/// Deterministic and pure. Empty when `open >= close`. The final
/// availability result is always a subset of this sequence.
pub fn slot_grid(open: TimeOfDay, close: TimeOfDay) -> Vec<TimeOfDay> {
    (open.minutes()..close.minutes())
        .step_by(usize::from(SLOT_MINUTES))
        .filter_map(TimeOfDay::from_minutes)
        .collect()
}
