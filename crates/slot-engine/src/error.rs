//! Error types for availability resolution.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while resolving availability.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A required request field was missing or empty.
    /// Rejected before any collaborator read occurs.
    #[error("invalid request: {0}")]
    InvalidInput(String),

    /// The request date was not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A time-of-day value was not a valid `HH:MM` 24-hour time.
    #[error("invalid time {0:?}: expected HH:MM")]
    InvalidTime(String),

    /// A collaborator read failed. The whole resolution aborts: treating
    /// a failed read as "no constraint" would open slots that should be
    /// closed, and treating it as "fully blocked" would hide real
    /// availability.
    #[error("schedule data unavailable: {0}")]
    Store(#[from] StoreError),
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, ResolveError>;
