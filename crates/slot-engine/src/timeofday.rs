//! Time-of-day values at fixed slot granularity.
//!
//! A [`TimeOfDay`] is a timezone-free wall-clock time stored as minutes
//! since midnight. It parses from and renders as `HH:MM` (24-hour), which
//! is the wire format for every slot the resolver returns.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Slot granularity in minutes. Every bookable slot sits on this grid.
pub const SLOT_MINUTES: u16 = 15;

/// Duration assumed for an appointment that does not carry one.
pub const DEFAULT_APPOINTMENT_MINUTES: u16 = 30;

pub(crate) const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day, minutes since midnight, `00:00..=23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from hour and minute. Returns `None` when out of range.
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Build from minutes since midnight. Returns `None` at or past 24:00.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// The time-of-day component of a `chrono` time, seconds discarded.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Round down to the slot grid.
    pub fn floor_to_grid(self) -> Self {
        Self(self.0 - self.0 % SLOT_MINUTES)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ResolveError;

    /// Parse `HH:MM` strictly: two fields, in-range hour and minute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ResolveError::InvalidTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u16 = hour.parse().map_err(|_| invalid())?;
        let minute: u16 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ResolveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}
