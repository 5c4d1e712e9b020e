//! Parsed snapshot dates
//!
//! Day keys are compared by calendar time only. A pattern without
//! time-of-day fields yields midnight of the parsed day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed day key or perspective date
///
/// ## Invariants
///
/// - Ordering is chronological
/// - Two keys that parse to the same instant are the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SnapshotDate(NaiveDateTime);

impl SnapshotDate {
    /// Midnight of the given calendar day
    pub fn from_date(date: NaiveDate) -> Self {
        SnapshotDate(date.and_time(NaiveTime::MIN))
    }

    /// Wrap a full date-time
    pub const fn from_datetime(datetime: NaiveDateTime) -> Self {
        SnapshotDate(datetime)
    }

    /// Midnight of `year-month-day`, or `None` if that day does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from_date)
    }

    /// Calendar day component
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Full date-time
    #[inline]
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDate> for SnapshotDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for SnapshotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.time() == NaiveTime::MIN {
            write!(f, "{}", self.0.date())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
