//! Daily session hours and the concrete window they produce for a date.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Local wall-clock open and close times of the trading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHours {
    /// Session open (inclusive)
    pub open: NaiveTime,

    /// Session close (inclusive)
    pub close: NaiveTime,
}

impl Default for SessionHours {
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(9, 15, 0).unwrap_or_default(),
            close: NaiveTime::from_hms_opt(15, 30, 0).unwrap_or_default(),
        }
    }
}

impl SessionHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// The window these hours describe on `date`.
    pub fn window_on(&self, date: NaiveDate) -> SessionWindow {
        SessionWindow {
            open: date.and_time(self.open),
            close: date.and_time(self.close),
        }
    }
}

/// One day's session, open and close on the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    pub open: NaiveDateTime,
    pub close: NaiveDateTime,
}

impl SessionWindow {
    /// True if `now` lies in `[open, close]`.
    pub fn contains(&self, now: NaiveDateTime) -> bool {
        now >= self.open && now <= self.close
    }

    /// True if `now` is strictly after close.
    pub fn has_closed(&self, now: NaiveDateTime) -> bool {
        now > self.close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hours() {
        let hours = SessionHours::default();
        assert_eq!(hours.open, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
        assert_eq!(hours.close, NaiveTime::from_hms_opt(15, 30, 0).unwrap());
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let window = SessionHours::default().window_on(date);

        assert!(window.contains(date.and_hms_opt(9, 15, 0).unwrap()));
        assert!(window.contains(date.and_hms_opt(15, 30, 0).unwrap()));
        assert!(!window.contains(date.and_hms_opt(9, 14, 59).unwrap()));
        assert!(!window.contains(date.and_hms_opt(15, 30, 1).unwrap()));

        assert!(!window.has_closed(date.and_hms_opt(15, 30, 0).unwrap()));
        assert!(window.has_closed(date.and_hms_opt(15, 30, 1).unwrap()));
    }
}
