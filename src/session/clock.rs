//! Wall-clock sources and date/time formatting helpers.

use chrono::{
    Duration, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local wall-clock time, and the zone it is read in.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Whole epoch seconds of a wall-clock time in this clock's zone.
    fn epoch_seconds(&self, local: NaiveDateTime) -> i64;
}

/// The machine's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn epoch_seconds(&self, local: NaiveDateTime) -> i64 {
        epoch_seconds_in(&Local, local)
    }
}

/// A clock frozen at one instant in a fixed-offset zone (UTC unless set).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            offset: Utc.fix(),
        }
    }

    /// Build from calendar fields; `None` if any field is out of range.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, min, sec)?;
        Some(Self::new(date.and_time(time)))
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn epoch_seconds(&self, local: NaiveDateTime) -> i64 {
        epoch_seconds_in(&self.offset, local)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }

    fn epoch_seconds(&self, local: NaiveDateTime) -> i64 {
        (**self).epoch_seconds(local)
    }
}

/// Today's date as `YYYY-MM-DD`.
pub fn today_date_str(clock: &impl Clock) -> String {
    clock.now().format(DATE_FORMAT).to_string()
}

/// Whole epoch seconds of a wall-clock time in `tz`, fractional part truncated.
///
/// A time repeated by a backward transition resolves to its earlier instant.
/// A time skipped by a forward transition is read with the offset in force
/// just before the jump.
pub fn epoch_seconds_in<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> i64 {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t.timestamp(),
        LocalResult::None => {
            let before = tz
                .from_local_datetime(&(local - Duration::days(1)))
                .earliest()
                .map(|t| t.offset().fix().local_minus_utc())
                .unwrap_or(0);
            local.and_utc().timestamp() - i64::from(before)
        }
    }
}
