//! Session clock: is the market open, is it done for the day, and waiting for the open.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Weekday};
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use super::calendar::HolidayCalendar;
use super::clock::{Clock, DATE_FORMAT};
use super::hours::{SessionHours, SessionWindow};

/// How a cancellable wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The full wait elapsed (or none was needed).
    Opened,
    /// The shutdown flag was raised first.
    Shutdown,
}

/// Answers session questions from an injected clock and holiday calendar.
///
/// Holds no state of its own; nothing is cached between calls.
pub struct SessionClock<C, H> {
    clock: C,
    calendar: H,
    hours: SessionHours,
}

impl<C: Clock, H: HolidayCalendar> SessionClock<C, H> {
    pub fn new(clock: C, calendar: H, hours: SessionHours) -> Self {
        Self {
            clock,
            calendar,
            hours,
        }
    }

    /// True on Saturdays, Sundays, and any date listed in the calendar.
    pub fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return Ok(true);
        }
        let key = date.format(DATE_FORMAT).to_string();
        self.calendar.is_listed(&key)
    }

    pub fn is_today_holiday(&self) -> Result<bool> {
        self.is_holiday(self.clock.now().date())
    }

    /// Today's open and close.
    pub fn session_window(&self) -> SessionWindow {
        self.hours.window_on(self.clock.now().date())
    }

    /// True on a trading day between open and close, both inclusive.
    pub fn is_open(&self) -> Result<bool> {
        let now = self.clock.now();
        if self.is_holiday(now.date())? {
            return Ok(false);
        }
        Ok(self.hours.window_on(now.date()).contains(now))
    }

    /// True on a holiday, or on a trading day once close has passed.
    ///
    /// Before the open on a trading day this is `false`: it answers
    /// "done for today", not "not trading right now". Use [`is_open`]
    /// for the latter.
    ///
    /// [`is_open`]: Self::is_open
    pub fn is_closed_for_day(&self) -> Result<bool> {
        let now = self.clock.now();
        if self.is_holiday(now.date())? {
            return Ok(true);
        }
        Ok(self.hours.window_on(now.date()).has_closed(now))
    }

    /// Whole seconds from now until today's open; zero or negative once open has passed.
    ///
    /// Both instants are resolved through the clock's zone, so a daylight
    /// saving change between now and the open shortens or lengthens the wait.
    pub fn seconds_until_open(&self) -> i64 {
        let now = self.clock.now();
        let open = self.hours.window_on(now.date()).open;
        self.clock.epoch_seconds(open) - self.clock.epoch_seconds(now)
    }

    /// Sleep until today's open, returning the number of seconds slept.
    ///
    /// Returns at once without sleeping when the open has already passed.
    /// The calendar is not consulted. There is no way to cut the sleep short;
    /// see [`wait_until_open_or_shutdown`](Self::wait_until_open_or_shutdown).
    pub async fn wait_until_open(&self, context: &str) -> u64 {
        let wait_secs = self.seconds_until_open();
        if wait_secs <= 0 {
            return 0;
        }

        let wait_secs = wait_secs as u64;
        info!(context = %context, wait_secs = wait_secs, "Waiting for market open");
        sleep(Duration::from_secs(wait_secs)).await;
        wait_secs
    }

    /// Like [`wait_until_open`](Self::wait_until_open), but sleeps in `poll`
    /// slices and gives up as soon as `shutdown` is set.
    pub async fn wait_until_open_or_shutdown(
        &self,
        context: &str,
        shutdown: &AtomicBool,
        poll: Duration,
    ) -> WaitOutcome {
        let wait_secs = self.seconds_until_open();
        if wait_secs <= 0 {
            return WaitOutcome::Opened;
        }

        info!(context = %context, wait_secs = wait_secs, "Waiting for market open");
        let deadline = Instant::now() + Duration::from_secs(wait_secs as u64);
        let poll = poll.max(Duration::from_millis(1));

        loop {
            if shutdown.load(Ordering::SeqCst) {
                debug!(context = %context, "Wait for market open cancelled");
                return WaitOutcome::Shutdown;
            }
            let now = Instant::now();
            if now >= deadline {
                return WaitOutcome::Opened;
            }
            sleep(poll.min(deadline - now)).await;
        }
    }
}
