//! Market session awareness: holidays, session hours, and waiting for the open.
//!
//! Every query resamples the injected [`Clock`] and [`HolidayCalendar`], so a
//! date rollover or an updated holiday list is picked up on the next call.

mod calendar;
mod clock;
mod hours;
mod session_clock;

pub use calendar::{HolidayCalendar, HolidayFile, HolidaySet};
pub use clock::{
    epoch_seconds_in, today_date_str, Clock, FixedClock, SystemClock, DATE_FORMAT,
    DATE_TIME_FORMAT, TIME_FORMAT,
};
pub use hours::{SessionHours, SessionWindow};
pub use session_clock::{SessionClock, WaitOutcome};
