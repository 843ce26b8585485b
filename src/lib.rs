//! Market session clock and trade PnL valuation.
//!
//! - [`session`]: is the venue open, is it done for the day, wait for the open
//! - [`valuation`]: unrealized and realized PnL of a trade snapshot
//! - [`pricing`]: currency and exchange-tick rounding

pub mod config;
pub mod ids;
pub mod models;
pub mod pricing;
pub mod session;
pub mod valuation;

pub use config::SessionConfig;
pub use models::{Direction, TradeSnapshot, TradeState};
pub use session::{SessionClock, SessionHours, SessionWindow};
pub use valuation::PositionValuator;
