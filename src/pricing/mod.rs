//! Price rounding shared by the valuator and order code.

mod rounding;

pub use rounding::{round_currency, round_to_tick, CURRENCY_DP, TICK_SIZE};
