//! Data models for trade snapshots valued by the PnL calculator.

mod trade;

pub use trade::{Direction, TradeSnapshot, TradeState};
