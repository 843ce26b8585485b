//! Mark-to-market and realized PnL for trade snapshots.

mod valuator;

pub use valuator::PositionValuator;
