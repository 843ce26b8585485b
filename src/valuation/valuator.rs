//! PnL calculator: unrealized PnL for active trades, realized PnL for closed ones.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Direction, TradeSnapshot};
use crate::pricing::round_currency;

/// Stateless PnL calculator.
pub struct PositionValuator;

impl PositionValuator {
    /// Recompute `pnl` and `pnl_percentage` on the snapshot in place.
    ///
    /// Active trades are marked against `current_market_price`, terminal
    /// trades against `exit_price`. A non-positive reference price leaves
    /// `pnl` untouched, and a non-positive trade value leaves
    /// `pnl_percentage` untouched. The percentage is always derived from
    /// whatever `pnl` holds afterwards, stale or fresh. Arithmetic that
    /// overflows `Decimal` skips its update the same way.
    pub fn valuate(trade: &mut TradeSnapshot) -> &mut TradeSnapshot {
        let reference_price = if trade.trade_state.is_terminal() {
            trade.exit_price
        } else {
            trade.current_market_price
        };

        if reference_price > Decimal::ZERO {
            if let Some(pnl) = Self::pnl_at(
                trade.direction,
                trade.entry_price,
                reference_price,
                trade.filled_quantity,
            ) {
                trade.pnl = pnl;
            }
        }

        if let Some(trade_value) = trade.trade_value().filter(|v| *v > Decimal::ZERO) {
            if let Some(pct) = trade
                .pnl
                .checked_mul(dec!(100))
                .and_then(|scaled| scaled.checked_div(trade_value))
            {
                trade.pnl_percentage = round_currency(pct);
            }
        }

        trade
    }

    /// Rounded PnL of `quantity` units entered at `entry` and marked at `price`,
    /// `None` if it does not fit in a `Decimal`.
    pub fn pnl_at(direction: Direction, entry: Decimal, price: Decimal, quantity: i64) -> Option<Decimal> {
        let per_unit = match direction {
            Direction::Long => price.checked_sub(entry)?,
            Direction::Short => entry.checked_sub(price)?,
        };
        per_unit.checked_mul(Decimal::from(quantity)).map(round_currency)
    }
}
