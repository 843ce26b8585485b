//! Trade snapshot model: the mutable record a trade manager hands to the valuator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a trade.
///
/// Only `Active` is valued against the live market price; every other
/// state is treated as terminal and valued at its exit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeState {
    Created,
    Active,
    Completed,
    Cancelled,
    Disabled,
}

impl TradeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeState::Created => "CREATED",
            TradeState::Active => "ACTIVE",
            TradeState::Completed => "COMPLETED",
            TradeState::Cancelled => "CANCELLED",
            TradeState::Disabled => "DISABLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "created" => Some(Self::Created),
            "active" => Some(Self::Active),
            "completed" | "closed" => Some(Self::Completed),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }

    /// True for every state other than `Active`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TradeState::Active)
    }
}

/// Direction of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "LONG",
            Direction::Short => "SHORT",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "long" | "buy" => Some(Self::Long),
            "short" | "sell" => Some(Self::Short),
            _ => None,
        }
    }
}

/// Point-in-time view of a trade.
///
/// `pnl` and `pnl_percentage` are outputs written only by
/// [`PositionValuator`](crate::valuation::PositionValuator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSnapshot {
    /// Unique trade identifier
    #[serde(default)]
    pub trade_id: String,

    /// Trading symbol for display
    #[serde(default)]
    pub trading_symbol: String,

    /// Lifecycle state
    pub trade_state: TradeState,

    /// Long or short
    pub direction: Direction,

    /// Average fill price at entry
    pub entry_price: Decimal,

    /// Average fill price at exit (meaningful once the trade is terminal)
    #[serde(default)]
    pub exit_price: Decimal,

    /// Last traded market price (meaningful while the trade is active)
    #[serde(default)]
    pub current_market_price: Decimal,

    /// Quantity actually filled
    pub filled_quantity: i64,

    /// Profit or loss in currency units
    #[serde(default)]
    pub pnl: Decimal,

    /// Profit or loss as a percentage of trade value
    #[serde(default)]
    pub pnl_percentage: Decimal,
}

impl TradeSnapshot {
    /// Create a snapshot with no exit, no market price and zeroed PnL.
    pub fn new(
        trade_state: TradeState,
        direction: Direction,
        entry_price: Decimal,
        filled_quantity: i64,
    ) -> Self {
        Self {
            trade_id: String::new(),
            trading_symbol: String::new(),
            trade_state,
            direction,
            entry_price,
            exit_price: Decimal::ZERO,
            current_market_price: Decimal::ZERO,
            filled_quantity,
            pnl: Decimal::ZERO,
            pnl_percentage: Decimal::ZERO,
        }
    }

    /// Capital committed at entry (`entry_price * filled_quantity`), `None` on overflow.
    pub fn trade_value(&self) -> Option<Decimal> {
        self.entry_price.checked_mul(Decimal::from(self.filled_quantity))
    }
}
