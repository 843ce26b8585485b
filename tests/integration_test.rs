use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tradeclock::pricing::{round_currency, round_to_tick, TICK_SIZE};
use tradeclock::session::{FixedClock, HolidayCalendar, HolidaySet};
use tradeclock::{Direction, PositionValuator, SessionClock, SessionHours, TradeSnapshot, TradeState};

fn session_at(h: u32, m: u32, s: u32) -> SessionClock<FixedClock, Arc<dyn HolidayCalendar>> {
    // 2024-01-26 is a listed holiday (Friday); 2024-01-29 a normal Monday
    let holidays: Arc<dyn HolidayCalendar> = Arc::new(HolidaySet::new(["2024-01-26"]));
    SessionClock::new(
        FixedClock::at(2024, 1, 29, h, m, s).unwrap(),
        holidays,
        SessionHours::default(),
    )
}

#[test]
fn trading_day_lifecycle() {
    let before = session_at(8, 0, 0);
    assert!(!before.is_open().unwrap());
    assert!(!before.is_closed_for_day().unwrap());

    let during = session_at(11, 30, 0);
    assert!(during.is_open().unwrap());
    assert!(!during.is_closed_for_day().unwrap());

    let after = session_at(16, 0, 0);
    assert!(!after.is_open().unwrap());
    assert!(after.is_closed_for_day().unwrap());
}

#[test]
fn wait_after_open_does_not_block() {
    let session = session_at(15, 0, 0);
    let waited = tokio_test::block_on(session.wait_until_open("integration"));
    assert_eq!(waited, 0);
}

#[test]
fn trade_marked_then_closed() {
    let mut trade = TradeSnapshot::new(TradeState::Active, Direction::Long, dec!(100.00), 10);

    trade.current_market_price = dec!(105.00);
    PositionValuator::valuate(&mut trade);
    assert_eq!(trade.pnl, dec!(50.00));
    assert_eq!(trade.pnl_percentage, dec!(5.00));

    // Price feed drops out: last mark is kept
    trade.current_market_price = Decimal::ZERO;
    PositionValuator::valuate(&mut trade);
    assert_eq!(trade.pnl, dec!(50.00));

    trade.trade_state = TradeState::Completed;
    trade.exit_price = round_to_tick(dec!(97.01));
    assert_eq!(trade.exit_price, dec!(97.05));
    PositionValuator::valuate(&mut trade);
    assert_eq!(trade.pnl, dec!(-29.50));
    assert_eq!(trade.pnl_percentage, dec!(-2.95));
}

#[test]
fn rounding_helpers_agree() {
    let tick = round_to_tick(dec!(123.456));
    assert_eq!(tick, dec!(123.50));
    assert!((tick % TICK_SIZE).is_zero());
    assert_eq!(round_currency(tick), tick);
}
