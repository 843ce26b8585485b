//! Currency and exchange-tick rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Decimal places kept on currency amounts (PnL, percentages).
pub const CURRENCY_DP: u32 = 2;

/// Minimum price increment accepted by the exchange.
pub const TICK_SIZE: Decimal = dec!(0.05);

/// Number of ticks in one currency unit.
const TICKS_PER_UNIT: Decimal = dec!(20);

/// Round an amount to 2 decimal places.
///
/// Ties go to the even neighbour (banker's rounding): `2.345 -> 2.34`,
/// `2.355 -> 2.36`.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointNearestEven)
}

/// Snap a price up to the next multiple of [`TICK_SIZE`].
///
/// Never rounds down: a price already on a tick is returned unchanged,
/// anything between ticks moves to the tick above. Total over the whole
/// `Decimal` range.
pub fn round_to_tick(price: Decimal) -> Decimal {
    // Only the fractional part is scaled, so |fract * 20| < 20 cannot overflow.
    // Whole units are already on a tick, and whole + ceil(fract) stays within
    // range because Decimal::MAX and MIN are integers.
    let whole = price.trunc();
    let fract = price - whole;
    whole + (fract * TICKS_PER_UNIT).ceil() / TICKS_PER_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency_ties_to_even() {
        assert_eq!(round_currency(dec!(2.345)), dec!(2.34));
        assert_eq!(round_currency(dec!(2.355)), dec!(2.36));
        assert_eq!(round_currency(dec!(-2.345)), dec!(-2.34));
        assert_eq!(round_currency(dec!(0.125)), dec!(0.12));
    }

    #[test]
    fn test_round_currency_non_ties() {
        assert_eq!(round_currency(dec!(12.3449)), dec!(12.34));
        assert_eq!(round_currency(dec!(12.3451)), dec!(12.35));
        assert_eq!(round_currency(dec!(50)), dec!(50.00));
        assert_eq!(round_currency(dec!(-40.004)), dec!(-40.00));
    }

    #[test]
    fn test_round_currency_bounds() {
        // Exact midpoints sit at distance 0.005; everything else is strictly closer
        let mut x = dec!(-10.0000);
        while x <= dec!(10.0000) {
            let r = round_currency(x);
            let err = (r - x).abs();
            assert!(r.scale() <= CURRENCY_DP, "{} -> {}", x, r);
            if (x * dec!(1000)).fract().is_zero() && (x * dec!(1000)).abs() % dec!(10) == dec!(5) {
                assert_eq!(err, dec!(0.005), "{} -> {}", x, r);
            } else {
                assert!(err < dec!(0.005), "{} -> {}", x, r);
            }
            x += dec!(0.0037);
        }
    }

    #[test]
    fn test_round_to_tick_on_tick_unchanged() {
        assert_eq!(round_to_tick(dec!(100.05)), dec!(100.05));
        assert_eq!(round_to_tick(dec!(100.00)), dec!(100));
        assert_eq!(round_to_tick(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_round_to_tick_rounds_up() {
        assert_eq!(round_to_tick(dec!(100.01)), dec!(100.05));
        assert_eq!(round_to_tick(dec!(100.049)), dec!(100.05));
        assert_eq!(round_to_tick(dec!(100.051)), dec!(100.10));
        assert_eq!(round_to_tick(dec!(245.96)), dec!(246.00));
        assert_eq!(round_to_tick(dec!(10.001)), dec!(10.05));
    }

    #[test]
    fn test_round_to_tick_negative() {
        assert_eq!(round_to_tick(dec!(-1.03)), dec!(-1.00));
        assert_eq!(round_to_tick(dec!(-1.05)), dec!(-1.05));
        assert_eq!(round_to_tick(dec!(-0.01)), Decimal::ZERO);
    }

    #[test]
    fn test_round_to_tick_extremes() {
        assert_eq!(round_to_tick(Decimal::MAX), Decimal::MAX);
        assert_eq!(round_to_tick(Decimal::MIN), Decimal::MIN);

        // 29 significant digits: scaling the whole price by 20 would not fit
        assert_eq!(
            round_to_tick(dec!(792281625142643375935439503.23)),
            dec!(792281625142643375935439503.25)
        );
    }

    #[test]
    fn test_round_to_tick_multiple_and_not_below() {
        let mut p = Decimal::ZERO;
        while p <= dec!(25) {
            let t = round_to_tick(p);
            assert!(t >= p, "{} -> {}", p, t);
            assert!((t % TICK_SIZE).is_zero(), "{} -> {}", p, t);
            assert!(t - p < TICK_SIZE);
            p += dec!(0.013);
        }
    }
}
