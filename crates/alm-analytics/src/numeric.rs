//! Conversions between `f64` rates and `Decimal` money.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Decimal places kept when converting rates, durations and factors.
const FACTOR_DP: u32 = 12;

/// Converts an `f64` rate or factor to `Decimal`, rounded to 12 places.
///
/// Non-finite values map to zero; constructors upstream reject them.
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).map_or(Decimal::ZERO, |d| d.round_dp(FACTOR_DP).normalize())
}

/// Converts a `Decimal` to `f64`.
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Percent to fraction: `amount × pct / 100`.
pub(crate) fn pct_of(amount: Decimal, pct: f64) -> Decimal {
    amount * to_decimal(pct) / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_decimal() {
        assert_eq!(to_decimal(0.1), dec!(0.1));
        assert_eq!(to_decimal(2.5), dec!(2.5));
        assert_eq!(to_decimal(0.65), dec!(0.65));
        assert_eq!(to_decimal(-0.002), dec!(-0.002));
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    }

    #[test]
    fn test_pct_of() {
        assert_eq!(pct_of(dec!(5_500_000), 1.5), dec!(82_500));
        assert_eq!(pct_of(dec!(1_000_000), 5.0), dec!(50_000));
    }
}
