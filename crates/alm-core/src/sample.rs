//! Sample community-bank balance sheet and derivatives book.
//!
//! Used by the CLI when no input file is given and by tests across the
//! workspace. The CSV forms use the dashboard export headers.

use crate::error::AlmResult;
use crate::types::{BalanceSheetInstrument, DerivativeInstrument, ProductType, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Sample balance sheet in CSV form.
pub const BALANCE_SHEET_CSV: &str = "\
Product,Type,Amount ($),Rate (%),Duration (Years),Maturity (Months)
Fixed Mortgage,Asset,5500000,4.0,5,60
HELOC,Asset,2700000,5.5,3,12
Commercial Loan,Asset,4200000,6.0,4,36
Investment Securities,Asset,6000000,3.0,7,84
Core Checking,Liability,3500000,0.1,1,36
Savings Account,Liability,2800000,0.3,2,24
Time Deposits,Liability,4000000,2.0,3,36
FHLB Advances,Liability,1500000,4.2,1.5,18
Fed Funds Purchased,Liability,1000000,5.0,0.5,3
";

/// Sample derivatives book in CSV form.
pub const DERIVATIVES_CSV: &str = "\
Instrument,Notional ($),Maturity (Months),Type,MTM ($),Strike (%),Delta
IRS,10000000,60,Interest Rate,250000,,0.8
Caps,5000000,36,Interest Rate,50000,,0.5
Swaptions,2000000,24,Interest Rate,30000,,0.6
FX Forward,3000000,12,FX,15000,,0.7
FX Swap,4000000,6,FX,20000,,0.65
";

const BALANCE_SHEET: [(&str, Side, Decimal, f64, f64, f64); 9] = [
    ("Fixed Mortgage", Side::Asset, dec!(5_500_000), 4.0, 5.0, 60.0),
    ("HELOC", Side::Asset, dec!(2_700_000), 5.5, 3.0, 12.0),
    ("Commercial Loan", Side::Asset, dec!(4_200_000), 6.0, 4.0, 36.0),
    ("Investment Securities", Side::Asset, dec!(6_000_000), 3.0, 7.0, 84.0),
    ("Core Checking", Side::Liability, dec!(3_500_000), 0.1, 1.0, 36.0),
    ("Savings Account", Side::Liability, dec!(2_800_000), 0.3, 2.0, 24.0),
    ("Time Deposits", Side::Liability, dec!(4_000_000), 2.0, 3.0, 36.0),
    ("FHLB Advances", Side::Liability, dec!(1_500_000), 4.2, 1.5, 18.0),
    ("Fed Funds Purchased", Side::Liability, dec!(1_000_000), 5.0, 0.5, 3.0),
];

const DERIVATIVES: [(&str, Decimal, f64, ProductType, Decimal, f64); 5] = [
    ("IRS", dec!(10_000_000), 60.0, ProductType::InterestRate, dec!(250_000), 0.8),
    ("Caps", dec!(5_000_000), 36.0, ProductType::InterestRate, dec!(50_000), 0.5),
    ("Swaptions", dec!(2_000_000), 24.0, ProductType::InterestRate, dec!(30_000), 0.6),
    ("FX Forward", dec!(3_000_000), 12.0, ProductType::FX, dec!(15_000), 0.7),
    ("FX Swap", dec!(4_000_000), 6.0, ProductType::FX, dec!(20_000), 0.65),
];

/// The sample balance sheet: $18.4M of assets against $12.8M of liabilities.
///
/// # Errors
///
/// Propagates builder validation errors.
pub fn balance_sheet() -> AlmResult<Vec<BalanceSheetInstrument>> {
    BALANCE_SHEET
        .iter()
        .map(|(product, side, amount, rate, duration, maturity)| {
            BalanceSheetInstrument::builder()
                .product(*product)
                .side(*side)
                .amount(*amount)
                .rate(*rate)
                .duration(*duration)
                .maturity_months(*maturity)
                .build()
        })
        .collect()
}

/// The sample derivatives book.
///
/// # Errors
///
/// Propagates builder validation errors.
pub fn derivatives_book() -> AlmResult<Vec<DerivativeInstrument>> {
    DERIVATIVES
        .iter()
        .map(|(name, notional, maturity, product_type, mtm, delta)| {
            DerivativeInstrument::builder()
                .instrument(*name)
                .notional(*notional)
                .maturity_months(*maturity)
                .product_type(*product_type)
                .current_mtm(*mtm)
                .delta(*delta)
                .build()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_sheet() {
        let sheet = balance_sheet().unwrap();
        assert_eq!(sheet.len(), 9);
        let assets: Decimal = sheet.iter().filter(|i| i.is_asset()).map(|i| i.amount).sum();
        let liabilities: Decimal = sheet
            .iter()
            .filter(|i| i.is_liability())
            .map(|i| i.amount)
            .sum();
        assert_eq!(assets, dec!(18_400_000));
        assert_eq!(liabilities, dec!(12_800_000));
    }

    #[test]
    fn test_derivatives_book() {
        let book = derivatives_book().unwrap();
        assert_eq!(book.len(), 5);
        assert_eq!(book.iter().filter(|d| d.is_fx()).count(), 2);
        let mtm: Decimal = book.iter().map(|d| d.current_mtm).sum();
        assert_eq!(mtm, dec!(365_000));
    }

    #[test]
    fn test_csv_rows_match_typed_rows() {
        assert_eq!(BALANCE_SHEET_CSV.lines().count(), 1 + BALANCE_SHEET.len());
        assert_eq!(DERIVATIVES_CSV.lines().count(), 1 + DERIVATIVES.len());
    }
}
