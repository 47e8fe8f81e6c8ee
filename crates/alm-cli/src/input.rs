//! Loading balance sheets, derivatives books and configuration.
//!
//! CSV headers are checked against the required column sets before any row
//! is read; the built-in sample data stands in for omitted files.

use std::io::Read;
use std::path::Path;

use alm_core::records::{
    balance_sheet_from_records, check_headers, derivatives_from_records, BalanceSheetRecord,
    DerivativeRecord, BALANCE_SHEET_COLUMNS, DERIVATIVE_COLUMNS,
};
use alm_core::{sample, AlmConfig, BalanceSheetInstrument, DerivativeInstrument, RateSensitivityTable};

use crate::error::{CliError, CliResult};

fn csv_error(path: &str) -> impl Fn(csv::Error) -> CliError + '_ {
    move |source| CliError::Csv {
        path: path.to_string(),
        source,
    }
}

/// Parses balance-sheet CSV from a reader.
pub fn parse_balance_sheet<R: Read>(reader: R, path: &str) -> CliResult<Vec<BalanceSheetInstrument>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers().map_err(csv_error(path))?.clone();
    check_headers(BALANCE_SHEET_COLUMNS, &headers.iter().collect::<Vec<_>>())?;

    let records = rdr
        .deserialize::<BalanceSheetRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_error(path))?;
    tracing::debug!(path, rows = records.len(), "read balance sheet");
    Ok(balance_sheet_from_records(records)?)
}

/// Parses derivatives-book CSV from a reader.
pub fn parse_derivatives<R: Read>(reader: R, path: &str) -> CliResult<Vec<DerivativeInstrument>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers().map_err(csv_error(path))?.clone();
    check_headers(DERIVATIVE_COLUMNS, &headers.iter().collect::<Vec<_>>())?;

    let records = rdr
        .deserialize::<DerivativeRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_error(path))?;
    tracing::debug!(path, rows = records.len(), "read derivatives book");
    Ok(derivatives_from_records(records)?)
}

/// Loads a balance sheet, or the sample one if no path is given.
pub fn load_balance_sheet(path: Option<&Path>) -> CliResult<Vec<BalanceSheetInstrument>> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            parse_balance_sheet(file, &path.display().to_string())
        }
        None => {
            tracing::info!("no balance sheet given, using sample data");
            Ok(sample::balance_sheet()?)
        }
    }
}

/// Loads a derivatives book, or the sample one if no path is given.
pub fn load_derivatives(path: Option<&Path>) -> CliResult<Vec<DerivativeInstrument>> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            parse_derivatives(file, &path.display().to_string())
        }
        None => {
            tracing::info!("no derivatives book given, using sample data");
            Ok(sample::derivatives_book()?)
        }
    }
}

/// Loads a sensitivity table from JSON (`{"Product": coefficient}`), or
/// the standard table if no path is given.
pub fn load_sensitivities(path: Option<&Path>) -> CliResult<RateSensitivityTable> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(RateSensitivityTable::standard()),
    }
}

/// Loads engine configuration, or defaults if no path is given.
pub fn load_config(path: Option<&Path>) -> CliResult<AlmConfig> {
    match path {
        Some(path) => Ok(AlmConfig::from_file(path)?),
        None => Ok(AlmConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alm_core::AlmError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_sample_csv() {
        let sheet = parse_balance_sheet(sample::BALANCE_SHEET_CSV.as_bytes(), "sample").unwrap();
        assert_eq!(sheet.len(), 9);
        assert_eq!(sheet[7].duration, Some(1.5));

        let book = parse_derivatives(sample::DERIVATIVES_CSV.as_bytes(), "sample").unwrap();
        assert_eq!(book.len(), 5);
        assert_eq!(book[0].notional, dec!(10_000_000));
    }

    #[test]
    fn test_missing_column() {
        let csv = "Product,Type,Rate (%),Maturity (Months)\nHELOC,Asset,5.5,12\n";
        let err = parse_balance_sheet(csv.as_bytes(), "test").unwrap_err();
        assert!(matches!(
            err,
            CliError::Alm(AlmError::Schema { ref column, .. }) if column == "Amount ($)"
        ));
    }

    #[test]
    fn test_missing_cell() {
        let csv = "Product,Type,Amount ($),Rate (%),Maturity (Months)\nHELOC,Asset,2700000,,12\n";
        let err = parse_balance_sheet(csv.as_bytes(), "test").unwrap_err();
        assert!(matches!(err, CliError::Alm(AlmError::Schema { .. })));
    }

    #[test]
    fn test_unknown_side() {
        let csv = "Product,Type,Amount ($),Rate (%),Maturity (Months)\nHELOC,Equity,2700000,5.5,12\n";
        let err = parse_balance_sheet(csv.as_bytes(), "test").unwrap_err();
        assert!(matches!(err, CliError::Alm(AlmError::Schema { .. })));
    }

    #[test]
    fn test_field_name_headers() {
        let csv = "product,side,amount,rate,maturityMonths\nLoan,asset,100,5,6\n";
        let sheet = parse_balance_sheet(csv.as_bytes(), "test").unwrap();
        assert_eq!(sheet[0].amount, dec!(100));
        assert!(sheet[0].duration.is_none());
    }
}
