//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints a report: JSON gets the full report, table and CSV get the rows.
pub fn emit<T, R>(title: &str, report: &T, rows: &[R], format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize,
    R: Serialize + Tabled,
{
    match format {
        OutputFormat::Table => {
            print_header(title);
            print_table(rows);
            Ok(())
        }
        OutputFormat::Json => print_json(report),
        OutputFormat::Csv => print_csv(rows),
    }
}

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}

/// Prints data as JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats money as whole dollars with thousands separators.
pub fn format_money(value: &Decimal) -> String {
    let rounded = value.round_dp(0);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a percentage with two decimals.
pub fn format_pct(value: &f64) -> String {
    format!("{value:.2}%")
}

/// Formats a percentage held as `Decimal`.
pub fn format_pct_decimal(value: &Decimal) -> String {
    format!("{:.2}%", value.round_dp(2))
}

/// Formats years with two decimals.
pub fn format_years(value: &f64) -> String {
    format!("{value:.2}")
}

/// Formats basis points with sign.
pub fn format_bps(value: &f64) -> String {
    format!("{value:+.1}")
}

/// Formats an optional value or a dash.
pub fn format_opt(value: &Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v}"))
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a money amount.
    pub fn money(key: impl Into<String>, value: Decimal) -> Self {
        Self::new(key, format_money(&value))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(&dec!(5_500_000)), "$5,500,000");
        assert_eq!(format_money(&dec!(-3_500_000)), "-$3,500,000");
        assert_eq!(format_money(&dec!(82_500.4)), "$82,500");
        assert_eq!(format_money(&dec!(999)), "$999");
        assert_eq!(format_money(&dec!(0)), "$0");
        assert_eq!(format_money(&dec!(-0.2)), "$0");
    }

    #[test]
    fn test_format_bps() {
        assert_eq!(format_bps(&10.0), "+10.0");
        assert_eq!(format_bps(&-25.0), "-25.0");
    }
}
