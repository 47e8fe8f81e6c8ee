//! Gap analysis by maturity bucket.
//!
//! - [`liquidity_gap`]: balances maturing per bucket, with a cumulative gap
//! - [`cash_flow_gap`]: balances spread into even monthly flows per bucket
//!
//! Both tables list every bucket of the schedule in ascending order.

mod cashflow;
mod liquidity;

pub use cashflow::{cash_flow_gap, monthly_flow, CashFlowGapRow, CashFlowGapTable};
pub use liquidity::{liquidity_gap, LiquidityGapRow, LiquidityGapTable};
