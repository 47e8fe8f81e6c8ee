//! Balance sheet overview.

use alm_core::{BalanceSheetInstrument, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product's balance and share of its side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBalance {
    /// Product name.
    pub product: String,
    /// Balance-sheet side.
    pub side: Side,
    /// Balance.
    pub amount: Decimal,
    /// Share of the side's total, in percent.
    pub share_of_side_pct: Decimal,
}

/// Totals and composition of a balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetOverview {
    /// Sum over assets.
    pub total_assets: Decimal,
    /// Sum over liabilities.
    pub total_liabilities: Decimal,
    /// `total_assets - total_liabilities`.
    pub equity: Decimal,
    /// Products sorted by descending balance.
    pub products: Vec<ProductBalance>,
}

impl BalanceSheetOverview {
    /// Products on one side, largest first.
    #[must_use]
    pub fn side(&self, side: Side) -> Vec<&ProductBalance> {
        self.products.iter().filter(|p| p.side == side).collect()
    }

    /// Equity as a percentage of assets, if assets are non-zero.
    #[must_use]
    pub fn equity_ratio_pct(&self) -> Option<Decimal> {
        (!self.total_assets.is_zero())
            .then(|| self.equity / self.total_assets * Decimal::ONE_HUNDRED)
    }
}

/// Summarizes a balance sheet.
///
/// Balances of rows with the same product and side are combined. Ties in
/// balance keep first-seen order.
#[must_use]
pub fn balance_sheet_overview(instruments: &[BalanceSheetInstrument]) -> BalanceSheetOverview {
    let mut combined: Vec<(String, Side, Decimal)> = Vec::new();
    let (mut total_assets, mut total_liabilities) = (Decimal::ZERO, Decimal::ZERO);

    for inst in instruments {
        match inst.side {
            Side::Asset => total_assets += inst.amount,
            Side::Liability => total_liabilities += inst.amount,
        }
        match combined
            .iter_mut()
            .find(|(p, s, _)| *p == inst.product && *s == inst.side)
        {
            Some(entry) => entry.2 += inst.amount,
            None => combined.push((inst.product.clone(), inst.side, inst.amount)),
        }
    }

    let share = |side: Side, amount: Decimal| {
        let total = match side {
            Side::Asset => total_assets,
            Side::Liability => total_liabilities,
        };
        if total.is_zero() {
            Decimal::ZERO
        } else {
            (amount / total * Decimal::ONE_HUNDRED).round_dp(4)
        }
    };

    let mut products: Vec<ProductBalance> = combined
        .into_iter()
        .map(|(product, side, amount)| ProductBalance {
            share_of_side_pct: share(side, amount),
            product,
            side,
            amount,
        })
        .collect();
    products.sort_by(|a, b| b.amount.cmp(&a.amount));

    BalanceSheetOverview {
        total_assets,
        total_liabilities,
        equity: total_assets - total_liabilities,
        products,
    }
}
