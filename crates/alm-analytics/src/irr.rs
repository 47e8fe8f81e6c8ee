//! Rate scenario engine: net interest income and ΔEVE under parallel shifts.
//!
//! ## Formulas
//!
//! Per scenario with shift `s` (percentage points) and per instrument:
//!
//! ```text
//! adj_balance     = amount × (1 + sensitivity(product) × s×100 / 100)
//! shifted_rate    = rate + s
//! annual_interest = adj_balance × shifted_rate / 100
//! NII             = Σ interest(assets) − Σ interest(liabilities)
//! ΔEVE            = Σ_assets(−amount × D × s/100) − Σ_liabilities(−amount × D × s/100)
//! ```
//!
//! ΔEVE uses the unadjusted principal. Each scenario is compared against the
//! configured baseline (default `"Base"`).

use crate::numeric::{pct_of, to_decimal};
use crate::parallel::{maybe_parallel_fold, maybe_parallel_map, maybe_parallel_try_map};
use alm_core::limits::{check_bounded, MAX_DURATION_YEARS, MAX_SENSITIVITY, MAX_SHIFT_PCT};
use alm_core::{
    AlmConfig, AlmError, AlmResult, BalanceSheetInstrument, RateSensitivityTable, Scenario,
    SensitivityPolicy, Side,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// One instrument projected under a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentProjection {
    /// Product name.
    pub product: String,
    /// Balance-sheet side.
    pub side: Side,
    /// Sensitivity coefficient applied.
    pub sensitivity: f64,
    /// Behaviourally adjusted balance.
    pub adj_balance: Decimal,
    /// Rate after the shift, in percent.
    pub shifted_rate: Decimal,
    /// `adj_balance × shifted_rate / 100`.
    pub annual_interest: Decimal,
    /// `−amount × duration × shift / 100`, before side netting.
    pub value_change: Decimal,
}

/// Result for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario name.
    pub scenario: String,
    /// Shift in percentage points.
    pub rate_shift_pct: f64,
    /// Net interest income.
    pub nii: Decimal,
    /// Change in economic value of equity.
    pub delta_eve: Decimal,
    /// `nii - nii(baseline)`.
    pub delta_from_base_nii: Decimal,
}

/// Results of a scenario run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Baseline scenario name.
    pub baseline: String,
    /// One row per scenario, in input order.
    pub rows: Vec<ScenarioResult>,
    /// Products that had no sensitivity entry and used zero.
    pub unmatched_products: Vec<String>,
}

impl ScenarioReport {
    /// Returns the result for a scenario.
    #[must_use]
    pub fn get(&self, scenario: &str) -> Option<&ScenarioResult> {
        self.rows.iter().find(|r| r.scenario == scenario)
    }

    /// Returns the baseline result.
    #[must_use]
    pub fn baseline_result(&self) -> Option<&ScenarioResult> {
        self.get(&self.baseline)
    }

    /// Scenario with the largest NII loss against the baseline.
    #[must_use]
    pub fn worst_nii(&self) -> Option<&ScenarioResult> {
        self.rows.iter().min_by_key(|r| r.delta_from_base_nii)
    }

    /// Scenario with the largest EVE loss.
    #[must_use]
    pub fn worst_eve(&self) -> Option<&ScenarioResult> {
        self.rows.iter().min_by_key(|r| r.delta_eve)
    }
}

/// Projects one instrument under a shift.
///
/// # Errors
///
/// Returns [`AlmError::InvalidInput`] if the sensitivity, shift or fallback
/// duration is non-finite or out of range.
pub fn project_instrument(
    instrument: &BalanceSheetInstrument,
    sensitivity: f64,
    rate_shift_pct: f64,
    default_duration: f64,
) -> AlmResult<InstrumentProjection> {
    check_bounded("rate sensitivity", sensitivity, MAX_SENSITIVITY)?;
    check_bounded("rate shift", rate_shift_pct, MAX_SHIFT_PCT)?;
    check_default_duration(default_duration)?;
    Ok(project(instrument, sensitivity, rate_shift_pct, default_duration))
}

fn check_default_duration(years: f64) -> AlmResult<()> {
    if years < 0.0 {
        return Err(AlmError::invalid_input(format!(
            "default duration must be non-negative, got {years}"
        )));
    }
    check_bounded("default duration", years, MAX_DURATION_YEARS)
}

/// Inputs are already checked against the crate limits.
fn project(
    instrument: &BalanceSheetInstrument,
    sensitivity: f64,
    rate_shift_pct: f64,
    default_duration: f64,
) -> InstrumentProjection {
    let shift = to_decimal(rate_shift_pct);
    let shift_bps = shift * Decimal::ONE_HUNDRED;
    let factor = Decimal::ONE + to_decimal(sensitivity) * shift_bps / Decimal::ONE_HUNDRED;
    let adj_balance = instrument.amount * factor;
    let shifted_rate = to_decimal(instrument.rate) + shift;
    let duration = to_decimal(instrument.duration_or(default_duration));

    InstrumentProjection {
        product: instrument.product.clone(),
        side: instrument.side,
        sensitivity,
        adj_balance,
        shifted_rate,
        annual_interest: adj_balance * shifted_rate / Decimal::ONE_HUNDRED,
        value_change: -pct_of(instrument.amount * duration, rate_shift_pct),
    }
}

/// Projects every instrument under one scenario.
///
/// # Errors
///
/// Returns [`AlmError::InvalidInput`] for an unknown product under
/// [`SensitivityPolicy::Strict`].
pub fn project_scenario(
    instruments: &[BalanceSheetInstrument],
    table: &RateSensitivityTable,
    scenario: &Scenario,
    config: &AlmConfig,
) -> AlmResult<Vec<InstrumentProjection>> {
    maybe_parallel_try_map(instruments, config, |inst| {
        let sensitivity = table.sensitivity_with(&inst.product, config.sensitivity_policy)?;
        project_instrument(
            inst,
            sensitivity,
            scenario.rate_shift_pct,
            config.default_duration_years,
        )
    })
}

fn validate_scenarios(scenarios: &[Scenario], baseline: &str) -> AlmResult<()> {
    let mut seen = HashSet::new();
    for s in scenarios {
        if s.name.trim().is_empty() {
            return Err(AlmError::invalid_input("scenario name cannot be empty"));
        }
        check_bounded(
            &format!("scenario '{}' shift", s.name),
            s.rate_shift_pct,
            MAX_SHIFT_PCT,
        )?;
        if !seen.insert(s.name.as_str()) {
            return Err(AlmError::invalid_input(format!(
                "duplicate scenario name '{}'",
                s.name
            )));
        }
    }
    if !seen.contains(baseline) {
        return Err(AlmError::missing_baseline(baseline));
    }
    Ok(())
}

/// Resolves sensitivities once, collecting products that fell back to zero.
fn resolve_sensitivities(
    instruments: &[BalanceSheetInstrument],
    table: &RateSensitivityTable,
    policy: SensitivityPolicy,
) -> AlmResult<(Vec<f64>, Vec<String>)> {
    let mut unmatched = BTreeSet::new();
    let mut coefficients = Vec::with_capacity(instruments.len());
    for inst in instruments {
        if !table.contains(&inst.product) {
            unmatched.insert(inst.product.clone());
        }
        coefficients.push(table.sensitivity_with(&inst.product, policy)?);
    }
    Ok((coefficients, unmatched.into_iter().collect()))
}

/// Runs every scenario over the balance sheet.
///
/// # Errors
///
/// - [`AlmError::InvalidInput`] for empty or duplicate scenario names, or an
///   unknown product under [`SensitivityPolicy::Strict`]
/// - [`AlmError::MissingBaseline`] if no scenario carries the baseline name
pub fn run_rate_scenarios(
    instruments: &[BalanceSheetInstrument],
    table: &RateSensitivityTable,
    scenarios: &[Scenario],
    config: &AlmConfig,
) -> AlmResult<ScenarioReport> {
    let baseline = config.baseline_scenario.as_str();
    validate_scenarios(scenarios, baseline)?;
    check_default_duration(config.default_duration_years)?;

    let (coefficients, unmatched) =
        resolve_sensitivities(instruments, table, config.sensitivity_policy)?;
    for product in &unmatched {
        tracing::warn!(%product, "no rate sensitivity for product, using 0");
    }

    let pairs: Vec<(&BalanceSheetInstrument, f64)> =
        instruments.iter().zip(coefficients).collect();

    let totals = maybe_parallel_map(scenarios, config, |scenario| {
        maybe_parallel_fold(
            &pairs,
            config,
            (Decimal::ZERO, Decimal::ZERO),
            |(nii, eve), (inst, sensitivity)| {
                let p = project(
                    inst,
                    *sensitivity,
                    scenario.rate_shift_pct,
                    config.default_duration_years,
                );
                let sign = inst.side.sign();
                (nii + sign * p.annual_interest, eve + sign * p.value_change)
            },
            |(a, b), (c, d)| (a + c, b + d),
        )
    });

    let base_nii = scenarios
        .iter()
        .zip(&totals)
        .find(|(s, _)| s.name == baseline)
        .map(|(_, (nii, _))| *nii)
        .ok_or_else(|| AlmError::missing_baseline(baseline))?;

    let rows = scenarios
        .iter()
        .zip(totals)
        .map(|(s, (nii, delta_eve))| ScenarioResult {
            scenario: s.name.clone(),
            rate_shift_pct: s.rate_shift_pct,
            nii,
            delta_eve,
            delta_from_base_nii: nii - base_nii,
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        scenarios = rows.len(),
        instruments = instruments.len(),
        %base_nii,
        "ran rate scenarios"
    );

    Ok(ScenarioReport {
        baseline: baseline.to_string(),
        rows,
        unmatched_products: unmatched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alm_core::limits::{MAX_AMOUNT, MAX_RATE_PCT};
    use alm_core::{sample, standard_scenarios};
    use rust_decimal_macros::dec;

    fn single_asset() -> Vec<BalanceSheetInstrument> {
        vec![BalanceSheetInstrument::builder()
            .product("Loan")
            .asset()
            .amount(dec!(1_000_000))
            .rate(4.0)
            .duration(2.0)
            .maturity_months(24.0)
            .build()
            .unwrap()]
    }

    #[test]
    fn test_single_asset_nii() {
        let table = RateSensitivityTable::new().with("Loan", 0.0).unwrap();
        let scenarios = vec![Scenario::base(0.0), Scenario::new("+100bps Shock", 1.0)];
        let report =
            run_rate_scenarios(&single_asset(), &table, &scenarios, &AlmConfig::default())
                .unwrap();

        let up = report.get("+100bps Shock").unwrap();
        assert_eq!(up.nii, dec!(50_000));
        assert_eq!(up.delta_from_base_nii, dec!(10_000));
        // -1,000,000 × 2 × 1/100
        assert_eq!(up.delta_eve, dec!(-20_000));

        let base = report.baseline_result().unwrap();
        assert_eq!(base.nii, dec!(40_000));
        assert_eq!(base.delta_from_base_nii, Decimal::ZERO);
        assert_eq!(base.delta_eve, Decimal::ZERO);
    }

    #[test]
    fn test_projection() {
        let inst = &single_asset()[0];
        let p = project_instrument(inst, -0.01, 1.0, 3.0).unwrap();
        assert_eq!(p.adj_balance, dec!(990_000));
        assert_eq!(p.shifted_rate, dec!(5));
        assert_eq!(p.annual_interest, dec!(49_500));
        assert_eq!(p.value_change, dec!(-20_000));
    }

    #[test]
    fn test_projection_rejects_out_of_range() {
        let inst = &single_asset()[0];
        assert!(project_instrument(inst, f64::NAN, 1.0, 3.0).is_err());
        assert!(project_instrument(inst, 0.01, 1e25, 3.0).is_err());
        assert!(project_instrument(inst, 0.01, 1.0, f64::INFINITY).is_err());
        assert!(project_instrument(inst, 0.01, 1.0, -1.0).is_err());
    }

    #[test]
    fn test_out_of_range_scenario_shift() {
        let scenarios = vec![Scenario::base(0.0), Scenario::new("Wild", 1e20)];
        let result = run_rate_scenarios(
            &single_asset(),
            &RateSensitivityTable::new(),
            &scenarios,
            &AlmConfig::default(),
        );
        assert!(matches!(result, Err(AlmError::InvalidInput { .. })));
    }

    #[test]
    fn test_balances_at_limits() {
        let big = |product: &str, asset: bool| {
            let builder = BalanceSheetInstrument::builder()
                .product(product)
                .amount(MAX_AMOUNT)
                .rate(MAX_RATE_PCT)
                .duration(MAX_DURATION_YEARS)
                .maturity_months(12.0);
            let builder = if asset { builder.asset() } else { builder.liability() };
            builder.build().unwrap()
        };
        let sheet = vec![big("Loan", true), big("Loan", true), big("Deposit", false)];
        let table = RateSensitivityTable::from_pairs(&[
            ("Loan", MAX_SENSITIVITY),
            ("Deposit", -MAX_SENSITIVITY),
        ])
        .unwrap();
        let scenarios = vec![
            Scenario::base(0.0),
            Scenario::new("Up", MAX_SHIFT_PCT),
            Scenario::new("Down", -MAX_SHIFT_PCT),
        ];
        let report =
            run_rate_scenarios(&sheet, &table, &scenarios, &AlmConfig::sequential()).unwrap();
        // Two assets and one liability of 1e15 at 1000%
        assert_eq!(report.baseline_result().unwrap().nii, dec!(10_000_000_000_000_000));
        assert_eq!(report.rows.len(), 3);
    }

    #[test]
    fn test_liability_eve_offsets() {
        let mut instruments = single_asset();
        instruments.push(
            BalanceSheetInstrument::builder()
                .product("Deposit")
                .liability()
                .amount(dec!(1_000_000))
                .rate(1.0)
                .duration(2.0)
                .maturity_months(24.0)
                .build()
                .unwrap(),
        );
        let scenarios = vec![Scenario::base(1.0)];
        let report = run_rate_scenarios(
            &instruments,
            &RateSensitivityTable::new(),
            &scenarios,
            &AlmConfig::default(),
        )
        .unwrap();
        assert_eq!(report.rows[0].delta_eve, Decimal::ZERO);
        // 1M × 5% − 1M × 2%
        assert_eq!(report.rows[0].nii, dec!(30_000));
        assert_eq!(report.unmatched_products, vec!["Deposit", "Loan"]);
    }

    #[test]
    fn test_missing_baseline() {
        let scenarios = vec![Scenario::new("+100bps Shock", 1.0)];
        let err = run_rate_scenarios(
            &single_asset(),
            &RateSensitivityTable::new(),
            &scenarios,
            &AlmConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, AlmError::missing_baseline("Base"));
    }

    #[test]
    fn test_custom_baseline_name() {
        let scenarios = vec![Scenario::new("Baseline", 0.0), Scenario::new("Up", 2.0)];
        let config = AlmConfig::default().with_baseline_scenario("Baseline");
        let report = run_rate_scenarios(
            &single_asset(),
            &RateSensitivityTable::new(),
            &scenarios,
            &config,
        )
        .unwrap();
        assert_eq!(report.baseline, "Baseline");
        assert_eq!(report.get("Up").unwrap().delta_from_base_nii, dec!(20_000));
    }

    #[test]
    fn test_invalid_scenario_names() {
        let table = RateSensitivityTable::new();
        let config = AlmConfig::default();
        let dup = vec![Scenario::base(0.0), Scenario::base(1.0)];
        assert!(matches!(
            run_rate_scenarios(&single_asset(), &table, &dup, &config),
            Err(AlmError::InvalidInput { .. })
        ));
        let blank = vec![Scenario::base(0.0), Scenario::new(" ", 1.0)];
        assert!(matches!(
            run_rate_scenarios(&single_asset(), &table, &blank, &config),
            Err(AlmError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_strict_policy() {
        let config = AlmConfig::default().with_sensitivity_policy(SensitivityPolicy::Strict);
        let result = run_rate_scenarios(
            &single_asset(),
            &RateSensitivityTable::standard(),
            &standard_scenarios::all(),
            &config,
        );
        assert!(matches!(result, Err(AlmError::InvalidInput { .. })));
    }

    #[test]
    fn test_sample_sheet_standard_scenarios() {
        let sheet = sample::balance_sheet().unwrap();
        let report = run_rate_scenarios(
            &sheet,
            &RateSensitivityTable::standard(),
            &standard_scenarios::all(),
            &AlmConfig::default(),
        )
        .unwrap();

        assert_eq!(report.rows.len(), 6);
        assert!(report.unmatched_products.is_empty());
        assert_eq!(
            report.get("Stable Rates").unwrap().nii,
            report.baseline_result().unwrap().nii
        );
        // Asset-sensitive sheet: a rate rise lowers EVE
        assert!(report.get("+100bps Shock").unwrap().delta_eve < Decimal::ZERO);
        assert_eq!(report.worst_eve().unwrap().scenario, "+100bps Shock");
    }

    #[test]
    fn test_projection_strict_error() {
        let config = AlmConfig::default().with_sensitivity_policy(SensitivityPolicy::Strict);
        assert!(project_scenario(
            &single_asset(),
            &RateSensitivityTable::new(),
            &Scenario::base(0.0),
            &config
        )
        .is_err());
    }
}
