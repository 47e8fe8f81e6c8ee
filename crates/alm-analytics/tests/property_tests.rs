//! Property-based tests for ALM invariants.
//!
//! These tests verify properties that should hold for any balance sheet:
//! - The final cumulative liquidity gap equals assets minus liabilities
//! - Bucketing is total and consistent with bucket bounds
//! - FTP lookup is monotone and flat beyond the curve
//! - The baseline scenario has a zero NII delta
//! - A zero parallel curve shift is the identity

use alm_analytics::prelude::*;
use alm_analytics::{bucket_instruments, CurveShock};
use alm_core::{BucketSchedule, FtpCurve};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// STRATEGIES
// =============================================================================

fn instrument_strategy() -> impl Strategy<Value = BalanceSheetInstrument> {
    (
        any::<bool>(),
        0u64..50_000_000,
        0.0f64..12.0,
        prop::option::of(0.0f64..30.0),
        0.0f64..400.0,
    )
        .prop_map(|(asset, amount, rate, duration, months)| {
            let builder = BalanceSheetInstrument::builder()
                .product(if asset { "Loan" } else { "Deposit" })
                .amount(Decimal::from(amount))
                .rate(rate)
                .maybe_duration(duration)
                .maturity_months(months);
            let builder = if asset { builder.asset() } else { builder.liability() };
            builder.build().unwrap()
        })
}

fn sheet_strategy() -> impl Strategy<Value = Vec<BalanceSheetInstrument>> {
    prop::collection::vec(instrument_strategy(), 0..60)
}

fn edges_strategy() -> impl Strategy<Value = BucketSchedule> {
    prop::collection::btree_set(1u32..240, 1..10)
        .prop_map(|set| BucketSchedule::new(set.into_iter().collect()).unwrap())
}

/// Curves with increasing thresholds and non-decreasing rates.
fn ftp_curve_strategy() -> impl Strategy<Value = FtpCurve> {
    (
        prop::collection::btree_set(1u32..240, 1..8),
        -2.0f64..5.0,
        prop::collection::vec(0.0f64..2.0, 8),
    )
        .prop_map(|(thresholds, start, steps)| {
            let pairs: Vec<(u32, f64)> = thresholds
                .into_iter()
                .zip(steps.iter().scan(start, |rate, step| {
                    *rate += step;
                    Some(*rate)
                }))
                .collect();
            FtpCurve::from_pairs(&pairs).unwrap()
        })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn final_cumulative_gap_is_net_balance(sheet in sheet_strategy(), schedule in edges_strategy()) {
        let config = AlmConfig::default();
        let table = liquidity_gap(&sheet, &schedule, &config);

        let assets: Decimal = sheet.iter().filter(|i| i.is_asset()).map(|i| i.amount).sum();
        let liabilities: Decimal = sheet.iter().filter(|i| i.is_liability()).map(|i| i.amount).sum();

        prop_assert_eq!(table.rows.len(), schedule.len());
        prop_assert_eq!(table.final_cumulative_gap(), assets - liabilities);
    }

    #[test]
    fn every_instrument_lands_in_its_bucket(sheet in sheet_strategy(), schedule in edges_strategy()) {
        for assignment in bucket_instruments(&sheet, &schedule) {
            prop_assert!(assignment.bucket.contains(assignment.maturity_months));
        }
    }

    #[test]
    fn bucketing_is_exclusive(months in 0.0f64..500.0) {
        let schedule = BucketSchedule::standard();
        let hits = schedule.buckets().iter().filter(|b| b.contains(months)).count();
        prop_assert_eq!(hits, 1);
    }

    #[test]
    fn ftp_lookup_is_monotone(
        curve in ftp_curve_strategy(),
        a in 0.0f64..300.0,
        b in 0.0f64..300.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(curve.rate_for(lo) <= curve.rate_for(hi));

        let last = curve.points()[curve.points().len() - 1];
        if lo > f64::from(last.threshold_months) {
            prop_assert!(curve.extrapolates(lo));
            prop_assert_eq!(curve.rate_for(lo), last.rate_pct);
            prop_assert_eq!(curve.rate_for(hi), last.rate_pct);
        }
    }

    #[test]
    fn standard_ftp_curve_is_flat_past_120_months(months in 120.0f64..600.0) {
        let curve = FtpCurve::standard();
        prop_assert_eq!(curve.rate_for(months), 3.5);
    }

    #[test]
    fn baseline_delta_is_zero(sheet in sheet_strategy(), base_shift in -3.0f64..3.0) {
        let scenarios = standard_scenarios::with_shocks(base_shift, 1.0, 1.0);
        let report = run_rate_scenarios(
            &sheet,
            &RateSensitivityTable::standard(),
            &scenarios,
            &AlmConfig::default(),
        ).unwrap();
        prop_assert_eq!(report.baseline_result().unwrap().delta_from_base_nii, Decimal::ZERO);
    }

    #[test]
    fn duration_gap_is_finite_when_both_sides_present(sheet in sheet_strategy()) {
        let config = AlmConfig::default();
        let has_assets = sheet.iter().any(|i| i.is_asset() && !i.amount.is_zero());
        let has_liabilities = sheet.iter().any(|i| i.is_liability() && !i.amount.is_zero());

        match duration_gap(&sheet, &config) {
            Ok(gap) => {
                prop_assert!(has_assets && has_liabilities);
                prop_assert!(gap.duration_gap.is_finite());
            }
            Err(AlmError::InvalidInput { .. }) => prop_assert!(!(has_assets && has_liabilities)),
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn parallel_curve_shift_is_uniform(bps in -300i32..=300) {
        let config = AlmConfig::default();
        let out = generate_curve_scenario(
            "Parallel",
            &CurveShock::ParallelShift(f64::from(bps)),
            &config.curve_scenarios,
        ).unwrap();
        for shift in &out.bp_shift_per_tenor {
            prop_assert!((shift - f64::from(bps)).abs() < 1e-9);
        }
        if bps == 0 {
            prop_assert_eq!(&out.shocked_curve, &out.base_curve);
            prop_assert_eq!(out.dv01_estimate, 0.0);
        }
    }
}
