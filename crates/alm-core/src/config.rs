//! Configuration for ALM analytics computation.

use crate::error::{AlmError, AlmResult};
use crate::limits::MAX_DURATION_YEARS;
use crate::types::{BucketSchedule, FtpCurve, SensitivityPolicy, YieldCurve, BASE_SCENARIO};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fallback duration in years for instruments that do not carry one.
pub const DEFAULT_DURATION_YEARS: f64 = 3.0;

/// Configuration for the yield curve scenario generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveScenarioConfig {
    /// Base curve at the key tenors.
    pub base_curve: YieldCurve,

    /// Steepener increment per tenor index, in basis points.
    pub steepener_step_bps: f64,

    /// Assumed DV01 in dollars per basis point per $1M notional.
    pub assumed_dv01: f64,
}

impl Default for CurveScenarioConfig {
    fn default() -> Self {
        Self {
            base_curve: YieldCurve::standard(),
            steepener_step_bps: 10.0,
            assumed_dv01: 50.0,
        }
    }
}

impl CurveScenarioConfig {
    /// Sets the base curve.
    #[must_use]
    pub fn with_base_curve(mut self, curve: YieldCurve) -> Self {
        self.base_curve = curve;
        self
    }

    /// Sets the steepener increment.
    #[must_use]
    pub fn with_steepener_step(mut self, bps: f64) -> Self {
        self.steepener_step_bps = bps;
        self
    }

    /// Sets the assumed DV01.
    #[must_use]
    pub fn with_assumed_dv01(mut self, dv01: f64) -> Self {
        self.assumed_dv01 = dv01;
        self
    }
}

/// Configuration for ALM analytics computation.
///
/// Controls parallelism, fallback conventions and the curves and schedules
/// the calculators run against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlmConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum item count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Duration used for instruments without one.
    pub default_duration_years: f64,

    /// Maturity bucket edges for gap tables.
    pub buckets: BucketSchedule,

    /// Treatment of products missing from the sensitivity table.
    pub sensitivity_policy: SensitivityPolicy,

    /// Name of the scenario that NII deltas are measured against.
    pub baseline_scenario: String,

    /// Transfer-pricing curve.
    pub ftp_curve: FtpCurve,

    /// Yield curve scenario settings.
    pub curve_scenarios: CurveScenarioConfig,
}

impl Default for AlmConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100,
            default_duration_years: DEFAULT_DURATION_YEARS,
            buckets: BucketSchedule::standard(),
            sensitivity_policy: SensitivityPolicy::ZeroFallback,
            baseline_scenario: BASE_SCENARIO.to_string(),
            ftp_curve: FtpCurve::standard(),
            curve_scenarios: CurveScenarioConfig::default(),
        }
    }
}

impl AlmConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the fallback duration.
    #[must_use]
    pub fn with_default_duration(mut self, years: f64) -> Self {
        self.default_duration_years = years;
        self
    }

    /// Sets the bucket schedule.
    #[must_use]
    pub fn with_buckets(mut self, buckets: BucketSchedule) -> Self {
        self.buckets = buckets;
        self
    }

    /// Sets the sensitivity policy.
    #[must_use]
    pub fn with_sensitivity_policy(mut self, policy: SensitivityPolicy) -> Self {
        self.sensitivity_policy = policy;
        self
    }

    /// Sets the baseline scenario name.
    #[must_use]
    pub fn with_baseline_scenario(mut self, name: impl Into<String>) -> Self {
        self.baseline_scenario = name.into();
        self
    }

    /// Sets the FTP curve.
    #[must_use]
    pub fn with_ftp_curve(mut self, curve: FtpCurve) -> Self {
        self.ftp_curve = curve;
        self
    }

    /// Sets the yield curve scenario settings.
    #[must_use]
    pub fn with_curve_scenarios(mut self, curve_scenarios: CurveScenarioConfig) -> Self {
        self.curve_scenarios = curve_scenarios;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Checks values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::Config`] describing the first bad setting.
    pub fn validate(&self) -> AlmResult<()> {
        if !self.default_duration_years.is_finite()
            || self.default_duration_years < 0.0
            || self.default_duration_years > MAX_DURATION_YEARS
        {
            return Err(AlmError::Config(format!(
                "default_duration_years must be in [0, {MAX_DURATION_YEARS}], got {}",
                self.default_duration_years
            )));
        }
        if self.baseline_scenario.trim().is_empty() {
            return Err(AlmError::Config("baseline_scenario cannot be empty".into()));
        }
        let curve = &self.curve_scenarios;
        if !curve.steepener_step_bps.is_finite() || !curve.assumed_dv01.is_finite() {
            return Err(AlmError::Config(
                "curve scenario step and DV01 must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::Config`] on parse or validation failure.
    pub fn from_toml_str(content: &str) -> AlmResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| AlmError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> AlmResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AlmError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded ALM configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AlmConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 100);
        assert_eq!(config.default_duration_years, 3.0);
        assert_eq!(config.buckets, BucketSchedule::standard());
        assert_eq!(config.sensitivity_policy, SensitivityPolicy::ZeroFallback);
        assert_eq!(config.baseline_scenario, "Base");
        assert_eq!(config.curve_scenarios.assumed_dv01, 50.0);
        assert_eq!(config.curve_scenarios.base_curve.len(), 5);
    }

    #[test]
    fn test_sequential() {
        let config = AlmConfig::sequential();
        assert!(!config.parallel);
        assert!(!config.should_parallelize(10_000));
    }

    #[test]
    fn test_builder_pattern() {
        let config = AlmConfig::new()
            .with_threshold(50)
            .with_default_duration(2.5)
            .with_sensitivity_policy(SensitivityPolicy::Strict)
            .with_baseline_scenario("Baseline");

        assert_eq!(config.parallel_threshold, 50);
        assert_eq!(config.default_duration_years, 2.5);
        assert_eq!(config.sensitivity_policy, SensitivityPolicy::Strict);
        assert_eq!(config.baseline_scenario, "Baseline");
    }

    #[test]
    fn test_should_parallelize() {
        let config = AlmConfig::new().with_threshold(100);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(100));
        }
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AlmConfig::from_toml_str(
            r#"
            parallel = false
            default_duration_years = 2.0
            buckets = [3, 12, 60]
            sensitivity_policy = "strict"

            [[ftp_curve]]
            threshold_months = 12
            rate_pct = 1.25

            [[ftp_curve]]
            threshold_months = 60
            rate_pct = 2.75

            [curve_scenarios]
            assumed_dv01 = 45.0
            "#,
        )
        .unwrap();

        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 100);
        assert_eq!(config.default_duration_years, 2.0);
        assert_eq!(config.buckets.labels(), vec!["3M", "12M", "60M", ">60M"]);
        assert_eq!(config.sensitivity_policy, SensitivityPolicy::Strict);
        assert_eq!(config.ftp_curve.rate_for(30.0), 2.75);
        assert_eq!(config.curve_scenarios.assumed_dv01, 45.0);
        assert_eq!(config.curve_scenarios.steepener_step_bps, 10.0);
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(matches!(
            AlmConfig::from_toml_str("buckets = [12, 6]"),
            Err(AlmError::Config(_))
        ));
        assert!(matches!(
            AlmConfig::from_toml_str("default_duration_years = -1.0"),
            Err(AlmError::Config(_))
        ));
        assert!(matches!(
            AlmConfig::from_toml_str("default_duration_years = 1e9"),
            Err(AlmError::Config(_))
        ));
        let huge_rate = "ftp_curve = [{ threshold_months = 12, rate_pct = 1e30 }]";
        assert!(AlmConfig::from_toml_str(huge_rate).is_err());
        assert!(matches!(
            AlmConfig::from_toml_str("baseline_scenario = \"  \""),
            Err(AlmError::Config(_))
        ));
    }

    #[test]
    fn test_serde_json() {
        let config = AlmConfig::new().with_threshold(75);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AlmConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
