//! Named parallel rate scenarios.

use serde::{Deserialize, Serialize};

/// Conventional name of the baseline scenario.
pub const BASE_SCENARIO: &str = "Base";

/// A named parallel rate shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,

    /// Shift in percentage points (1.0 = +100bps).
    pub rate_shift_pct: f64,
}

impl Scenario {
    /// Creates a new scenario.
    #[must_use]
    pub fn new(name: impl Into<String>, rate_shift_pct: f64) -> Self {
        Self {
            name: name.into(),
            rate_shift_pct,
        }
    }

    /// Creates the baseline scenario with the given shift.
    #[must_use]
    pub fn base(rate_shift_pct: f64) -> Self {
        Self::new(BASE_SCENARIO, rate_shift_pct)
    }

    /// Shift in basis points.
    #[must_use]
    pub fn shift_bps(&self) -> f64 {
        self.rate_shift_pct * 100.0
    }

    /// Shift as a decimal (e.g., 1.0 pct = 0.01).
    #[must_use]
    pub fn shift_decimal(&self) -> f64 {
        self.rate_shift_pct / 100.0
    }
}

/// Standard IRR scenario set.
pub mod standard {
    use super::Scenario;

    /// Builds the standard set with adjustable base, up and down shocks.
    ///
    /// `shock_down` is a magnitude; the scenario shifts by `-shock_down`.
    #[must_use]
    pub fn with_shocks(base_shift: f64, shock_up: f64, shock_down: f64) -> Vec<Scenario> {
        vec![
            Scenario::base(base_shift),
            Scenario::new("+100bps Shock", shock_up),
            Scenario::new("-100bps Shock", -shock_down),
            Scenario::new("Stable Rates", 0.0),
            Scenario::new("+50bps Bear Flattener", 0.5),
            Scenario::new("-50bps Bull Steepener", -0.5),
        ]
    }

    /// Returns the standard set with default shocks (0, +1.0, -1.0).
    #[must_use]
    pub fn all() -> Vec<Scenario> {
        with_shocks(0.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_units() {
        let s = Scenario::new("+100bps Shock", 1.0);
        assert_eq!(s.shift_bps(), 100.0);
        assert!((s.shift_decimal() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_standard_set() {
        let scenarios = standard::all();
        assert_eq!(scenarios.len(), 6);
        assert_eq!(scenarios[0].name, BASE_SCENARIO);
        assert_eq!(scenarios[0].rate_shift_pct, 0.0);
        assert_eq!(scenarios[2].rate_shift_pct, -1.0);
    }

    #[test]
    fn test_custom_shocks() {
        let scenarios = standard::with_shocks(0.25, 2.0, 1.5);
        assert_eq!(scenarios[0].rate_shift_pct, 0.25);
        assert_eq!(scenarios[1].rate_shift_pct, 2.0);
        assert_eq!(scenarios[2].rate_shift_pct, -1.5);
    }
}
