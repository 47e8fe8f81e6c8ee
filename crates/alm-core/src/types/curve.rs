//! Yield curves and transfer-pricing curves.

use crate::error::{AlmError, AlmResult};
use crate::limits::{check_bounded, MAX_RATE_PCT};
use serde::{Deserialize, Serialize};

/// A key-tenor point on a yield curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Tenor in years.
    pub tenor_years: f64,
    /// Yield in percent.
    pub yield_pct: f64,
}

impl CurvePoint {
    /// Creates a new curve point.
    #[must_use]
    pub fn new(tenor_years: f64, yield_pct: f64) -> Self {
        Self {
            tenor_years,
            yield_pct,
        }
    }
}

/// Yield curve sampled at key tenors. Tenors are strictly increasing.
///
/// No interpolation is defined between key tenors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct YieldCurve {
    points: Vec<CurvePoint>,
}

impl YieldCurve {
    /// Creates a curve from points.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::InvalidInput`] if the curve is empty, has
    /// non-finite values, or tenors are not strictly increasing.
    pub fn new(points: Vec<CurvePoint>) -> AlmResult<Self> {
        if points.is_empty() {
            return Err(AlmError::invalid_input("yield curve has no points"));
        }
        if points
            .iter()
            .any(|p| !p.tenor_years.is_finite() || !p.yield_pct.is_finite() || p.tenor_years <= 0.0)
        {
            return Err(AlmError::invalid_input(
                "yield curve tenors must be positive and yields finite",
            ));
        }
        if points.windows(2).any(|w| w[1].tenor_years <= w[0].tenor_years) {
            return Err(AlmError::invalid_input(
                "yield curve tenors must be strictly increasing",
            ));
        }
        Ok(Self { points })
    }

    /// The standard key-tenor base curve (1Y 2.0% through 30Y 3.2%).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            points: [(1.0, 2.0), (2.0, 2.1), (5.0, 2.4), (10.0, 2.8), (30.0, 3.2)]
                .iter()
                .map(|(t, y)| CurvePoint::new(*t, *y))
                .collect(),
        }
    }

    /// Creates a curve from parallel tenor and yield slices.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::InvalidInput`] if lengths differ or the points are invalid.
    pub fn from_tenors(tenors: &[f64], yields: &[f64]) -> AlmResult<Self> {
        if tenors.len() != yields.len() {
            return Err(AlmError::invalid_input(format!(
                "{} tenors but {} yields",
                tenors.len(),
                yields.len()
            )));
        }
        Self::new(
            tenors
                .iter()
                .zip(yields)
                .map(|(t, y)| CurvePoint::new(*t, *y))
                .collect(),
        )
    }

    /// Returns the curve points.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the tenors in years.
    #[must_use]
    pub fn tenors(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.tenor_years).collect()
    }

    /// Returns the yields in percent.
    #[must_use]
    pub fn yields(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.yield_pct).collect()
    }

    /// Number of key tenors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed curve.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a curve on the same tenors with yields shifted point by point.
    ///
    /// `shift` receives the tenor index and the base point and returns the
    /// change in percent.
    #[must_use]
    pub fn shifted<F>(&self, shift: F) -> Self
    where
        F: Fn(usize, &CurvePoint) -> f64,
    {
        Self {
            points: self
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| CurvePoint::new(p.tenor_years, p.yield_pct + shift(i, p)))
                .collect(),
        }
    }
}

impl TryFrom<Vec<CurvePoint>> for YieldCurve {
    type Error = AlmError;

    fn try_from(points: Vec<CurvePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<YieldCurve> for Vec<CurvePoint> {
    fn from(curve: YieldCurve) -> Self {
        curve.points
    }
}

/// A maturity threshold on a transfer-pricing curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FtpPoint {
    /// Maturity threshold in months.
    pub threshold_months: u32,
    /// Transfer rate in percent.
    pub rate_pct: f64,
}

/// Step-function transfer-pricing curve keyed by maturity threshold.
///
/// An instrument takes the rate of the first threshold at or above its
/// maturity; beyond the last threshold the curve is flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FtpPoint>", into = "Vec<FtpPoint>")]
pub struct FtpCurve {
    points: Vec<FtpPoint>,
}

impl FtpCurve {
    /// Creates a curve from points, sorting by threshold.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::InvalidInput`] if the curve is empty, a rate is
    /// non-finite or beyond [`MAX_RATE_PCT`], or a threshold appears twice.
    pub fn new(mut points: Vec<FtpPoint>) -> AlmResult<Self> {
        if points.is_empty() {
            return Err(AlmError::invalid_input("FTP curve has no points"));
        }
        for p in &points {
            check_bounded("FTP rate", p.rate_pct, MAX_RATE_PCT)?;
        }
        points.sort_by_key(|p| p.threshold_months);
        if points
            .windows(2)
            .any(|w| w[0].threshold_months == w[1].threshold_months)
        {
            return Err(AlmError::invalid_input("duplicate FTP curve threshold"));
        }
        Ok(Self { points })
    }

    /// Creates a curve from `(threshold_months, rate_pct)` pairs.
    ///
    /// # Errors
    ///
    /// See [`FtpCurve::new`].
    pub fn from_pairs(pairs: &[(u32, f64)]) -> AlmResult<Self> {
        Self::new(
            pairs
                .iter()
                .map(|(m, r)| FtpPoint {
                    threshold_months: *m,
                    rate_pct: *r,
                })
                .collect(),
        )
    }

    /// The default treasury transfer curve (12M 1.0% through 120M 3.5%).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            points: [(12, 1.0), (24, 1.5), (36, 2.0), (60, 2.5), (84, 3.0), (120, 3.5)]
                .iter()
                .map(|(m, r)| FtpPoint {
                    threshold_months: *m,
                    rate_pct: *r,
                })
                .collect(),
        }
    }

    /// Returns the curve points in ascending threshold order.
    #[must_use]
    pub fn points(&self) -> &[FtpPoint] {
        &self.points
    }

    /// Returns the largest threshold in months.
    #[must_use]
    pub fn last_threshold(&self) -> u32 {
        self.points.last().map_or(0, |p| p.threshold_months)
    }

    /// Returns true if the maturity lies beyond the last threshold.
    #[must_use]
    pub fn extrapolates(&self, maturity_months: f64) -> bool {
        maturity_months > f64::from(self.last_threshold())
    }

    /// Looks up the transfer rate for a maturity in months.
    #[must_use]
    pub fn rate_for(&self, maturity_months: f64) -> f64 {
        self.points
            .iter()
            .find(|p| maturity_months <= f64::from(p.threshold_months))
            .or_else(|| self.points.last())
            .map_or(0.0, |p| p.rate_pct)
    }
}

impl Default for FtpCurve {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<FtpPoint>> for FtpCurve {
    type Error = AlmError;

    fn try_from(points: Vec<FtpPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<FtpCurve> for Vec<FtpPoint> {
    fn from(curve: FtpCurve) -> Self {
        curve.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_curve_validation() {
        assert!(YieldCurve::from_tenors(&[1.0, 2.0], &[2.0, 2.1]).is_ok());
        assert!(YieldCurve::from_tenors(&[2.0, 1.0], &[2.0, 2.1]).is_err());
        assert!(YieldCurve::from_tenors(&[1.0, 1.0], &[2.0, 2.1]).is_err());
        assert!(YieldCurve::from_tenors(&[1.0], &[2.0, 2.1]).is_err());
        assert!(YieldCurve::from_tenors(&[], &[]).is_err());
    }

    #[test]
    fn test_shifted_keeps_tenors() {
        let curve = YieldCurve::from_tenors(&[1.0, 5.0], &[2.0, 2.4]).unwrap();
        let up = curve.shifted(|_, _| 0.25);
        assert_eq!(up.tenors(), curve.tenors());
        assert!((up.yields()[1] - 2.65).abs() < 1e-12);
    }

    #[test]
    fn test_ftp_lookup() {
        let curve = FtpCurve::standard();
        assert_eq!(curve.rate_for(0.0), 1.0);
        assert_eq!(curve.rate_for(12.0), 1.0);
        assert_eq!(curve.rate_for(18.0), 1.5);
        assert_eq!(curve.rate_for(60.0), 2.5);
        assert_eq!(curve.rate_for(84.0), 3.0);
        assert_eq!(curve.rate_for(120.0), 3.5);
        // Flat beyond the last threshold
        assert_eq!(curve.rate_for(360.0), 3.5);
        assert!(curve.extrapolates(121.0));
        assert!(!curve.extrapolates(120.0));
    }

    #[test]
    fn test_ftp_sorts_and_rejects_duplicates() {
        let curve = FtpCurve::from_pairs(&[(24, 1.5), (12, 1.0)]).unwrap();
        assert_eq!(curve.points()[0].threshold_months, 12);
        assert!(FtpCurve::from_pairs(&[(12, 1.0), (12, 1.1)]).is_err());
        assert!(FtpCurve::from_pairs(&[]).is_err());
        assert!(FtpCurve::from_pairs(&[(12, f64::NAN)]).is_err());
        assert!(FtpCurve::from_pairs(&[(12, 1e28)]).is_err());
    }

    #[test]
    fn test_ftp_serde_round_trip() {
        let json = serde_json::to_string(&FtpCurve::standard()).unwrap();
        let parsed: FtpCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, FtpCurve::standard());
    }
}
