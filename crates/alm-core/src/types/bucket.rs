//! Maturity bucket classification.

use crate::error::{AlmError, AlmResult};
use serde::{Deserialize, Serialize};

/// Standard upper bucket edges in months.
pub const STANDARD_EDGES: [u32; 7] = [1, 3, 6, 12, 24, 36, 60];

/// A maturity time band produced by a [`BucketSchedule`].
///
/// Buckets are right-closed: a maturity equal to `upper` belongs to this
/// bucket. The terminal bucket has no upper edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaturityBucket {
    /// Position in the schedule (0 = shortest).
    pub index: usize,
    /// Exclusive lower edge in months (0 for the first bucket, which includes 0).
    pub lower: u32,
    /// Inclusive upper edge in months, `None` for the open-ended bucket.
    pub upper: Option<u32>,
}

impl MaturityBucket {
    /// Returns the label for this bucket (`"12M"`, `">60M"`).
    #[must_use]
    pub fn label(&self) -> String {
        match self.upper {
            Some(edge) => format!("{edge}M"),
            None => format!(">{}M", self.lower),
        }
    }

    /// Returns true if this is the open-ended bucket.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.upper.is_none()
    }

    /// Returns true if the maturity falls inside this bucket.
    #[must_use]
    pub fn contains(&self, months: f64) -> bool {
        let above_lower = self.index == 0 || months > f64::from(self.lower);
        let below_upper = self.upper.map_or(true, |u| months <= f64::from(u));
        above_lower && below_upper
    }
}

impl std::fmt::Display for MaturityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered set of upper bucket edges in months.
///
/// The default schedule is `1M, 3M, 6M, 12M, 24M, 36M, 60M, >60M`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct BucketSchedule {
    edges: Vec<u32>,
}

impl BucketSchedule {
    /// Creates a schedule from upper edges in months.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::InvalidInput`] if the edges are empty, contain
    /// zero, or are not strictly increasing.
    pub fn new(edges: Vec<u32>) -> AlmResult<Self> {
        if edges.is_empty() {
            return Err(AlmError::invalid_input("bucket schedule needs at least one edge"));
        }
        if edges[0] == 0 {
            return Err(AlmError::invalid_input("bucket edges must be positive"));
        }
        if edges.windows(2).any(|w| w[1] <= w[0]) {
            return Err(AlmError::invalid_input(format!(
                "bucket edges must be strictly increasing, got {edges:?}"
            )));
        }
        Ok(Self { edges })
    }

    /// The standard ALM schedule.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            edges: STANDARD_EDGES.to_vec(),
        }
    }

    /// Returns the finite upper edges.
    #[must_use]
    pub fn edges(&self) -> &[u32] {
        &self.edges
    }

    /// Number of buckets, including the open-ended one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len() + 1
    }

    /// Always false; a schedule has at least two buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the bucket at `index`.
    ///
    /// Indices past the last finite edge map to the open-ended bucket.
    #[must_use]
    pub fn bucket(&self, index: usize) -> MaturityBucket {
        let index = index.min(self.edges.len());
        let lower = if index == 0 { 0 } else { self.edges[index - 1] };
        MaturityBucket {
            index,
            lower,
            upper: self.edges.get(index).copied(),
        }
    }

    /// Returns all buckets in ascending maturity order.
    #[must_use]
    pub fn buckets(&self) -> Vec<MaturityBucket> {
        (0..self.len()).map(|i| self.bucket(i)).collect()
    }

    /// Returns all labels in ascending maturity order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.buckets().iter().map(MaturityBucket::label).collect()
    }

    /// Returns the bucket index for a maturity in months.
    ///
    /// The smallest edge `>= months` wins; anything beyond the last edge
    /// lands in the open-ended bucket. Zero falls in the first bucket.
    #[must_use]
    pub fn index_for(&self, months: f64) -> usize {
        self.edges
            .iter()
            .position(|&edge| months <= f64::from(edge))
            .unwrap_or(self.edges.len())
    }

    /// Classify a maturity in months into a bucket.
    #[must_use]
    pub fn bucket_for(&self, months: f64) -> MaturityBucket {
        self.bucket(self.index_for(months))
    }
}

impl Default for BucketSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<u32>> for BucketSchedule {
    type Error = AlmError;

    fn try_from(edges: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(edges)
    }
}

impl From<BucketSchedule> for Vec<u32> {
    fn from(schedule: BucketSchedule) -> Self {
        schedule.edges
    }
}
